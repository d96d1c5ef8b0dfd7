use super::*;

fn font(family: &str, size_px: f32) -> ResolvedFont {
    ResolvedFont {
        family: family.to_string(),
        size_px,
    }
}

#[test]
fn garbage_bytes_fail_registration() {
    let mut engine = TextLayoutEngine::new();
    let err = engine
        .register_font(b"definitely not a font".to_vec(), "Custom")
        .unwrap_err();
    assert!(matches!(err, DotsError::Font(_)));
    assert!(!engine.is_registered("Custom"));
}

#[test]
fn unknown_names_pass_through() {
    let engine = TextLayoutEngine::new();
    assert_eq!(engine.family_for("sans-serif"), "sans-serif");
}

#[test]
fn empty_text_measures_zero() {
    let mut engine = TextLayoutEngine::new();
    assert_eq!(engine.measure("", &font("sans-serif", 50.0)).unwrap(), 0.0);
}

#[test]
fn non_positive_size_is_rejected() {
    let mut engine = TextLayoutEngine::new();
    assert!(engine.measure("x", &font("sans-serif", 0.0)).is_err());
    assert!(engine.measure("x", &font("sans-serif", f32::NAN)).is_err());
}

#[test]
fn fallback_measurement_is_finite_and_monotonic() {
    // The host may have no system fonts at all, in which case every width is zero.
    let mut engine = TextLayoutEngine::new();
    let f = font("sans-serif", 50.0);
    let short = engine.measure("12d left", &f).unwrap();
    let long = engine.measure("123d left", &f).unwrap();
    assert!(short.is_finite() && short >= 0.0);
    assert!(long >= short);
}

fn dejavu_bytes() -> Vec<u8> {
    std::fs::read(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/data/fonts/DejaVuSans.ttf"
    ))
    .unwrap()
}

#[test]
fn registering_twice_under_one_name_is_idempotent() {
    let mut engine = TextLayoutEngine::new();
    let first = engine
        .register_font_bytes(dejavu_bytes(), "YearDots")
        .unwrap();
    let second = engine
        .register_font_bytes(dejavu_bytes(), "YearDots")
        .unwrap();

    assert_eq!(first, "DejaVu Sans");
    assert_eq!(first, second);
    assert!(engine.is_registered("YearDots"));
    assert_eq!(engine.family_for("YearDots"), "DejaVu Sans");
    assert!(engine.measure("265d left", &font("YearDots", 50.0)).unwrap() > 0.0);
}

#[test]
fn segment_widths_include_trailing_spaces() {
    let mut engine = TextLayoutEngine::new();
    engine.register_font(dejavu_bytes(), "YearDots").unwrap();
    let f = font("YearDots", 50.0);

    let head = engine.measure("ab ", &f).unwrap();
    let tail = engine.measure("cd", &f).unwrap();
    let whole = engine.measure("ab cd", &f).unwrap();
    assert!(head > engine.measure("ab", &f).unwrap());
    assert!((head + tail - whole).abs() < 0.5, "{head} + {tail} vs {whole}");
}
