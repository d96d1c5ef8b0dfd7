use super::*;

#[test]
fn canvas_new_accepts_positive_sides() {
    let c = Canvas::new(1206, 2622).unwrap();
    assert_eq!(c, Canvas::DEFAULT);
    assert_eq!(c.full_rect(), Rect::new(0.0, 0.0, 1206.0, 2622.0));
}

#[test]
fn canvas_new_rejects_non_positive_sides_as_surface_errors() {
    for (w, h) in [(0, 10), (10, 0), (-5, 10), (10, -1)] {
        let err = Canvas::new(w, h).unwrap_err();
        assert!(matches!(err, DotsError::Surface(_)), "{w}x{h}: {err}");
    }
}

#[test]
fn canvas_new_rejects_out_of_range_sides() {
    let err = Canvas::new(i64::from(u32::MAX) + 1, 10).unwrap_err();
    assert!(err.to_string().contains("out of range"));
}
