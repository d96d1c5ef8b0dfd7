use super::*;
use serde_json::json;

#[test]
fn parses_hex_rgb_and_rgba() {
    let c: Rgba8 = serde_json::from_value(json!("#f97316")).unwrap();
    assert_eq!(c, Rgba8::rgb(0xf9, 0x73, 0x16));

    let c: Rgba8 = serde_json::from_value(json!("27272A80")).unwrap();
    assert_eq!(c, Rgba8::rgba(0x27, 0x27, 0x2a, 0x80));
}

#[test]
fn parses_byte_arrays() {
    let c: Rgba8 = serde_json::from_value(json!([1, 2, 3])).unwrap();
    assert_eq!(c, Rgba8::rgb(1, 2, 3));

    let c: Rgba8 = serde_json::from_value(json!([1, 2, 3, 4])).unwrap();
    assert_eq!(c, Rgba8::rgba(1, 2, 3, 4));

    assert!(serde_json::from_value::<Rgba8>(json!([1, 2])).is_err());
}

#[test]
fn rejects_malformed_hex() {
    assert!(Rgba8::from_hex("#fff").is_err());
    assert!(Rgba8::from_hex("#gg0000").is_err());
    assert!(Rgba8::from_hex("#ff00é0").is_err());
}

#[test]
fn serializes_as_short_hex_when_opaque() {
    assert_eq!(serde_json::to_value(Rgba8::WHITE).unwrap(), json!("#ffffff"));
    assert_eq!(Rgba8::rgba(0, 0, 0, 0x80).to_hex(), "#00000080");
}
