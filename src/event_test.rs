use super::*;

#[test]
fn decode_pointer_down_with_defaults() {
    let ev = decode(1, r#"{"type":"pointer_down","x":10,"y":20}"#).unwrap();
    assert_eq!(ev, HostEvent::PointerDown { x: 10.0, y: 20.0, button: Button::Primary, shift: false, ctrl: false });
    assert_eq!(ev.modifiers(), Modifiers::default());
}

#[test]
fn decode_pointer_down_with_modifiers_and_button() {
    let ev = decode(1, r#"{"type":"pointer_down","x":1.5,"y":2,"shift":true,"button":"secondary"}"#).unwrap();
    assert!(matches!(ev, HostEvent::PointerDown { button: Button::Secondary, .. }));
    assert_eq!(ev.modifiers(), Modifiers { shift: true, ctrl: false });
}

#[test]
fn decode_move_up_resize() {
    assert_eq!(
        decode(1, r#"{"type":"pointer_move","x":3,"y":4}"#).unwrap(),
        HostEvent::PointerMove { x: 3.0, y: 4.0 }
    );
    assert_eq!(decode(1, r#"{"type":"pointer_up","x":3,"y":4}"#).unwrap(), HostEvent::PointerUp { x: 3.0, y: 4.0 });
    assert_eq!(
        decode(1, r#"{"type":"resize","width":800,"height":600}"#).unwrap(),
        HostEvent::Resize { width: 800.0, height: 600.0 }
    );
}

#[test]
fn decode_key_carries_modifiers() {
    let ev = decode(1, r#"{"type":"key","key":"v","ctrl":true}"#).unwrap();
    assert_eq!(ev.modifiers(), Modifiers { shift: false, ctrl: true });
}

#[test]
fn decode_error_names_line() {
    let err = decode(7, r#"{"type":"teleport"}"#).unwrap_err();
    assert!(matches!(err, HostError::Decode { line: 7, .. }));
    assert!(err.to_string().starts_with("line 7:"));
}

#[test]
fn decode_rejects_missing_coordinates() {
    assert!(decode(1, r#"{"type":"pointer_move","x":3}"#).is_err());
    assert!(decode(1, "not json").is_err());
}

#[test]
fn parse_key_single_characters() {
    assert_eq!(parse_key("q").unwrap(), Key::Char('q'));
    assert_eq!(parse_key("+").unwrap(), Key::Char('+'));
    assert_eq!(parse_key("3").unwrap(), Key::Char('3'));
}

#[test]
fn parse_key_named_keys_any_case() {
    assert_eq!(parse_key("ArrowUp").unwrap(), Key::ArrowUp);
    assert_eq!(parse_key("arrowleft").unwrap(), Key::ArrowLeft);
    assert_eq!(parse_key("DELETE").unwrap(), Key::Delete);
    assert_eq!(parse_key("Backspace").unwrap(), Key::Backspace);
    assert_eq!(parse_key("Esc").unwrap(), Key::Escape);
}

#[test]
fn parse_key_unknown_name_errors() {
    let err = parse_key("F13").unwrap_err();
    assert!(matches!(err, HostError::UnknownKey(ref name) if name == "F13"));
    assert!(parse_key("").is_err());
}

#[test]
fn decode_bytes_rejects_invalid_utf8() {
    let err = decode_bytes(4, b"{\"type\":\"key\",\"key\":\"\xff\"}".to_vec()).unwrap_err();
    assert!(matches!(err, HostError::Utf8 { line: 4, .. }));
    assert!(err.to_string().starts_with("line 4:"));
}

#[test]
fn decode_bytes_skips_blank_and_trims() {
    assert_eq!(decode_bytes(1, b"  \r".to_vec()).unwrap(), None);
    assert_eq!(
        decode_bytes(2, b"{\"type\":\"pointer_up\",\"x\":1,\"y\":2}\r".to_vec()).unwrap(),
        Some(HostEvent::PointerUp { x: 1.0, y: 2.0 })
    );
}
