use super::*;

#[test]
fn unrecognized_character_message() {
    let err = LexError::unrecognized(b';', Position::new(7, 2, 4));
    assert_eq!(err.to_string(), "2:4: unrecognized character ';' (0x3B)");
}

#[test]
fn unrecognized_control_byte_is_escaped() {
    let err = LexError::unrecognized(0x07, Position::START);
    assert_eq!(err.to_string(), "1:1: unrecognized character '\\u{7}' (0x07)");
}

#[test]
fn unterminated_string_message() {
    let err = LexError::unterminated_string(b'"', Position::new(0, 1, 9));
    assert_eq!(err.kind, LexErrorKind::UnterminatedString { quote: b'"' });
    assert_eq!(err.to_string(), "1:9: unterminated string: missing closing \"");
}

#[test]
fn conversion_messages() {
    let malformed = ConversionError::Malformed {
        text: "abc".to_owned(),
        expected: NumericKind::Decimal,
        position: Position::new(0, 3, 2),
    };
    assert_eq!(malformed.to_string(), "3:2: `abc` is not a decimal literal");

    let range = ConversionError::OutOfRange {
        text: "300".to_owned(),
        position: Position::new(0, 1, 1),
    };
    assert_eq!(
        range.to_string(),
        "1:1: integer literal `300` is out of range for the requested type"
    );
}

#[test]
fn errors_are_std_errors() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
    assert_error::<LexError>();
    assert_error::<ConversionError>();
}
