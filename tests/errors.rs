#![cfg(feature = "alloc")]

use cursor_codec::{
    ByteCursor, Codec, CodecError, CodePointCursor, Cursor, DecodeOptions, EncodeOptions,
    ErrorCode, ErrorKind, SliceCursor, StrCursor,
};

fn decode_err(codec: Codec, text: &str, options: DecodeOptions) -> (ErrorCode, usize) {
    let err = codec.decode_to_vec(text, options).unwrap_err();
    (err.code, err.offset)
}

fn strict(codec: Codec, text: &str) -> (ErrorCode, usize) {
    decode_err(codec, text, DecodeOptions::default())
}

fn lenient(codec: Codec, text: &str) -> (ErrorCode, usize) {
    decode_err(codec, text, DecodeOptions::lenient())
}

#[test]
fn invalid_character_reports_its_offset() {
    assert_eq!(strict(Codec::BASE64, "Zm9v!m9v"), (ErrorCode::InvalidCharacter, 4));
    assert_eq!(strict(Codec::BASE64, "Zm9v\n"), (ErrorCode::InvalidCharacter, 4));
    assert_eq!(strict(Codec::BASE64, "-m9v"), (ErrorCode::InvalidCharacter, 0));
    assert_eq!(strict(Codec::BASE32, "mzxw6==="), (ErrorCode::InvalidCharacter, 0));
    assert_eq!(strict(Codec::BASE32, "MZXW1==="), (ErrorCode::InvalidCharacter, 4));
    assert_eq!(strict(Codec::BASE16, "0g"), (ErrorCode::InvalidCharacter, 1));
    assert_eq!(strict(Codec::BASE16, "a="), (ErrorCode::InvalidCharacter, 1));
    // Offsets count code points, not UTF-8 bytes.
    assert_eq!(strict(Codec::BASE64, "Zm9vé"), (ErrorCode::InvalidCharacter, 4));
}

#[test]
fn padding_too_early() {
    assert_eq!(strict(Codec::BASE64, "Z==="), (ErrorCode::UnexpectedPadding, 1));
    assert_eq!(strict(Codec::BASE64, "Zm9v===="), (ErrorCode::UnexpectedPadding, 4));
    assert_eq!(strict(Codec::BASE32, "MYA====="), (ErrorCode::UnexpectedPadding, 3));
    assert_eq!(strict(Codec::BASE32, "M======="), (ErrorCode::UnexpectedPadding, 1));
    // The validity rule does not depend on the padding policy.
    assert_eq!(lenient(Codec::BASE64, "Z==="), (ErrorCode::UnexpectedPadding, 1));
}

#[test]
fn padding_missing_or_interrupted() {
    assert_eq!(strict(Codec::BASE64, "Zg"), (ErrorCode::ExpectedPadding, 2));
    assert_eq!(strict(Codec::BASE64, "Zg="), (ErrorCode::ExpectedPadding, 3));
    assert_eq!(strict(Codec::BASE64, "Zg=a"), (ErrorCode::ExpectedPadding, 3));
    assert_eq!(strict(Codec::BASE32, "MZXQ==="), (ErrorCode::ExpectedPadding, 7));
    assert_eq!(strict(Codec::BASE32, "MZXW6YQ"), (ErrorCode::ExpectedPadding, 7));
    // A truncated padding run is rejected even when padding is optional.
    assert_eq!(lenient(Codec::BASE64, "Zg="), (ErrorCode::ExpectedPadding, 3));
}

#[test]
fn incomplete_final_group() {
    assert_eq!(lenient(Codec::BASE64, "Z"), (ErrorCode::IncompleteGroup, 1));
    assert_eq!(lenient(Codec::BASE64, "Zm9vY"), (ErrorCode::IncompleteGroup, 5));
    assert_eq!(lenient(Codec::BASE32, "MZX"), (ErrorCode::IncompleteGroup, 3));
    assert_eq!(lenient(Codec::BASE32, "MZXW6Y"), (ErrorCode::IncompleteGroup, 6));
    assert_eq!(strict(Codec::BASE64, "Z"), (ErrorCode::IncompleteGroup, 1));
}

#[test]
fn odd_hex_length() {
    assert_eq!(strict(Codec::BASE16, "abc"), (ErrorCode::OddLength, 3));
    assert_eq!(lenient(Codec::BASE16, "f"), (ErrorCode::OddLength, 1));
}

#[test]
fn symbols_after_a_padded_group() {
    assert_eq!(strict(Codec::BASE64, "Zg==Zg=="), (ErrorCode::TrailingSymbols, 4));
    assert_eq!(strict(Codec::BASE32, "MY======A"), (ErrorCode::TrailingSymbols, 8));

    let mut bytes = StrCursor::new("Zg==Zg==").decode(Codec::BASE64, DecodeOptions::default());
    assert_eq!(bytes.next().unwrap(), b'f');
    let err = bytes.has_next().unwrap_err();
    assert_eq!((err.code, err.offset), (ErrorCode::TrailingSymbols, 4));
}

#[test]
fn earlier_bytes_survive_an_error() {
    let mut bytes = StrCursor::new("Zm9v!m9v").decode(Codec::BASE64, DecodeOptions::default());
    let mut buf = [0u8; 8];
    let err = bytes.fill(&mut buf).unwrap_err();
    assert_eq!((err.code, err.offset), (ErrorCode::InvalidCharacter, 4));
    assert_eq!(&buf[..3], b"foo");
    assert_eq!(bytes.index(), 3);

    // Retrying hits the same error, and the decoded prefix is still reachable.
    assert_eq!(bytes.peek_next().unwrap_err(), err);
    assert_eq!(bytes.next().unwrap_err(), err);
    assert_eq!(bytes.previous().unwrap(), b'o');
    assert_eq!(bytes.previous().unwrap(), b'o');
    assert_eq!(bytes.next().unwrap(), b'o');
    assert_eq!(bytes.next().unwrap(), b'o');
    assert_eq!(bytes.has_next().unwrap_err(), err);
}

#[test]
fn iter_yields_the_error_once() {
    let mut bytes = StrCursor::new("Zm9v!").decode(Codec::BASE64, DecodeOptions::default());
    let items: Vec<_> = bytes.iter().collect();
    assert_eq!(
        items,
        vec![
            Ok(b'f'),
            Ok(b'o'),
            Ok(b'o'),
            Err(CodecError::new(ErrorCode::InvalidCharacter, 4)),
        ]
    );
}

#[test]
fn exhausted_in_both_directions() {
    let mut empty = SliceCursor::<u8>::new(&[]);
    let err = empty.next().unwrap_err();
    assert_eq!((err.code, err.offset), (ErrorCode::Exhausted, 0));
    assert_eq!(err.kind(), ErrorKind::Contract);
    assert!(!err.is_malformed());
    assert_eq!(empty.previous().unwrap_err().code, ErrorCode::Exhausted);

    let mut symbols = SliceCursor::new(b"f").encode(Codec::BASE64, EncodeOptions::default());
    assert_eq!(symbols.previous().unwrap_err().code, ErrorCode::Exhausted);
    assert_eq!(symbols.collect_string().unwrap(), "Zg==");
    let err = symbols.next().unwrap_err();
    assert_eq!((err.code, err.offset), (ErrorCode::Exhausted, 4));
    let err = symbols.peek_next().unwrap_err();
    assert_eq!((err.code, err.offset), (ErrorCode::Exhausted, 4));

    let mut bytes = StrCursor::new("").decode(Codec::BASE32, DecodeOptions::default());
    assert!(!bytes.has_next().unwrap());
    assert!(!bytes.has_previous().unwrap());
    assert_eq!(bytes.peek_previous().unwrap_err().code, ErrorCode::Exhausted);
}

#[test]
fn invalid_utf8_source() {
    let err = StrCursor::from_utf8(b"Zm9v\xffYmFy").unwrap_err();
    assert_eq!((err.code, err.offset), (ErrorCode::InvalidUtf8, 4));
    assert!(err.is_malformed());

    let mut cursor = StrCursor::from_utf8("Zm9vé".as_bytes()).unwrap();
    assert_eq!(cursor.collect_string().unwrap(), "Zm9vé");
}

#[test]
fn error_kinds() {
    assert_eq!(ErrorCode::Exhausted.kind(), ErrorKind::Contract);
    for code in [
        ErrorCode::InvalidCharacter,
        ErrorCode::UnexpectedPadding,
        ErrorCode::ExpectedPadding,
        ErrorCode::IncompleteGroup,
        ErrorCode::OddLength,
        ErrorCode::TrailingSymbols,
        ErrorCode::InvalidUtf8,
    ] {
        assert_eq!(code.kind(), ErrorKind::Malformed);
    }
    assert_eq!(ErrorCode::InvalidAlphabet.kind(), ErrorKind::Config);
    for code in [
        ErrorCode::BufferTooSmall,
        ErrorCode::LengthOverflow,
        ErrorCode::AllocationFailed,
    ] {
        assert_eq!(code.kind(), ErrorKind::Resource);
    }
}

#[test]
fn display_names_offset_and_cause() {
    let err = CodecError::new(ErrorCode::InvalidCharacter, 4);
    assert_eq!(err.to_string(), "decode failed at 4: symbol not in alphabet");
    assert_eq!(
        CodecError::exhausted(7).to_string(),
        "cursor exhausted at 7"
    );
    assert_eq!(
        CodecError::new(ErrorCode::BufferTooSmall, 3).to_string(),
        "codec failed at 3: output buffer too small"
    );
    assert_eq!(
        CodecError::new(ErrorCode::InvalidAlphabet, 2).to_string(),
        "invalid alphabet (symbol 2)"
    );
}

#[cfg(feature = "std")]
#[test]
fn std_error_integration() {
    fn boxed() -> Result<Vec<u8>, Box<dyn std::error::Error>> {
        Ok(Codec::BASE64.decode_to_vec("Zm9v!", DecodeOptions::default())?)
    }
    let err = boxed().unwrap_err();
    assert_eq!(err.to_string(), "decode failed at 4: symbol not in alphabet");
}
