#![no_main]

use libfuzzer_sys::fuzz_target;

use cursor_codec::{Codec, CodePointCursor, Cursor, DecodeOptions, StrCursor};

fuzz_target!(|data: &[u8]| {
    let Ok(source) = StrCursor::from_utf8(data) else {
        return;
    };
    let mut bytes = source
        .skip_if(|c: char| c.is_ascii_whitespace())
        .decode(Codec::BASE64, DecodeOptions::lenient());

    let mut forward = Vec::new();
    let failure = loop {
        match bytes.has_next() {
            Ok(true) => forward.push(bytes.next().expect("next after has_next")),
            Ok(false) => break None,
            Err(err) => break Some(err),
        }
    };
    if let Some(err) = failure {
        // Retrying must not change the outcome.
        assert_eq!(bytes.has_next().unwrap_err(), err);
    }

    let mut backward = Vec::new();
    while bytes.has_previous().expect("decoded groups stay valid") {
        backward.push(bytes.previous().expect("previous after has_previous"));
    }
    backward.reverse();
    assert_eq!(backward, forward);
    assert_eq!(bytes.index(), 0);
});
