#![no_main]

use libfuzzer_sys::fuzz_target;

use cursor_codec::{Codec, DecodeOptions, EncodeOptions, StrCursor};

const CODECS: [Codec; 5] = [
    Codec::BASE16,
    Codec::BASE32,
    Codec::BASE32_HEX,
    Codec::BASE64,
    Codec::BASE64_URL_SAFE,
];

fuzz_target!(|data: &[u8]| {
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };
    let codec = CODECS[usize::from(selector) % CODECS.len()];
    let options = DecodeOptions {
        require_padding: selector & 0x80 != 0,
    };
    let Ok(cursor) = StrCursor::from_utf8(rest) else {
        return;
    };
    let text = cursor.remaining();

    match codec.decode_to_vec(text, options) {
        Ok(bytes) => {
            // Accepted input must be reproducible by the encoder up to trailing bits.
            let again = codec
                .encode_to_string(&bytes, EncodeOptions::DEFAULT)
                .expect("re-encode");
            let back = codec
                .decode_to_vec(&again, DecodeOptions::DEFAULT)
                .expect("decode re-encoded text");
            assert_eq!(back, bytes);
        }
        Err(err) => {
            assert!(err.is_malformed(), "{err}");
            assert!(err.offset <= text.chars().count());
        }
    }
});
