#![cfg(feature = "alloc")]

use cursor_codec::{
    Base32Alphabet, Base64Alphabet, BitOrder, ByteCursor, Codec, CodePointCursor, Cursor,
    DecodeOptions, EncodeOptions, SliceCursor, StrCursor,
};

/// Walks `cursor` to the end and back, checking the peek and inverse-move laws at every step.
fn walk<C: Cursor>(mut cursor: C) -> Vec<C::Item> {
    let mut forward = Vec::new();
    while cursor.has_next().unwrap() {
        let peeked = cursor.peek_next().unwrap();
        assert_eq!(cursor.peek_next().unwrap(), peeked);
        let unit = cursor.next().unwrap();
        assert_eq!(unit, peeked);
        assert_eq!(cursor.peek_previous().unwrap(), unit);
        assert_eq!(cursor.previous().unwrap(), unit);
        assert_eq!(cursor.index(), forward.len());
        assert_eq!(cursor.next().unwrap(), unit);
        forward.push(unit);
        assert_eq!(cursor.index(), forward.len());
    }
    assert!(!cursor.has_next().unwrap());

    let mut backward = Vec::new();
    while cursor.has_previous().unwrap() {
        let peeked = cursor.peek_previous().unwrap();
        let unit = cursor.previous().unwrap();
        assert_eq!(unit, peeked);
        backward.push(unit);
        assert_eq!(cursor.index(), forward.len() - backward.len());
    }
    backward.reverse();
    assert_eq!(backward, forward);
    assert_eq!(cursor.index(), 0);
    forward
}

fn text(symbols: Vec<char>) -> String {
    symbols.into_iter().collect()
}

#[test]
fn encoder_walks_both_ways() {
    let cases: &[(Codec, &[u8], EncodeOptions, &str)] = &[
        (Codec::BASE64, b"foobar", EncodeOptions::DEFAULT, "Zm9vYmFy"),
        (Codec::BASE64, b"foob", EncodeOptions::DEFAULT, "Zm9vYg=="),
        (Codec::BASE64, b"foob", EncodeOptions::unpadded(), "Zm9vYg"),
        (Codec::BASE32, b"foobar", EncodeOptions::DEFAULT, "MZXW6YTBOI======"),
        (Codec::BASE16, &[0xde, 0xad], EncodeOptions::upper_case(), "DEAD"),
        (Codec::BASE64, b"", EncodeOptions::DEFAULT, ""),
    ];
    for &(codec, bytes, options, expected) in cases {
        let symbols = walk(SliceCursor::new(bytes).encode(codec, options));
        assert_eq!(text(symbols), expected);
    }
}

#[test]
fn decoder_walks_both_ways() {
    let cases: &[(Codec, &str, DecodeOptions, &[u8])] = &[
        (Codec::BASE64, "Zm9vYmFy", DecodeOptions::DEFAULT, b"foobar"),
        (Codec::BASE64, "Zm9vYg==", DecodeOptions::DEFAULT, b"foob"),
        (Codec::BASE64, "Zm9vYg", DecodeOptions::lenient(), b"foob"),
        (Codec::BASE32, "MZXW6YTBOI======", DecodeOptions::DEFAULT, b"foobar"),
        (Codec::BASE16, "DeAd", DecodeOptions::DEFAULT, &[0xde, 0xad]),
        (Codec::BASE32, "", DecodeOptions::DEFAULT, b""),
    ];
    for &(codec, encoded, options, expected) in cases {
        assert_eq!(walk(StrCursor::new(encoded).decode(codec, options)), expected);
    }
}

#[test]
fn little_endian_walks_both_ways() {
    let b64 = Codec::Base64(Base64Alphabet::STANDARD.with_bit_order(BitOrder::LittleEndian));
    let b32 = Codec::Base32(Base32Alphabet::STANDARD.with_bit_order(BitOrder::LittleEndian));
    assert_eq!(
        text(walk(SliceCursor::new(b"foobar").encode(b64, EncodeOptions::DEFAULT))),
        "m92biFmc"
    );
    assert_eq!(
        walk(StrCursor::new("G336GRFMSD======").decode(b32, DecodeOptions::DEFAULT)),
        b"foobar"
    );
}

#[test]
fn direction_changes_mid_group() {
    let mut symbols = SliceCursor::new(b"foobar").encode(Codec::BASE64, EncodeOptions::DEFAULT);
    assert_eq!(symbols.next().unwrap(), 'Z');
    assert_eq!(symbols.next().unwrap(), 'm');
    assert_eq!(symbols.previous().unwrap(), 'm');
    assert_eq!(symbols.next().unwrap(), 'm');
    assert_eq!(symbols.next().unwrap(), '9');
    assert_eq!(symbols.next().unwrap(), 'v');
    // Crossing into the second group and straight back out.
    assert_eq!(symbols.next().unwrap(), 'Y');
    assert_eq!(symbols.previous().unwrap(), 'Y');
    assert_eq!(symbols.previous().unwrap(), 'v');
    assert_eq!(symbols.index(), 3);
    assert_eq!(symbols.peek_next().unwrap(), 'v');
    assert_eq!(symbols.peek_previous().unwrap(), '9');
}

#[test]
fn backward_from_the_end_rebuilds_groups() {
    let mut bytes = StrCursor::new("Zm9vYmFyZg==").decode(Codec::BASE64, DecodeOptions::DEFAULT);
    let mut buf = [0u8; 16];
    assert_eq!(bytes.fill(&mut buf).unwrap(), 7);
    assert_eq!(&buf[..7], b"foobarf");
    assert_eq!(bytes.source().index(), 12);

    assert_eq!(bytes.previous().unwrap(), b'f');
    assert_eq!(bytes.previous().unwrap(), b'r');
    // The previous full group was re-read from the source.
    assert_eq!(bytes.source().index(), 8);
    assert_eq!(bytes.rewind().unwrap(), 5);
    assert_eq!(bytes.index(), 0);
    // Rewinding re-read the first group, leaving the source after it.
    assert_eq!(bytes.source().index(), 4);
}

#[test]
fn rewind_and_refill_repeat_the_output() {
    let mut symbols = SliceCursor::new(b"fooba").encode(Codec::BASE32, EncodeOptions::DEFAULT);
    let first = symbols.collect_string().unwrap();
    assert_eq!(symbols.rewind().unwrap(), first.chars().count());
    let second = symbols.collect_string().unwrap();
    assert_eq!(first, "MZXW6YTB");
    assert_eq!(first, second);
}

#[test]
fn codec_created_mid_stream_stops_at_its_start() {
    let mut source = StrCursor::new("##Zm9v");
    source.next().unwrap();
    source.next().unwrap();

    let mut bytes = source.decode(Codec::BASE64, DecodeOptions::DEFAULT);
    assert_eq!(bytes.collect_vec().unwrap(), b"foo");
    assert_eq!(bytes.rewind().unwrap(), 3);
    assert!(!bytes.has_previous().unwrap());
    assert_eq!(bytes.index(), 0);

    // The symbols before the creation point are still there, just not decoded.
    let mut source = bytes.into_inner();
    assert_eq!(source.index(), 6);
    assert_eq!(source.rewind().unwrap(), 6);
}

#[test]
fn stacked_codecs_transcode_both_ways() {
    let base32 = StrCursor::new("Zm9vYmFy")
        .decode(Codec::BASE64, DecodeOptions::DEFAULT)
        .encode(Codec::BASE32, EncodeOptions::DEFAULT);
    assert_eq!(text(walk(base32)), "MZXW6YTBOI======");

    let hex = SliceCursor::new(b"fo")
        .encode(Codec::BASE64_URL_SAFE, EncodeOptions::unpadded())
        .decode(Codec::BASE64_URL_SAFE, DecodeOptions::lenient())
        .encode(Codec::BASE16, EncodeOptions::DEFAULT);
    assert_eq!(text(walk(hex)), "666f");
}

#[test]
fn borrowed_cursor_keeps_its_position() {
    let mut source = SliceCursor::new(b"foobar");
    {
        let mut symbols = source.by_ref().encode(Codec::BASE64, EncodeOptions::DEFAULT);
        let mut buf = ['\0'; 4];
        assert_eq!(symbols.fill(&mut buf).unwrap(), 4);
        assert_eq!(buf, ['Z', 'm', '9', 'v']);
    }
    // Only the first group was read.
    assert_eq!(source.index(), 3);
    assert_eq!(source.remaining(), b"bar");
}
