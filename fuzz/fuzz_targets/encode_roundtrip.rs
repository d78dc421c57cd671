#![no_main]

use libfuzzer_sys::fuzz_target;

use cursor_codec::{
    Base32Alphabet, Base64Alphabet, BitOrder, Codec, DecodeOptions, EncodeOptions,
};

fn codec_for(selector: u8) -> Codec {
    let order = if selector & 0x10 == 0 {
        BitOrder::BigEndian
    } else {
        BitOrder::LittleEndian
    };
    match selector % 3 {
        0 => Codec::BASE16,
        1 => Codec::Base32(Base32Alphabet::STANDARD.with_bit_order(order)),
        _ => Codec::Base64(Base64Alphabet::URL_SAFE.with_bit_order(order)),
    }
}

fuzz_target!(|data: &[u8]| {
    let Some((&selector, bytes)) = data.split_first() else {
        return;
    };
    let codec = codec_for(selector);
    let options = EncodeOptions {
        add_padding: selector & 0x20 != 0,
        to_upper_case: selector & 0x40 != 0,
    };

    let text = codec.encode_to_string(bytes, options).expect("encode");
    assert_eq!(
        Some(text.len()),
        codec.encoded_len(bytes.len(), options.add_padding)
    );

    let mut out = vec![0u8; codec.decoded_len_estimate(text.len())];
    let n = codec
        .decode_into(&text, &mut out, DecodeOptions::lenient())
        .expect("decode");
    assert_eq!(&out[..n], bytes);
});
