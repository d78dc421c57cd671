#![allow(clippy::unwrap_used)]

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use cursor_codec::{ByteCursor, Codec, Cursor, DecodeOptions, EncodeOptions, SliceCursor};

fn sample(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 31 + 7) as u8).collect()
}

fn bench_encode(c: &mut Criterion) {
    let data = sample(4096);

    for (name, codec) in [
        ("encode_base16_4k", Codec::BASE16),
        ("encode_base32_4k", Codec::BASE32),
        ("encode_base64_4k", Codec::BASE64),
    ] {
        c.bench_function(name, |b| {
            b.iter(|| {
                let text = codec
                    .encode_to_string(black_box(&data), EncodeOptions::DEFAULT)
                    .unwrap();
                black_box(text);
            })
        });
    }

    let mut out = vec![0u8; Codec::BASE64.encoded_len(data.len(), true).unwrap()];
    c.bench_function("encode_into_base64_4k", |b| {
        b.iter(|| {
            let n = Codec::BASE64
                .encode_into(black_box(&data), &mut out, EncodeOptions::DEFAULT)
                .unwrap();
            black_box(n);
        })
    });
}

fn bench_decode(c: &mut Criterion) {
    let data = sample(4096);

    for (name, codec) in [
        ("decode_base16_4k", Codec::BASE16),
        ("decode_base32_4k", Codec::BASE32),
        ("decode_base64_4k", Codec::BASE64),
    ] {
        let text = codec.encode_to_string(&data, EncodeOptions::DEFAULT).unwrap();
        c.bench_function(name, |b| {
            b.iter(|| {
                let bytes = codec
                    .decode_to_vec(black_box(&text), DecodeOptions::DEFAULT)
                    .unwrap();
                black_box(bytes);
            })
        });
    }
}

fn bench_backward(c: &mut Criterion) {
    let data = sample(4096);

    c.bench_function("encode_base64_4k_rewind", |b| {
        b.iter(|| {
            let mut symbols =
                SliceCursor::new(black_box(&data)).encode(Codec::BASE64, EncodeOptions::DEFAULT);
            let mut buf = ['\0'; 256];
            while symbols.fill(&mut buf).unwrap() == buf.len() {}
            black_box(symbols.rewind().unwrap());
        })
    });
}

criterion_group!(benches, bench_encode, bench_decode, bench_backward);
criterion_main!(benches);
