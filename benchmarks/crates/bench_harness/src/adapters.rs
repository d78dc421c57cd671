use cursor_codec::{ByteCursor, Codec, Cursor, DecodeOptions, EncodeOptions, SliceCursor};

/// One implementation of padded RFC 4648 Base64 under test.
pub trait Adapter {
    fn name(&self) -> &'static str;
    fn encode(&self, bytes: &[u8]) -> Result<String, String>;
    fn decode(&self, text: &str) -> Result<Vec<u8>, String>;
}

/// One-shot helpers: `Codec::encode_to_string` / `Codec::decode_to_vec`.
pub struct CursorCodec;

impl Adapter for CursorCodec {
    fn name(&self) -> &'static str {
        "cursor-codec"
    }

    fn encode(&self, bytes: &[u8]) -> Result<String, String> {
        Codec::BASE64
            .encode_to_string(bytes, EncodeOptions::DEFAULT)
            .map_err(|e| format!("{e}"))
    }

    fn decode(&self, text: &str) -> Result<Vec<u8>, String> {
        Codec::BASE64
            .decode_to_vec(text, DecodeOptions::DEFAULT)
            .map_err(|e| format!("{e}"))
    }
}

/// Drains the encoder cursor through a fixed chunk, the bounded-memory path.
pub struct CursorCodecChunked;

const CHUNK: usize = 256;

impl Adapter for CursorCodecChunked {
    fn name(&self) -> &'static str {
        "cursor-codec-chunked"
    }

    fn encode(&self, bytes: &[u8]) -> Result<String, String> {
        let mut symbols = SliceCursor::new(bytes).encode(Codec::BASE64, EncodeOptions::DEFAULT);
        let mut out = String::with_capacity(
            Codec::BASE64
                .encoded_len(bytes.len(), true)
                .ok_or_else(|| "length overflow".to_string())?,
        );
        let mut buf = ['\0'; CHUNK];
        loop {
            let n = symbols.fill(&mut buf).map_err(|e| format!("{e}"))?;
            out.extend(&buf[..n]);
            if n < CHUNK {
                return Ok(out);
            }
        }
    }

    fn decode(&self, text: &str) -> Result<Vec<u8>, String> {
        let mut out = vec![0u8; Codec::BASE64.decoded_len_estimate(text.len())];
        let n = Codec::BASE64
            .decode_into(text, &mut out, DecodeOptions::DEFAULT)
            .map_err(|e| format!("{e}"))?;
        out.truncate(n);
        Ok(out)
    }
}

#[cfg(feature = "adapter-base64")]
pub struct Base64Crate;

#[cfg(feature = "adapter-base64")]
impl Adapter for Base64Crate {
    fn name(&self) -> &'static str {
        "base64"
    }

    fn encode(&self, bytes: &[u8]) -> Result<String, String> {
        use base64::Engine;
        Ok(base64::engine::general_purpose::STANDARD.encode(bytes))
    }

    fn decode(&self, text: &str) -> Result<Vec<u8>, String> {
        use base64::Engine;
        base64::engine::general_purpose::STANDARD
            .decode(text)
            .map_err(|e| format!("{e}"))
    }
}

pub fn adapters() -> Vec<Box<dyn Adapter>> {
    let mut out: Vec<Box<dyn Adapter>> = Vec::new();
    out.push(Box::new(CursorCodec));
    out.push(Box::new(CursorCodecChunked));
    #[cfg(feature = "adapter-base64")]
    out.push(Box::new(Base64Crate));
    out
}
