use alloc::vec::Vec;
use core::fmt;

use serde::de::{Deserializer, Visitor};
use serde::ser::Serializer;

use crate::{Codec, DecodeOptions, EncodeOptions};

fn serialize_with<S: Serializer>(
    codec: Codec,
    options: EncodeOptions,
    bytes: &[u8],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let text = codec
        .encode_to_string(bytes, options)
        .map_err(serde::ser::Error::custom)?;
    serializer.serialize_str(&text)
}

fn deserialize_with<'de, D: Deserializer<'de>>(
    codec: Codec,
    options: DecodeOptions,
    deserializer: D,
) -> Result<Vec<u8>, D::Error> {
    deserializer.deserialize_str(EncodedVisitor { codec, options })
}

struct EncodedVisitor {
    codec: Codec,
    options: DecodeOptions,
}

impl Visitor<'_> for EncodedVisitor {
    type Value = Vec<u8>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.codec {
            Codec::Base16 => f.write_str("a hexadecimal string"),
            Codec::Base32(_) => f.write_str("a Base32 string"),
            Codec::Base64(_) => f.write_str("a Base64 string"),
        }
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        self.codec
            .decode_to_vec(v, self.options)
            .map_err(E::custom)
    }
}

macro_rules! with_module {
    ($(#[$doc:meta])* $name:ident, $codec:expr, $encode:expr, $decode:expr) => {
        $(#[$doc])*
        pub mod $name {
            use alloc::vec::Vec;

            use serde::{Deserializer, Serializer};

            use crate::{Codec, DecodeOptions, EncodeOptions};

            /// Serializes bytes as an encoded string.
            ///
            /// # Errors
            ///
            /// Returns the serializer's error if the string cannot be produced or written.
            pub fn serialize<T, S>(bytes: &T, serializer: S) -> Result<S::Ok, S::Error>
            where
                T: AsRef<[u8]> + ?Sized,
                S: Serializer,
            {
                super::serialize_with($codec, $encode, bytes.as_ref(), serializer)
            }

            /// Deserializes bytes from an encoded string.
            ///
            /// # Errors
            ///
            /// Returns the deserializer's error if the input is not a valid encoded string.
            pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
            where
                D: Deserializer<'de>,
            {
                super::deserialize_with($codec, $decode, deserializer)
            }
        }
    };
}

with_module!(
    /// Lower-case hexadecimal.
    base16,
    Codec::BASE16,
    EncodeOptions::DEFAULT,
    DecodeOptions::DEFAULT
);

with_module!(
    /// Padded RFC 4648 Base32.
    base32,
    Codec::BASE32,
    EncodeOptions::DEFAULT,
    DecodeOptions::DEFAULT
);

with_module!(
    /// Padded RFC 4648 Base64.
    base64,
    Codec::BASE64,
    EncodeOptions::DEFAULT,
    DecodeOptions::DEFAULT
);

with_module!(
    /// Unpadded URL-safe Base64; padded input is accepted too.
    base64_url,
    Codec::BASE64_URL_SAFE,
    EncodeOptions::unpadded(),
    DecodeOptions::lenient()
);
