#[cfg(feature = "alloc")]
use alloc::string::String;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use crate::alphabet::{Base32Alphabet, Base64Alphabet, BitOrder};
#[cfg(feature = "alloc")]
use crate::alloc_util::with_capacity;
use crate::cursor::{ByteCursor, CodePointCursor, Cursor};
use crate::decode::Decoder;
use crate::encode::Encoder;
use crate::options::{DecodeOptions, EncodeOptions};
use crate::packing::symbols_for;
use crate::source::{SliceCursor, StrCursor};
use crate::{CodecError, ErrorCode};

/// Largest group size in bytes (Base32).
pub(crate) const MAX_GROUP_BYTES: usize = 5;
/// Largest group size in symbols (Base32).
pub(crate) const MAX_GROUP_SYMBOLS: usize = 8;

const HEX_LOWER: &[u8; 16] = b"0123456789abcdef";
const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// Group geometry and packing rules of one codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Layout {
    /// Bits carried per symbol.
    pub bits: u32,
    /// Bytes in a complete group.
    pub group_bytes: usize,
    /// Symbols in a complete group.
    pub group_symbols: usize,
    pub bit_order: BitOrder,
    /// Whether short final groups may carry `=` padding.
    pub padded: bool,
}

/// The transformation applied by a codec cursor.
///
/// The variant set is closed: Base16 uses fixed hexadecimal digits, Base32 and Base64 take an
/// alphabet that also selects the bit order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Codec {
    /// Hexadecimal, high nibble first; digit case is chosen by [`EncodeOptions::to_upper_case`].
    Base16,
    /// 5 bytes to 8 symbols.
    Base32(Base32Alphabet),
    /// 3 bytes to 4 symbols.
    Base64(Base64Alphabet),
}

impl Codec {
    /// Hexadecimal.
    pub const BASE16: Self = Self::Base16;
    /// RFC 4648 Base32.
    pub const BASE32: Self = Self::Base32(Base32Alphabet::STANDARD);
    /// RFC 4648 Base32 with the extended hex alphabet.
    pub const BASE32_HEX: Self = Self::Base32(Base32Alphabet::EXTENDED_HEX);
    /// RFC 4648 Base64.
    pub const BASE64: Self = Self::Base64(Base64Alphabet::STANDARD);
    /// RFC 4648 URL and filename safe Base64.
    pub const BASE64_URL_SAFE: Self = Self::Base64(Base64Alphabet::URL_SAFE);

    pub(crate) const fn layout(&self) -> Layout {
        match self {
            Self::Base16 => Layout {
                bits: 4,
                group_bytes: 1,
                group_symbols: 2,
                bit_order: BitOrder::BigEndian,
                padded: false,
            },
            Self::Base32(alphabet) => Layout {
                bits: 5,
                group_bytes: 5,
                group_symbols: 8,
                bit_order: alphabet.bit_order(),
                padded: true,
            },
            Self::Base64(alphabet) => Layout {
                bits: 6,
                group_bytes: 3,
                group_symbols: 4,
                bit_order: alphabet.bit_order(),
                padded: true,
            },
        }
    }

    /// The symbol for `value`.
    #[inline]
    pub(crate) fn symbol(&self, value: u8, upper_case: bool) -> char {
        match self {
            Self::Base16 => {
                let digits = if upper_case { HEX_UPPER } else { HEX_LOWER };
                char::from(digits[usize::from(value & 0x0f)])
            }
            Self::Base32(alphabet) => alphabet.encode(value),
            Self::Base64(alphabet) => alphabet.encode(value),
        }
    }

    /// The value of `symbol`, or `None` if the codec does not recognize it.
    #[inline]
    pub(crate) fn value(&self, symbol: char) -> Option<u8> {
        match self {
            Self::Base16 => symbol.to_digit(16).and_then(|d| u8::try_from(d).ok()),
            Self::Base32(alphabet) => alphabet.decode(symbol),
            Self::Base64(alphabet) => alphabet.decode(symbol),
        }
    }

    /// Bytes in a complete group.
    #[must_use]
    pub const fn group_bytes(&self) -> usize {
        self.layout().group_bytes
    }

    /// Symbols in a complete group.
    #[must_use]
    pub const fn group_symbols(&self) -> usize {
        self.layout().group_symbols
    }

    /// Exact number of symbols produced for `byte_len` input bytes.
    ///
    /// Returns `None` on arithmetic overflow.
    #[must_use]
    pub fn encoded_len(&self, byte_len: usize, add_padding: bool) -> Option<usize> {
        let layout = self.layout();
        let full = (byte_len / layout.group_bytes).checked_mul(layout.group_symbols)?;
        let rem = byte_len % layout.group_bytes;
        let tail = match rem {
            0 => 0,
            _ if add_padding && layout.padded => layout.group_symbols,
            _ => symbols_for(rem, layout.bits),
        };
        full.checked_add(tail)
    }

    /// Upper bound on the number of bytes decoded from `symbol_len` symbols.
    #[must_use]
    pub fn decoded_len_estimate(&self, symbol_len: usize) -> usize {
        let layout = self.layout();
        symbol_len
            .div_ceil(layout.group_symbols)
            .saturating_mul(layout.group_bytes)
    }

    /// Wraps a byte cursor in an encoding cursor.
    pub fn encoder<C: ByteCursor>(self, source: C, options: EncodeOptions) -> Encoder<C> {
        Encoder::new(source, self, options)
    }

    /// Wraps a code-point cursor in a decoding cursor.
    pub fn decoder<C: CodePointCursor>(self, source: C, options: DecodeOptions) -> Decoder<C> {
        Decoder::new(source, self, options)
    }

    /// Encodes `bytes` into `out` as ASCII symbols, returning the number written.
    ///
    /// # Errors
    ///
    /// Returns `BufferTooSmall` if `out` is shorter than [`Codec::encoded_len`].
    pub fn encode_into(
        self,
        bytes: &[u8],
        out: &mut [u8],
        options: EncodeOptions,
    ) -> Result<usize, CodecError> {
        let mut symbols = self.encoder(SliceCursor::new(bytes), options);
        let mut n = 0;
        while symbols.has_next()? {
            let slot = out
                .get_mut(n)
                .ok_or_else(|| CodecError::new(ErrorCode::BufferTooSmall, n))?;
            let symbol = symbols.next()?;
            *slot = u8::try_from(symbol)
                .map_err(|_| CodecError::new(ErrorCode::InvalidCharacter, n))?;
            n += 1;
        }
        Ok(n)
    }

    /// Decodes `text` into `out`, returning the number of bytes written.
    ///
    /// # Errors
    ///
    /// Returns the first malformed-input error, or `BufferTooSmall` if `out` is too short.
    pub fn decode_into(
        self,
        text: &str,
        out: &mut [u8],
        options: DecodeOptions,
    ) -> Result<usize, CodecError> {
        let mut bytes = self.decoder(StrCursor::new(text), options);
        let mut n = 0;
        while bytes.has_next()? {
            let slot = out
                .get_mut(n)
                .ok_or_else(|| CodecError::new(ErrorCode::BufferTooSmall, n))?;
            *slot = bytes.next()?;
            n += 1;
        }
        Ok(n)
    }

    /// Encodes `bytes` into a new string.
    ///
    /// # Errors
    ///
    /// Returns `LengthOverflow` or `AllocationFailed` if the output cannot be allocated.
    #[cfg(feature = "alloc")]
    pub fn encode_to_string(
        self,
        bytes: &[u8],
        options: EncodeOptions,
    ) -> Result<String, CodecError> {
        let len = self
            .encoded_len(bytes.len(), options.add_padding)
            .ok_or_else(|| CodecError::new(ErrorCode::LengthOverflow, 0))?;
        let mut out: String = with_capacity(len)?;
        let mut symbols = self.encoder(SliceCursor::new(bytes), options);
        while symbols.has_next()? {
            out.push(symbols.next()?);
        }
        Ok(out)
    }

    /// Decodes `text` into a new vector.
    ///
    /// # Errors
    ///
    /// Returns the first malformed-input error, or an allocation error.
    #[cfg(feature = "alloc")]
    pub fn decode_to_vec(self, text: &str, options: DecodeOptions) -> Result<Vec<u8>, CodecError> {
        let mut out: Vec<u8> = with_capacity(self.decoded_len_estimate(text.len()))?;
        let mut bytes = self.decoder(StrCursor::new(text), options);
        while bytes.has_next()? {
            out.push(bytes.next()?);
        }
        Ok(out)
    }
}
