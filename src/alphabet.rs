use core::fmt;

use crate::{CodecError, ErrorCode};

/// The padding symbol shared by Base32 and Base64.
pub const PAD: char = '=';

const INVALID: u8 = 0xff;

/// Which end of each byte feeds the high-order bits of each symbol.
///
/// Bit order only changes packing arithmetic. Group sizes and padding rules are identical for
/// both variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BitOrder {
    /// RFC 4648 order: the first byte's most significant bit starts the first symbol.
    #[default]
    BigEndian,
    /// The first byte's least significant bit starts the first symbol.
    LittleEndian,
}

/// A mapping between `BITS`-bit values and printable ASCII symbols.
///
/// Use [`Base32Alphabet`] or [`Base64Alphabet`]; other widths are rejected by [`Alphabet::new`].
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Alphabet<const BITS: u32> {
    symbols: [u8; 64],
    values: [u8; 128],
    bit_order: BitOrder,
}

/// A 32-symbol alphabet.
pub type Base32Alphabet = Alphabet<5>;

/// A 64-symbol alphabet.
pub type Base64Alphabet = Alphabet<6>;

impl Alphabet<6> {
    /// RFC 4648 Base64: `A-Z a-z 0-9 + /`.
    pub const STANDARD: Self =
        Self::from_table(b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/");

    /// RFC 4648 URL and filename safe Base64: `A-Z a-z 0-9 - _`.
    pub const URL_SAFE: Self =
        Self::from_table(b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_");
}

impl Alphabet<5> {
    /// RFC 4648 Base32: `A-Z 2-7`.
    pub const STANDARD: Self = Self::from_table(b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567");

    /// RFC 4648 Base32 with extended hex alphabet: `0-9 A-V`.
    pub const EXTENDED_HEX: Self = Self::from_table(b"0123456789ABCDEFGHIJKLMNOPQRSTUV");
}

impl<const BITS: u32> Alphabet<BITS> {
    /// Number of symbols.
    pub const SIZE: usize = 1 << BITS;

    #[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
    const fn from_table(table: &[u8]) -> Self {
        assert!(table.len() == Self::SIZE, "alphabet table has the wrong size");
        let mut symbols = [0u8; 64];
        let mut values = [INVALID; 128];
        let mut i = 0;
        while i < table.len() {
            symbols[i] = table[i];
            values[table[i] as usize] = i as u8;
            i += 1;
        }
        Self {
            symbols,
            values,
            bit_order: BitOrder::BigEndian,
        }
    }

    /// Build a custom alphabet from `symbols`, where `symbols[v]` encodes value `v`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAlphabet` if `BITS` is not 5 or 6, if `symbols` does not hold exactly
    /// `2^BITS` entries, or if an entry is not printable ASCII, is the padding symbol, or repeats
    /// an earlier entry. The offset names the offending entry.
    pub fn new(symbols: &[u8], bit_order: BitOrder) -> Result<Self, CodecError> {
        if BITS != 5 && BITS != 6 {
            return Err(CodecError::new(ErrorCode::InvalidAlphabet, 0));
        }
        if symbols.len() != Self::SIZE {
            return Err(CodecError::new(
                ErrorCode::InvalidAlphabet,
                symbols.len().min(Self::SIZE),
            ));
        }

        let mut out = Self {
            symbols: [0; 64],
            values: [INVALID; 128],
            bit_order,
        };
        for (i, &s) in symbols.iter().enumerate() {
            let taken = out.values.get(usize::from(s)).is_some_and(|&v| v != INVALID);
            if !s.is_ascii_graphic() || char::from(s) == PAD || taken {
                return Err(CodecError::new(ErrorCode::InvalidAlphabet, i));
            }
            out.symbols[i] = s;
            out.values[usize::from(s)] =
                u8::try_from(i).map_err(|_| CodecError::new(ErrorCode::InvalidAlphabet, i))?;
        }
        Ok(out)
    }

    /// The same mapping with a different bit order.
    #[must_use]
    pub const fn with_bit_order(mut self, bit_order: BitOrder) -> Self {
        self.bit_order = bit_order;
        self
    }

    /// The bit order used when packing bytes into symbols.
    #[must_use]
    pub const fn bit_order(&self) -> BitOrder {
        self.bit_order
    }

    /// The symbols in value order.
    #[must_use]
    pub fn symbols(&self) -> &[u8] {
        &self.symbols[..Self::SIZE]
    }

    /// The symbol for `value`. Bits above `BITS` are ignored.
    #[inline]
    #[must_use]
    pub fn encode(&self, value: u8) -> char {
        char::from(self.symbols[usize::from(value) & (Self::SIZE - 1)])
    }

    /// The value of `symbol`, or `None` if it is not part of this alphabet.
    #[inline]
    #[must_use]
    pub fn decode(&self, symbol: char) -> Option<u8> {
        let i = usize::try_from(u32::from(symbol)).ok()?;
        self.values.get(i).copied().filter(|&v| v != INVALID)
    }
}

impl<const BITS: u32> fmt::Debug for Alphabet<BITS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Alphabet")
            .field("bits", &BITS)
            .field(
                "symbols",
                &core::str::from_utf8(self.symbols()).unwrap_or("<non-ascii>"),
            )
            .field("bit_order", &self.bit_order)
            .finish()
    }
}

