//! Bit packing between byte groups and symbol values.
//!
//! A group of `group_bytes` bytes is treated as one `8 * group_bytes`-bit integer, zero-extended
//! when the group is short. Big-endian packing reads symbols from the most significant end,
//! little-endian packing from the least significant end.

use crate::alphabet::BitOrder;

/// Number of symbols needed to carry `bytes` bytes at `bits` bits per symbol.
#[inline]
pub const fn symbols_for(bytes: usize, bits: u32) -> usize {
    let bits = bits as usize;
    (bytes * 8 + bits - 1) / bits
}

/// Number of whole bytes carried by `symbols` symbols.
#[inline]
pub const fn bytes_for(symbols: usize, bits: u32) -> usize {
    symbols * bits as usize / 8
}

/// Returns true iff a short trailing group of `symbols` symbols maps to whole bytes.
///
/// Base64 accepts 2 and 3, Base32 accepts 2, 4, 5 and 7, hex accepts none.
#[inline]
pub const fn is_complete_partial(symbols: usize, bits: u32) -> bool {
    let bytes = bytes_for(symbols, bits);
    bytes > 0 && symbols_for(bytes, bits) == symbols
}

impl BitOrder {
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    const fn byte_shift(self, i: usize, total: u32) -> u32 {
        let i = i as u32;
        match self {
            Self::BigEndian => total - 8 * (i + 1),
            Self::LittleEndian => 8 * i,
        }
    }

    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    const fn symbol_shift(self, i: usize, bits: u32, total: u32) -> u32 {
        let i = i as u32;
        match self {
            Self::BigEndian => total - bits * (i + 1),
            Self::LittleEndian => bits * i,
        }
    }

    /// Splits `bytes` (at most `group_bytes` long) into symbol values written to `out`.
    ///
    /// Returns the number of data symbols, `ceil(8 * bytes.len() / bits)`.
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn split(self, bytes: &[u8], group_bytes: usize, bits: u32, out: &mut [u8]) -> usize {
        debug_assert!(bytes.len() <= group_bytes && group_bytes <= 5);
        let total = group_bytes as u32 * 8;
        let mask = (1u64 << bits) - 1;

        let mut acc = 0u64;
        for (i, &b) in bytes.iter().enumerate() {
            acc |= u64::from(b) << self.byte_shift(i, total);
        }

        let count = symbols_for(bytes.len(), bits);
        for (i, slot) in out[..count].iter_mut().enumerate() {
            *slot = ((acc >> self.symbol_shift(i, bits, total)) & mask) as u8;
        }
        count
    }

    /// Joins symbol `values` back into bytes written to `out`.
    ///
    /// Returns the number of whole bytes, `floor(bits * values.len() / 8)`. Leftover low-order
    /// bits of a short group are discarded.
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn join(self, values: &[u8], group_bytes: usize, bits: u32, out: &mut [u8]) -> usize {
        let total = group_bytes as u32 * 8;
        debug_assert!(values.len() as u32 * bits <= total);

        let mut acc = 0u64;
        for (i, &v) in values.iter().enumerate() {
            acc |= u64::from(v) << self.symbol_shift(i, bits, total);
        }

        let count = bytes_for(values.len(), bits);
        for (i, slot) in out[..count].iter_mut().enumerate() {
            *slot = (acc >> self.byte_shift(i, total)) as u8;
        }
        count
    }
}
