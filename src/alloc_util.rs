//! Fallible growth for the collect helpers.

use alloc::collections::TryReserveError;
use alloc::string::String;
use alloc::vec::Vec;
use core::alloc::Layout;

use crate::{CodecError, ErrorCode};

/// A growable output buffer.
pub trait Buffer: Default {
    /// Element type used for the size check.
    type Unit;

    fn filled(&self) -> usize;
    fn room(&self) -> usize;
    fn try_grow(&mut self, additional: usize) -> Result<(), TryReserveError>;
}

impl<T> Buffer for Vec<T> {
    type Unit = T;

    fn filled(&self) -> usize {
        self.len()
    }

    fn room(&self) -> usize {
        self.capacity()
    }

    fn try_grow(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.try_reserve(additional)
    }
}

impl Buffer for String {
    type Unit = u8;

    fn filled(&self) -> usize {
        self.len()
    }

    fn room(&self) -> usize {
        self.capacity()
    }

    fn try_grow(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.try_reserve(additional)
    }
}

/// Makes room for `additional` more units, reporting failures at `offset`.
///
/// Size overflow is `LengthOverflow`; a refused allocation is `AllocationFailed`.
#[inline]
pub fn reserve<B: Buffer>(buf: &mut B, additional: usize, offset: usize) -> Result<(), CodecError> {
    let overflow = || CodecError::new(ErrorCode::LengthOverflow, offset);
    let needed = buf.filled().checked_add(additional).ok_or_else(overflow)?;
    if needed <= buf.room() {
        return Ok(());
    }
    Layout::array::<B::Unit>(needed).map_err(|_| overflow())?;
    buf.try_grow(additional)
        .map_err(|_| CodecError::new(ErrorCode::AllocationFailed, offset))
}

/// An empty buffer with room for `cap` units.
#[inline]
pub fn with_capacity<B: Buffer>(cap: usize) -> Result<B, CodecError> {
    let mut buf = B::default();
    reserve(&mut buf, cap, 0)?;
    Ok(buf)
}
