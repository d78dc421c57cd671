use crate::cursor::{ByteCursor, Cursor};
use crate::CodecError;

/// A byte cursor that maps every byte through a 256-entry table.
#[derive(Debug, Clone)]
pub struct Translate<'t, C> {
    inner: C,
    table: &'t [u8; 256],
    offset: usize,
}

impl<'t, C: ByteCursor> Translate<'t, C> {
    /// Wraps `inner`, yielding `table[b]` for each byte `b`.
    pub const fn new(inner: C, table: &'t [u8; 256]) -> Self {
        Self {
            inner,
            table,
            offset: 0,
        }
    }

    /// Unwraps the inner cursor.
    pub fn into_inner(self) -> C {
        self.inner
    }

    #[inline]
    fn map(&self, b: u8) -> u8 {
        self.table[usize::from(b)]
    }
}

/// The table mapping every byte to itself, a starting point for custom tables.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn identity_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = i as u8;
        i += 1;
    }
    table
}

impl<C: ByteCursor> Cursor for Translate<'_, C> {
    type Item = u8;

    fn has_next(&mut self) -> Result<bool, CodecError> {
        self.inner.has_next()
    }

    fn has_previous(&mut self) -> Result<bool, CodecError> {
        Ok(self.offset > 0 && self.inner.has_previous()?)
    }

    fn peek_next(&mut self) -> Result<u8, CodecError> {
        self.inner.peek_next().map(|b| self.map(b))
    }

    fn peek_previous(&mut self) -> Result<u8, CodecError> {
        if self.offset == 0 {
            return Err(CodecError::exhausted(self.offset));
        }
        self.inner.peek_previous().map(|b| self.map(b))
    }

    fn next(&mut self) -> Result<u8, CodecError> {
        let b = self.inner.next()?;
        self.offset += 1;
        Ok(self.map(b))
    }

    fn previous(&mut self) -> Result<u8, CodecError> {
        if self.offset == 0 {
            return Err(CodecError::exhausted(self.offset));
        }
        let b = self.inner.previous()?;
        self.offset -= 1;
        Ok(self.map(b))
    }

    fn index(&self) -> usize {
        self.offset
    }
}
