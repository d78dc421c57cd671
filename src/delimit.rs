use crate::cursor::Cursor;
use crate::CodecError;

/// A cursor that ends before the first sentinel unit.
///
/// The sentinel is never consumed, so the inner cursor can be recovered positioned on it.
/// Backward movement stops at the creation point.
#[derive(Debug, Clone)]
pub struct Delimit<'s, C: Cursor> {
    inner: C,
    sentinels: &'s [C::Item],
    offset: usize,
}

impl<'s, C: Cursor> Delimit<'s, C> {
    /// Wraps `inner`, ending before any unit contained in `sentinels`.
    pub const fn new(inner: C, sentinels: &'s [C::Item]) -> Self {
        Self {
            inner,
            sentinels,
            offset: 0,
        }
    }

    /// Unwraps the inner cursor.
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: Cursor> Cursor for Delimit<'_, C> {
    type Item = C::Item;

    fn has_next(&mut self) -> Result<bool, CodecError> {
        if !self.inner.has_next()? {
            return Ok(false);
        }
        let unit = self.inner.peek_next()?;
        Ok(!self.sentinels.contains(&unit))
    }

    fn has_previous(&mut self) -> Result<bool, CodecError> {
        Ok(self.offset > 0 && self.inner.has_previous()?)
    }

    fn peek_next(&mut self) -> Result<C::Item, CodecError> {
        if !self.has_next()? {
            return Err(CodecError::exhausted(self.offset));
        }
        self.inner.peek_next()
    }

    fn peek_previous(&mut self) -> Result<C::Item, CodecError> {
        if self.offset == 0 {
            return Err(CodecError::exhausted(self.offset));
        }
        self.inner.peek_previous()
    }

    fn next(&mut self) -> Result<C::Item, CodecError> {
        if !self.has_next()? {
            return Err(CodecError::exhausted(self.offset));
        }
        let unit = self.inner.next()?;
        self.offset += 1;
        Ok(unit)
    }

    fn previous(&mut self) -> Result<C::Item, CodecError> {
        if self.offset == 0 {
            return Err(CodecError::exhausted(self.offset));
        }
        let unit = self.inner.previous()?;
        self.offset -= 1;
        Ok(unit)
    }

    fn index(&self) -> usize {
        self.offset
    }
}
