use crate::cursor::Cursor;
use crate::CodecError;

/// A cursor truncated to at most `limit` forward units past its creation point.
///
/// Backward movement stops at the creation point.
#[derive(Debug, Clone)]
pub struct Limit<C> {
    inner: C,
    limit: usize,
    offset: usize,
}

impl<C: Cursor> Limit<C> {
    /// Wraps `inner`, allowing at most `limit` forward units.
    pub const fn new(inner: C, limit: usize) -> Self {
        Self {
            inner,
            limit,
            offset: 0,
        }
    }

    /// Forward units still allowed.
    pub const fn remaining(&self) -> usize {
        self.limit - self.offset
    }

    /// Unwraps the inner cursor.
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: Cursor> Cursor for Limit<C> {
    type Item = C::Item;

    fn has_next(&mut self) -> Result<bool, CodecError> {
        Ok(self.offset < self.limit && self.inner.has_next()?)
    }

    fn has_previous(&mut self) -> Result<bool, CodecError> {
        Ok(self.offset > 0 && self.inner.has_previous()?)
    }

    fn peek_next(&mut self) -> Result<C::Item, CodecError> {
        if self.offset >= self.limit {
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
        if self.offset >= self.limit {
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
