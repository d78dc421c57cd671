use crate::cursor::Cursor;
use crate::CodecError;

/// A cursor that hides every unit matching a predicate, in both directions.
///
/// Typical use is dropping line breaks from wrapped Base64 text before decoding. Hidden units do
/// not count toward [`index`](Cursor::index). Backward movement stops at the creation point.
#[derive(Debug, Clone)]
pub struct SkipIf<C, P> {
    inner: C,
    predicate: P,
    offset: usize,
}

impl<C, P> SkipIf<C, P>
where
    C: Cursor,
    P: Fn(C::Item) -> bool,
{
    /// Wraps `inner`, hiding units for which `predicate` returns true.
    pub const fn new(inner: C, predicate: P) -> Self {
        Self {
            inner,
            predicate,
            offset: 0,
        }
    }

    /// Unwraps the inner cursor.
    pub fn into_inner(self) -> C {
        self.inner
    }

    /// Steps the inner cursor forward over hidden units.
    fn settle_forward(&mut self) -> Result<bool, CodecError> {
        while self.inner.has_next()? {
            if !(self.predicate)(self.inner.peek_next()?) {
                return Ok(true);
            }
            self.inner.next()?;
        }
        Ok(false)
    }

    /// Steps the inner cursor backward over hidden units.
    fn settle_backward(&mut self) -> Result<bool, CodecError> {
        if self.offset == 0 {
            return Ok(false);
        }
        while self.inner.has_previous()? {
            if !(self.predicate)(self.inner.peek_previous()?) {
                return Ok(true);
            }
            self.inner.previous()?;
        }
        Ok(false)
    }
}

impl<C, P> Cursor for SkipIf<C, P>
where
    C: Cursor,
    P: Fn(C::Item) -> bool,
{
    type Item = C::Item;

    fn has_next(&mut self) -> Result<bool, CodecError> {
        self.settle_forward()
    }

    fn has_previous(&mut self) -> Result<bool, CodecError> {
        self.settle_backward()
    }

    fn peek_next(&mut self) -> Result<C::Item, CodecError> {
        if !self.settle_forward()? {
            return Err(CodecError::exhausted(self.offset));
        }
        self.inner.peek_next()
    }

    fn peek_previous(&mut self) -> Result<C::Item, CodecError> {
        if !self.settle_backward()? {
            return Err(CodecError::exhausted(self.offset));
        }
        self.inner.peek_previous()
    }

    fn next(&mut self) -> Result<C::Item, CodecError> {
        if !self.settle_forward()? {
            return Err(CodecError::exhausted(self.offset));
        }
        let unit = self.inner.next()?;
        self.offset += 1;
        Ok(unit)
    }

    fn previous(&mut self) -> Result<C::Item, CodecError> {
        if !self.settle_backward()? {
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
