#[cfg(feature = "alloc")]
use alloc::boxed::Box;
#[cfg(feature = "alloc")]
use alloc::string::String;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;
use core::fmt;

#[cfg(feature = "alloc")]
use crate::alloc_util::reserve;
use crate::codec::Codec;
use crate::decode::Decoder;
use crate::delimit::Delimit;
use crate::encode::Encoder;
use crate::limit::Limit;
use crate::options::{DecodeOptions, EncodeOptions};
use crate::skip::SkipIf;
use crate::translate::Translate;
use crate::CodecError;

/// A bidirectional, position-tracking view over a sequence of units.
///
/// Every operation is fallible: cursors that transform another cursor validate their input
/// lazily, so even `has_next` may report malformed data. Moving past an end fails with
/// [`ErrorCode::Exhausted`](crate::ErrorCode::Exhausted), which callers avoid by asking
/// `has_next`/`has_previous` first.
///
/// Implementations uphold two invariants:
/// - `peek_next()` followed by `next()` yield the same value, and likewise for the backward pair;
/// - `next()` followed by `previous()` returns the same value and restores the observable state
///   (subsequent peeks and [`index`](Cursor::index)).
pub trait Cursor {
    /// The unit type: `u8` for byte cursors, `char` for code-point cursors.
    type Item: Copy + PartialEq + fmt::Debug;

    /// Returns true iff a unit exists in the forward direction.
    ///
    /// # Errors
    ///
    /// Returns an error if answering requires reading malformed input.
    fn has_next(&mut self) -> Result<bool, CodecError>;

    /// Returns true iff a unit exists in the backward direction.
    ///
    /// # Errors
    ///
    /// Returns an error if answering requires reading malformed input.
    fn has_previous(&mut self) -> Result<bool, CodecError>;

    /// Returns the next unit without moving.
    ///
    /// # Errors
    ///
    /// Returns `Exhausted` at the end, or an input error from a transforming cursor.
    fn peek_next(&mut self) -> Result<Self::Item, CodecError>;

    /// Returns the previous unit without moving.
    ///
    /// # Errors
    ///
    /// Returns `Exhausted` at the start, or an input error from a transforming cursor.
    fn peek_previous(&mut self) -> Result<Self::Item, CodecError>;

    /// Returns the next unit and moves forward by one.
    ///
    /// # Errors
    ///
    /// Returns `Exhausted` at the end, or an input error from a transforming cursor.
    fn next(&mut self) -> Result<Self::Item, CodecError>;

    /// Returns the previous unit and moves backward by one.
    ///
    /// # Errors
    ///
    /// Returns `Exhausted` at the start, or an input error from a transforming cursor.
    fn previous(&mut self) -> Result<Self::Item, CodecError>;

    /// The current logical offset in units, starting at zero.
    fn index(&self) -> usize;

    /// Moves forward into `buf` until it is full or the cursor is exhausted.
    ///
    /// Returns the number of units written. This is the bounded-memory way to drain a cursor.
    ///
    /// # Errors
    ///
    /// Propagates the first error; units written before it stay in `buf`.
    fn fill(&mut self, buf: &mut [Self::Item]) -> Result<usize, CodecError> {
        let mut n = 0;
        for slot in buf.iter_mut() {
            if !self.has_next()? {
                break;
            }
            *slot = self.next()?;
            n += 1;
        }
        Ok(n)
    }

    /// Moves backward to the start, returning how many units were stepped over.
    ///
    /// # Errors
    ///
    /// Propagates the first error.
    fn rewind(&mut self) -> Result<usize, CodecError> {
        let mut n = 0;
        while self.has_previous()? {
            self.previous()?;
            n += 1;
        }
        Ok(n)
    }

    /// Borrows the cursor as a forward iterator of results.
    fn iter(&mut self) -> Iter<'_, Self>
    where
        Self: Sized,
    {
        Iter {
            cursor: self,
            failed: false,
        }
    }

    /// Drains the cursor forward into a vector.
    ///
    /// # Errors
    ///
    /// Propagates cursor errors; returns `AllocationFailed` if the vector cannot grow.
    #[cfg(feature = "alloc")]
    fn collect_vec(&mut self) -> Result<Vec<Self::Item>, CodecError> {
        let mut out = Vec::new();
        while self.has_next()? {
            let unit = self.next()?;
            reserve(&mut out, 1, self.index())?;
            out.push(unit);
        }
        Ok(out)
    }

    /// Borrows the cursor so an adapter can wrap it without taking ownership.
    fn by_ref(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self
    }

    /// Truncates the cursor to at most `limit` further forward units.
    fn limit(self, limit: usize) -> Limit<Self>
    where
        Self: Sized,
    {
        Limit::new(self, limit)
    }

    /// Ends the cursor before the first unit contained in `sentinels`.
    fn delimit(self, sentinels: &[Self::Item]) -> Delimit<'_, Self>
    where
        Self: Sized,
    {
        Delimit::new(self, sentinels)
    }

    /// Hides every unit for which `predicate` returns true.
    fn skip_if<P>(self, predicate: P) -> SkipIf<Self, P>
    where
        Self: Sized,
        P: Fn(Self::Item) -> bool,
    {
        SkipIf::new(self, predicate)
    }
}

/// A cursor over bytes.
pub trait ByteCursor: Cursor<Item = u8> {
    /// Maps every byte through `table`.
    fn translate(self, table: &[u8; 256]) -> Translate<'_, Self>
    where
        Self: Sized,
    {
        Translate::new(self, table)
    }

    /// Encodes the bytes as symbols of `codec`.
    fn encode(self, codec: Codec, options: EncodeOptions) -> Encoder<Self>
    where
        Self: Sized,
    {
        Encoder::new(self, codec, options)
    }
}

impl<C: Cursor<Item = u8> + ?Sized> ByteCursor for C {}

/// A cursor over Unicode scalar values.
pub trait CodePointCursor: Cursor<Item = char> {
    /// Decodes the symbols as `codec` text.
    fn decode(self, codec: Codec, options: DecodeOptions) -> Decoder<Self>
    where
        Self: Sized,
    {
        Decoder::new(self, codec, options)
    }

    /// Drains the cursor forward into a string.
    ///
    /// # Errors
    ///
    /// Propagates cursor errors; returns `AllocationFailed` if the string cannot grow.
    #[cfg(feature = "alloc")]
    fn collect_string(&mut self) -> Result<String, CodecError> {
        let mut out = String::new();
        while self.has_next()? {
            let c = self.next()?;
            reserve(&mut out, c.len_utf8(), self.index())?;
            out.push(c);
        }
        Ok(out)
    }
}

impl<C: Cursor<Item = char> + ?Sized> CodePointCursor for C {}

/// Forward iterator over a borrowed cursor, created by [`Cursor::iter`].
///
/// Yields `Err` once and then stops.
#[derive(Debug)]
pub struct Iter<'a, C> {
    cursor: &'a mut C,
    failed: bool,
}

impl<C: Cursor> Iterator for Iter<'_, C> {
    type Item = Result<C::Item, CodecError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let step = match self.cursor.has_next() {
            Ok(true) => self.cursor.next(),
            Ok(false) => return None,
            Err(err) => Err(err),
        };
        self.failed = step.is_err();
        Some(step)
    }
}

impl<C: Cursor + ?Sized> Cursor for &mut C {
    type Item = C::Item;

    #[inline]
    fn has_next(&mut self) -> Result<bool, CodecError> {
        (**self).has_next()
    }

    #[inline]
    fn has_previous(&mut self) -> Result<bool, CodecError> {
        (**self).has_previous()
    }

    #[inline]
    fn peek_next(&mut self) -> Result<Self::Item, CodecError> {
        (**self).peek_next()
    }

    #[inline]
    fn peek_previous(&mut self) -> Result<Self::Item, CodecError> {
        (**self).peek_previous()
    }

    #[inline]
    fn next(&mut self) -> Result<Self::Item, CodecError> {
        (**self).next()
    }

    #[inline]
    fn previous(&mut self) -> Result<Self::Item, CodecError> {
        (**self).previous()
    }

    #[inline]
    fn index(&self) -> usize {
        (**self).index()
    }
}

#[cfg(feature = "alloc")]
impl<C: Cursor + ?Sized> Cursor for Box<C> {
    type Item = C::Item;

    #[inline]
    fn has_next(&mut self) -> Result<bool, CodecError> {
        (**self).has_next()
    }

    #[inline]
    fn has_previous(&mut self) -> Result<bool, CodecError> {
        (**self).has_previous()
    }

    #[inline]
    fn peek_next(&mut self) -> Result<Self::Item, CodecError> {
        (**self).peek_next()
    }

    #[inline]
    fn peek_previous(&mut self) -> Result<Self::Item, CodecError> {
        (**self).peek_previous()
    }

    #[inline]
    fn next(&mut self) -> Result<Self::Item, CodecError> {
        (**self).next()
    }

    #[inline]
    fn previous(&mut self) -> Result<Self::Item, CodecError> {
        (**self).previous()
    }

    #[inline]
    fn index(&self) -> usize {
        (**self).index()
    }
}
