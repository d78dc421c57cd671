//! Cursors backed by in-memory sequences.

use crate::cursor::Cursor;
use crate::utf8;
use crate::CodecError;

/// A cursor over a borrowed slice.
///
/// `SliceCursor<'_, u8>` is a byte cursor, `SliceCursor<'_, char>` a code-point cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliceCursor<'a, T> {
    data: &'a [T],
    pos: usize,
}

impl<'a, T: Copy> SliceCursor<'a, T> {
    /// A cursor positioned before the first element of `data`.
    #[must_use]
    pub const fn new(data: &'a [T]) -> Self {
        Self { data, pos: 0 }
    }

    /// The underlying slice.
    #[must_use]
    pub const fn data(&self) -> &'a [T] {
        self.data
    }

    /// The elements not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> &'a [T] {
        &self.data[self.pos..]
    }
}

impl<T: Copy + PartialEq + core::fmt::Debug> Cursor for SliceCursor<'_, T> {
    type Item = T;

    fn has_next(&mut self) -> Result<bool, CodecError> {
        Ok(self.pos < self.data.len())
    }

    fn has_previous(&mut self) -> Result<bool, CodecError> {
        Ok(self.pos > 0)
    }

    fn peek_next(&mut self) -> Result<T, CodecError> {
        self.data
            .get(self.pos)
            .copied()
            .ok_or_else(|| CodecError::exhausted(self.pos))
    }

    fn peek_previous(&mut self) -> Result<T, CodecError> {
        self.pos
            .checked_sub(1)
            .and_then(|i| self.data.get(i))
            .copied()
            .ok_or_else(|| CodecError::exhausted(self.pos))
    }

    fn next(&mut self) -> Result<T, CodecError> {
        let unit = self.peek_next()?;
        self.pos += 1;
        Ok(unit)
    }

    fn previous(&mut self) -> Result<T, CodecError> {
        let unit = self.peek_previous()?;
        self.pos -= 1;
        Ok(unit)
    }

    fn index(&self) -> usize {
        self.pos
    }
}

/// A cursor owning a fixed-size buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrayCursor<T, const N: usize> {
    data: [T; N],
    pos: usize,
}

impl<T: Copy, const N: usize> ArrayCursor<T, N> {
    /// A cursor positioned before the first element of `data`.
    #[must_use]
    pub const fn new(data: [T; N]) -> Self {
        Self { data, pos: 0 }
    }

    /// Releases the buffer.
    #[must_use]
    pub const fn into_inner(self) -> [T; N] {
        self.data
    }
}

impl<T: Copy + PartialEq + core::fmt::Debug, const N: usize> Cursor for ArrayCursor<T, N> {
    type Item = T;

    fn has_next(&mut self) -> Result<bool, CodecError> {
        Ok(self.pos < N)
    }

    fn has_previous(&mut self) -> Result<bool, CodecError> {
        Ok(self.pos > 0)
    }

    fn peek_next(&mut self) -> Result<T, CodecError> {
        self.data
            .get(self.pos)
            .copied()
            .ok_or_else(|| CodecError::exhausted(self.pos))
    }

    fn peek_previous(&mut self) -> Result<T, CodecError> {
        self.pos
            .checked_sub(1)
            .and_then(|i| self.data.get(i))
            .copied()
            .ok_or_else(|| CodecError::exhausted(self.pos))
    }

    fn next(&mut self) -> Result<T, CodecError> {
        let unit = self.peek_next()?;
        self.pos += 1;
        Ok(unit)
    }

    fn previous(&mut self) -> Result<T, CodecError> {
        let unit = self.peek_previous()?;
        self.pos -= 1;
        Ok(unit)
    }

    fn index(&self) -> usize {
        self.pos
    }
}

/// A code-point cursor over a string slice.
///
/// The index counts code points, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrCursor<'a> {
    text: &'a str,
    /// Byte offset into `text`, always on a char boundary.
    byte_pos: usize,
    index: usize,
}

impl<'a> StrCursor<'a> {
    /// A cursor positioned before the first code point of `text`.
    #[must_use]
    pub const fn new(text: &'a str) -> Self {
        Self {
            text,
            byte_pos: 0,
            index: 0,
        }
    }

    /// A cursor over UTF-8 `bytes`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidUtf8` at the first invalid byte.
    pub fn from_utf8(bytes: &'a [u8]) -> Result<Self, CodecError> {
        utf8::validate(bytes).map(Self::new)
    }

    /// The text not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> &'a str {
        &self.text[self.byte_pos..]
    }
}

impl Cursor for StrCursor<'_> {
    type Item = char;

    fn has_next(&mut self) -> Result<bool, CodecError> {
        Ok(self.byte_pos < self.text.len())
    }

    fn has_previous(&mut self) -> Result<bool, CodecError> {
        Ok(self.byte_pos > 0)
    }

    fn peek_next(&mut self) -> Result<char, CodecError> {
        self.text[self.byte_pos..]
            .chars()
            .next()
            .ok_or_else(|| CodecError::exhausted(self.index))
    }

    fn peek_previous(&mut self) -> Result<char, CodecError> {
        self.text[..self.byte_pos]
            .chars()
            .next_back()
            .ok_or_else(|| CodecError::exhausted(self.index))
    }

    fn next(&mut self) -> Result<char, CodecError> {
        let c = self.peek_next()?;
        self.byte_pos += c.len_utf8();
        self.index += 1;
        Ok(c)
    }

    fn previous(&mut self) -> Result<char, CodecError> {
        let c = self.peek_previous()?;
        self.byte_pos -= c.len_utf8();
        self.index -= 1;
        Ok(c)
    }

    fn index(&self) -> usize {
        self.index
    }
}
