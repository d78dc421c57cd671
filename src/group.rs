//! Shared plumbing for the group-at-a-time codec cursors.
//!
//! A codec cursor sees its source as a sequence of groups aligned to the point where the codec
//! was created. Only the final group may be short, so the group before any cached group is always
//! complete and starts exactly one full group earlier. Moving backward across a boundary therefore
//! seeks the source to that start and re-reads the whole group.

use crate::cursor::Cursor;
use crate::CodecError;

/// Which end of a freshly materialized group emission resumes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Start at the first unit of the group.
    Forward,
    /// Start after the last unit of the group.
    Backward,
}

/// A source cursor plus its offset relative to the codec's creation point.
///
/// The offset counts successful moves only, so it stays exact even when a read fails half-way
/// through a group.
#[derive(Debug, Clone)]
pub struct Tracked<C> {
    inner: C,
    pos: usize,
}

impl<C: Cursor> Tracked<C> {
    pub const fn new(inner: C) -> Self {
        Self { inner, pos: 0 }
    }

    pub const fn inner(&self) -> &C {
        &self.inner
    }

    pub fn into_inner(self) -> C {
        self.inner
    }

    /// The source cursor's own index, used as the error offset for symbols it yields.
    pub fn source_index(&self) -> usize {
        self.inner.index()
    }

    /// Moves the source until it sits `target` units past the creation point.
    pub fn seek(&mut self, target: usize) -> Result<(), CodecError> {
        while self.pos > target {
            self.inner.previous()?;
            self.pos -= 1;
        }
        while self.pos < target {
            self.inner.next()?;
            self.pos += 1;
        }
        Ok(())
    }

    /// Reads the next unit, or `None` at the end of the source.
    pub fn pull(&mut self) -> Result<Option<C::Item>, CodecError> {
        if !self.inner.has_next()? {
            return Ok(None);
        }
        let unit = self.inner.next()?;
        self.pos += 1;
        Ok(Some(unit))
    }

    pub fn has_more(&mut self) -> Result<bool, CodecError> {
        self.inner.has_next()
    }
}
