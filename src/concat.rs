use alloc::vec;
use alloc::vec::Vec;

use crate::cursor::Cursor;
use crate::CodecError;

/// An ordered list of cursors presented as one continuous cursor.
///
/// Exhausted members are skipped in both directions. Each member keeps its own position, so
/// moving back into an earlier member resumes at that member's end. Backward movement stops at
/// the position each member had when the chain was built. Use
/// `Box<dyn Cursor<Item = u8>>` members to chain cursors of different types.
#[derive(Debug, Clone)]
pub struct Concat<C> {
    members: Vec<C>,
    /// Units each member has moved forward since the chain was built.
    taken: Vec<usize>,
    current: usize,
    offset: usize,
}

impl<C: Cursor> Concat<C> {
    /// Chains `members` in order.
    pub fn new(members: Vec<C>) -> Self {
        Self {
            taken: vec![0; members.len()],
            members,
            current: 0,
            offset: 0,
        }
    }

    /// The member the cursor currently reads from.
    pub const fn current(&self) -> usize {
        self.current
    }

    /// Unwraps the member cursors.
    pub fn into_inner(self) -> Vec<C> {
        self.members
    }

    /// Moves `current` forward to the first member with a unit ahead.
    fn settle_forward(&mut self) -> Result<bool, CodecError> {
        loop {
            let Some(member) = self.members.get_mut(self.current) else {
                return Ok(false);
            };
            if member.has_next()? {
                return Ok(true);
            }
            if self.current + 1 >= self.members.len() {
                return Ok(false);
            }
            self.current += 1;
        }
    }

    /// Moves `current` backward to the last member with a unit taken through the chain.
    fn settle_backward(&mut self) -> bool {
        loop {
            match self.taken.get(self.current) {
                None => return false,
                Some(&n) if n > 0 => return true,
                Some(_) if self.current == 0 => return false,
                Some(_) => self.current -= 1,
            }
        }
    }

    fn exhausted(&self) -> CodecError {
        CodecError::exhausted(self.offset)
    }
}

impl<C: Cursor> Cursor for Concat<C> {
    type Item = C::Item;

    fn has_next(&mut self) -> Result<bool, CodecError> {
        self.settle_forward()
    }

    fn has_previous(&mut self) -> Result<bool, CodecError> {
        Ok(self.settle_backward())
    }

    fn peek_next(&mut self) -> Result<C::Item, CodecError> {
        if !self.settle_forward()? {
            return Err(self.exhausted());
        }
        self.members[self.current].peek_next()
    }

    fn peek_previous(&mut self) -> Result<C::Item, CodecError> {
        if !self.settle_backward() {
            return Err(self.exhausted());
        }
        self.members[self.current].peek_previous()
    }

    fn next(&mut self) -> Result<C::Item, CodecError> {
        if !self.settle_forward()? {
            return Err(self.exhausted());
        }
        let unit = self.members[self.current].next()?;
        self.taken[self.current] += 1;
        self.offset += 1;
        Ok(unit)
    }

    fn previous(&mut self) -> Result<C::Item, CodecError> {
        if !self.settle_backward() {
            return Err(self.exhausted());
        }
        let unit = self.members[self.current].previous()?;
        self.taken[self.current] -= 1;
        self.offset -= 1;
        Ok(unit)
    }

    fn index(&self) -> usize {
        self.offset
    }
}
