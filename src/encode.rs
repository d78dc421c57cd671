use crate::alphabet::PAD;
use crate::codec::{Codec, Layout, MAX_GROUP_BYTES, MAX_GROUP_SYMBOLS};
use crate::cursor::{ByteCursor, Cursor};
use crate::group::{Direction, Tracked};
use crate::macros::codec_trace;
use crate::options::EncodeOptions;
use crate::CodecError;

/// The cached group of an [`Encoder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Group {
    /// Nothing read yet.
    Empty,
    /// Every symbol carries data.
    Full,
    /// The short final group: `data` symbols, then `padding` pad symbols.
    Partial { data: usize, padding: usize },
}

/// A code-point cursor producing the encoding of a byte cursor.
///
/// Symbols are computed a whole group at a time and emitted one per call. Moving backward past
/// the start of the cached group re-reads the previous group from the source.
#[derive(Debug, Clone)]
pub struct Encoder<C> {
    source: Tracked<C>,
    codec: Codec,
    layout: Layout,
    options: EncodeOptions,
    group: Group,
    /// Source offset of the cached group's first byte.
    group_start: usize,
    /// Bytes covered by the cached group.
    group_span: usize,
    symbols: [char; MAX_GROUP_SYMBOLS],
    /// Symbols of the cached group already emitted.
    at: usize,
    index: usize,
}

impl<C: ByteCursor> Encoder<C> {
    /// Encodes `source` with `codec`.
    pub fn new(source: C, codec: Codec, options: EncodeOptions) -> Self {
        Self {
            source: Tracked::new(source),
            codec,
            layout: codec.layout(),
            options,
            group: Group::Empty,
            group_start: 0,
            group_span: 0,
            symbols: [PAD; MAX_GROUP_SYMBOLS],
            at: 0,
            index: 0,
        }
    }

    /// The codec in use.
    pub const fn codec(&self) -> Codec {
        self.codec
    }

    /// The options in use.
    pub const fn options(&self) -> EncodeOptions {
        self.options
    }

    /// The wrapped byte cursor.
    pub const fn source(&self) -> &C {
        self.source.inner()
    }

    /// Unwraps the byte cursor, leaving it wherever the last group read left it.
    pub fn into_inner(self) -> C {
        self.source.into_inner()
    }

    const fn group_len(&self) -> usize {
        match self.group {
            Group::Empty => 0,
            Group::Full => self.layout.group_symbols,
            Group::Partial { data, padding } => data + padding,
        }
    }

    /// Reads the group starting `start` bytes past the creation point and computes its symbols.
    ///
    /// Returns false, leaving the cache untouched, if no byte is available there.
    fn materialize(&mut self, start: usize, direction: Direction) -> Result<bool, CodecError> {
        self.source.seek(start)?;

        let layout = self.layout;
        let mut bytes = [0u8; MAX_GROUP_BYTES];
        let mut n = 0;
        while n < layout.group_bytes {
            let Some(b) = self.source.pull()? else {
                break;
            };
            bytes[n] = b;
            n += 1;
        }
        if n == 0 {
            return Ok(false);
        }

        let mut values = [0u8; MAX_GROUP_SYMBOLS];
        let data = layout
            .bit_order
            .split(&bytes[..n], layout.group_bytes, layout.bits, &mut values);
        for (slot, &v) in self.symbols.iter_mut().zip(&values[..data]) {
            *slot = self.codec.symbol(v, self.options.to_upper_case);
        }

        self.group = if n == layout.group_bytes {
            Group::Full
        } else {
            let padding = if self.options.add_padding && layout.padded {
                layout.group_symbols - data
            } else {
                0
            };
            self.symbols[data..data + padding].fill(PAD);
            Group::Partial { data, padding }
        };
        self.group_start = start;
        self.group_span = n;
        self.at = match direction {
            Direction::Forward => 0,
            Direction::Backward => self.group_len(),
        };
        Ok(true)
    }

    fn ready_forward(&mut self) -> Result<bool, CodecError> {
        if self.at < self.group_len() {
            return Ok(true);
        }
        if matches!(self.group, Group::Partial { .. }) {
            return Ok(false);
        }
        self.materialize(self.group_start + self.group_span, Direction::Forward)
    }

    fn ready_backward(&mut self) -> Result<bool, CodecError> {
        if self.at > 0 {
            return Ok(true);
        }
        if self.group_start == 0 {
            return Ok(false);
        }
        let start = self.group_start - self.layout.group_bytes;
        codec_trace!("encoder re-reading group at byte {start}");
        self.materialize(start, Direction::Backward)
    }
}

impl<C: ByteCursor> Cursor for Encoder<C> {
    type Item = char;

    fn has_next(&mut self) -> Result<bool, CodecError> {
        self.ready_forward()
    }

    fn has_previous(&mut self) -> Result<bool, CodecError> {
        self.ready_backward()
    }

    fn peek_next(&mut self) -> Result<char, CodecError> {
        if !self.ready_forward()? {
            return Err(CodecError::exhausted(self.index));
        }
        Ok(self.symbols[self.at])
    }

    fn peek_previous(&mut self) -> Result<char, CodecError> {
        if !self.ready_backward()? {
            return Err(CodecError::exhausted(self.index));
        }
        Ok(self.symbols[self.at - 1])
    }

    fn next(&mut self) -> Result<char, CodecError> {
        let symbol = self.peek_next()?;
        self.at += 1;
        self.index += 1;
        Ok(symbol)
    }

    fn previous(&mut self) -> Result<char, CodecError> {
        let symbol = self.peek_previous()?;
        self.at -= 1;
        self.index -= 1;
        Ok(symbol)
    }

    fn index(&self) -> usize {
        self.index
    }
}
