use crate::alphabet::PAD;
use crate::codec::{Codec, Layout, MAX_GROUP_BYTES, MAX_GROUP_SYMBOLS};
use crate::cursor::{CodePointCursor, Cursor};
use crate::group::{Direction, Tracked};
use crate::macros::{codec_debug, codec_trace};
use crate::options::DecodeOptions;
use crate::packing::is_complete_partial;
use crate::{CodecError, ErrorCode};

/// The cached group of a [`Decoder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Group {
    /// Nothing read yet.
    Empty,
    /// A complete group of symbols.
    Full,
    /// The short final group; `padded` records whether it closed with `=` symbols.
    Partial { padded: bool },
}

/// A byte cursor producing the decoding of a code-point cursor.
///
/// Each group of symbols is validated as a whole before any of its bytes is emitted. Malformed
/// input fails at the offending symbol; bytes of earlier groups remain available, and retrying
/// reproduces the same error.
#[derive(Debug, Clone)]
pub struct Decoder<C> {
    source: Tracked<C>,
    codec: Codec,
    layout: Layout,
    options: DecodeOptions,
    group: Group,
    /// Source offset of the cached group's first symbol.
    group_start: usize,
    /// Symbols covered by the cached group, padding included.
    group_span: usize,
    bytes: [u8; MAX_GROUP_BYTES],
    /// Bytes held by the cached group.
    len: usize,
    /// Bytes of the cached group already emitted.
    at: usize,
    index: usize,
}

impl<C: CodePointCursor> Decoder<C> {
    /// Decodes `source` with `codec`.
    pub fn new(source: C, codec: Codec, options: DecodeOptions) -> Self {
        Self {
            source: Tracked::new(source),
            codec,
            layout: codec.layout(),
            options,
            group: Group::Empty,
            group_start: 0,
            group_span: 0,
            bytes: [0; MAX_GROUP_BYTES],
            len: 0,
            at: 0,
            index: 0,
        }
    }

    /// The codec in use.
    pub const fn codec(&self) -> Codec {
        self.codec
    }

    /// The options in use.
    pub const fn options(&self) -> DecodeOptions {
        self.options
    }

    /// The wrapped code-point cursor.
    pub const fn source(&self) -> &C {
        self.source.inner()
    }

    /// Unwraps the code-point cursor, leaving it wherever the last group read left it.
    pub fn into_inner(self) -> C {
        self.source.into_inner()
    }

    fn reject(&self, code: ErrorCode, offset: usize) -> CodecError {
        codec_debug!("{:?} rejected at symbol {offset}: {code:?}", self.codec);
        CodecError::new(code, offset)
    }

    /// Reads and validates the group starting `start` symbols past the creation point.
    ///
    /// Returns false, leaving the cache untouched, if no symbol is available there.
    fn materialize(&mut self, start: usize, direction: Direction) -> Result<bool, CodecError> {
        self.source.seek(start)?;

        let layout = self.layout;
        let mut values = [0u8; MAX_GROUP_SYMBOLS];
        let mut data = 0;
        let mut padding = 0;
        while data + padding < layout.group_symbols {
            let offset = self.source.source_index();
            let Some(symbol) = self.source.pull()? else {
                break;
            };
            if layout.padded && symbol == PAD {
                if padding == 0 && !is_complete_partial(data, layout.bits) {
                    return Err(self.reject(ErrorCode::UnexpectedPadding, offset));
                }
                padding += 1;
                continue;
            }
            if padding > 0 {
                return Err(self.reject(ErrorCode::ExpectedPadding, offset));
            }
            let Some(value) = self.codec.value(symbol) else {
                return Err(self.reject(ErrorCode::InvalidCharacter, offset));
            };
            values[data] = value;
            data += 1;
        }

        let span = data + padding;
        if span == 0 {
            return Ok(false);
        }
        if span < layout.group_symbols {
            let code = if padding > 0 {
                Some(ErrorCode::ExpectedPadding)
            } else if matches!(self.codec, Codec::Base16) {
                Some(ErrorCode::OddLength)
            } else if !is_complete_partial(data, layout.bits) {
                Some(ErrorCode::IncompleteGroup)
            } else if self.options.require_padding {
                Some(ErrorCode::ExpectedPadding)
            } else {
                None
            };
            if let Some(code) = code {
                return Err(self.reject(code, self.source.source_index()));
            }
        }

        self.len = layout.bit_order.join(
            &values[..data],
            layout.group_bytes,
            layout.bits,
            &mut self.bytes,
        );
        self.group = if data == layout.group_symbols {
            Group::Full
        } else {
            Group::Partial {
                padded: padding > 0,
            }
        };
        self.group_start = start;
        self.group_span = span;
        self.at = match direction {
            Direction::Forward => 0,
            Direction::Backward => self.len,
        };
        Ok(true)
    }

    fn ready_forward(&mut self) -> Result<bool, CodecError> {
        if self.at < self.len {
            return Ok(true);
        }
        let end = self.group_start + self.group_span;
        match self.group {
            Group::Partial { padded: true } => {
                self.source.seek(end)?;
                if self.source.has_more()? {
                    return Err(
                        self.reject(ErrorCode::TrailingSymbols, self.source.source_index())
                    );
                }
                Ok(false)
            }
            Group::Partial { padded: false } => Ok(false),
            Group::Empty | Group::Full => self.materialize(end, Direction::Forward),
        }
    }

    fn ready_backward(&mut self) -> Result<bool, CodecError> {
        if self.at > 0 {
            return Ok(true);
        }
        if self.group_start == 0 {
            return Ok(false);
        }
        let start = self.group_start - self.layout.group_symbols;
        codec_trace!("decoder re-reading group at symbol {start}");
        self.materialize(start, Direction::Backward)
    }
}

impl<C: CodePointCursor> Cursor for Decoder<C> {
    type Item = u8;

    fn has_next(&mut self) -> Result<bool, CodecError> {
        self.ready_forward()
    }

    fn has_previous(&mut self) -> Result<bool, CodecError> {
        self.ready_backward()
    }

    fn peek_next(&mut self) -> Result<u8, CodecError> {
        if !self.ready_forward()? {
            return Err(CodecError::exhausted(self.index));
        }
        Ok(self.bytes[self.at])
    }

    fn peek_previous(&mut self) -> Result<u8, CodecError> {
        if !self.ready_backward()? {
            return Err(CodecError::exhausted(self.index));
        }
        Ok(self.bytes[self.at - 1])
    }

    fn next(&mut self) -> Result<u8, CodecError> {
        let byte = self.peek_next()?;
        self.at += 1;
        self.index += 1;
        Ok(byte)
    }

    fn previous(&mut self) -> Result<u8, CodecError> {
        let byte = self.peek_previous()?;
        self.at -= 1;
        self.index -= 1;
        Ok(byte)
    }

    fn index(&self) -> usize {
        self.index
    }
}
