use core::fmt;

/// The high-level class of an error.
///
/// The engine distinguishes:
/// - **Contract** errors: a cursor was moved or peeked past one of its ends.
/// - **Malformed** errors: the input does not follow the active encoding.
/// - **Config** errors: a caller-supplied alphabet was rejected.
/// - **Resource** errors: an output buffer, size computation or allocation fell short.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Movement requested past an end; preventable with `has_next`/`has_previous`.
    Contract,
    /// Input data violates the encoding.
    Malformed,
    /// Invalid configuration.
    Config,
    /// Output space, size arithmetic or allocation failure.
    Resource,
}

/// A structured error code identifying why a cursor operation failed.
///
/// This enum is intentionally stable and string-free to support `no_std`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorCode {
    /// No unit exists in the requested direction.
    Exhausted,

    /// A symbol does not belong to the active alphabet.
    InvalidCharacter,
    /// A padding symbol appeared before the minimum number of data symbols of its group.
    UnexpectedPadding,
    /// The padding run required to close the final group is missing or incomplete.
    ExpectedPadding,
    /// A trailing symbol count cannot represent a whole number of bytes.
    IncompleteGroup,
    /// Hexadecimal input has an odd number of digits.
    OddLength,
    /// Symbols follow a padded final group.
    TrailingSymbols,
    /// Bytes handed to a code-point source are not valid UTF-8.
    InvalidUtf8,

    /// A custom alphabet has the wrong size, a non-printable or padding symbol, or duplicates.
    InvalidAlphabet,

    /// The output buffer cannot hold the result.
    BufferTooSmall,
    /// Arithmetic overflow while computing a length.
    LengthOverflow,
    /// Memory allocation failed while collecting cursor output.
    AllocationFailed,
}

impl ErrorCode {
    /// The class this code belongs to.
    #[must_use]
    pub const fn kind(self) -> ErrorKind {
        match self {
            Self::Exhausted => ErrorKind::Contract,
            Self::InvalidCharacter
            | Self::UnexpectedPadding
            | Self::ExpectedPadding
            | Self::IncompleteGroup
            | Self::OddLength
            | Self::TrailingSymbols
            | Self::InvalidUtf8 => ErrorKind::Malformed,
            Self::InvalidAlphabet => ErrorKind::Config,
            Self::BufferTooSmall | Self::LengthOverflow | Self::AllocationFailed => {
                ErrorKind::Resource
            }
        }
    }

    const fn message(self) -> &'static str {
        match self {
            Self::Exhausted => "cursor exhausted",

            Self::InvalidCharacter => "symbol not in alphabet",
            Self::UnexpectedPadding => "padding before end of group data",
            Self::ExpectedPadding => "missing or incomplete padding",
            Self::IncompleteGroup => "trailing symbols do not form a whole byte",
            Self::OddLength => "odd number of hex digits",
            Self::TrailingSymbols => "symbols after final padded group",
            Self::InvalidUtf8 => "input must be valid UTF-8",

            Self::InvalidAlphabet => "invalid alphabet",

            Self::BufferTooSmall => "output buffer too small",
            Self::LengthOverflow => "length overflow",
            Self::AllocationFailed => "allocation failed",
        }
    }
}

/// A codec error with a stable code and the offset where it was detected.
///
/// For malformed input the offset is the index of the offending symbol in the source cursor. For
/// [`ErrorCode::Exhausted`] it is the index of the exhausted cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CodecError {
    /// The error code.
    pub code: ErrorCode,
    /// Offset at which the error was detected.
    pub offset: usize,
}

impl CodecError {
    /// Construct an error with `code` at `offset`.
    #[inline]
    #[must_use]
    pub const fn new(code: ErrorCode, offset: usize) -> Self {
        Self { code, offset }
    }

    /// Construct an [`ErrorCode::Exhausted`] error at `offset`.
    #[inline]
    #[must_use]
    pub const fn exhausted(offset: usize) -> Self {
        Self::new(ErrorCode::Exhausted, offset)
    }

    /// The class of this error.
    #[inline]
    #[must_use]
    pub const fn kind(self) -> ErrorKind {
        self.code.kind()
    }

    /// Returns true iff the input data was rejected.
    #[inline]
    #[must_use]
    pub const fn is_malformed(self) -> bool {
        matches!(self.code.kind(), ErrorKind::Malformed)
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = self.code.message();
        match self.kind() {
            ErrorKind::Contract => write!(f, "cursor exhausted at {}", self.offset),
            ErrorKind::Malformed => write!(f, "decode failed at {}: {msg}", self.offset),
            ErrorKind::Config => write!(f, "{msg} (symbol {})", self.offset),
            ErrorKind::Resource => write!(f, "codec failed at {}: {msg}", self.offset),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CodecError {}
