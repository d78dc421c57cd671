#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Encode-time policy.
///
/// With the `serde` feature the fields use their camelCase names (`addPadding`, `toUpperCase`),
/// and missing fields take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct EncodeOptions {
    /// Pad a short final Base32/Base64 group with `=` up to the full symbol count.
    pub add_padding: bool,
    /// Emit `A-F` instead of `a-f` for hexadecimal digits.
    pub to_upper_case: bool,
}

impl EncodeOptions {
    /// Padded output, lower-case hex digits.
    pub const DEFAULT: Self = Self {
        add_padding: true,
        to_upper_case: false,
    };

    /// Options that omit trailing padding.
    #[must_use]
    pub const fn unpadded() -> Self {
        Self {
            add_padding: false,
            ..Self::DEFAULT
        }
    }

    /// Options that emit upper-case hex digits.
    #[must_use]
    pub const fn upper_case() -> Self {
        Self {
            to_upper_case: true,
            ..Self::DEFAULT
        }
    }
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Decode-time policy.
///
/// With the `serde` feature the field is named `requirePadding` and defaults to `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct DecodeOptions {
    /// Reject a short final group that lacks its `=` run.
    ///
    /// When false, a bare short group is accepted if its symbol count maps to whole bytes.
    pub require_padding: bool,
}

impl DecodeOptions {
    /// Padding is required.
    pub const DEFAULT: Self = Self {
        require_padding: true,
    };

    /// Options that accept unpadded final groups.
    #[must_use]
    pub const fn lenient() -> Self {
        Self {
            require_padding: false,
        }
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}
