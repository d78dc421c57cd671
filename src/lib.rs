//! # cursor-codec
//!
//! Bidirectional streaming Base16, Base32 and Base64 codecs built on cursors over bytes and
//! Unicode code points.
//!
//! ## Design principles
//!
//! - **Cursors, not buffers.**
//!   A [`Cursor`] moves forward and backward one unit at a time, peeks in both directions without
//!   moving, and reports its [`index`](Cursor::index). [`ByteCursor`] and [`CodePointCursor`]
//!   name the two unit kinds.
//! - **Codecs are cursors too.**
//!   [`Encoder`] turns a byte cursor into a code-point cursor, [`Decoder`] does the reverse.
//!   Both work a group at a time and rebuild the previous group exactly when moving backward, so
//!   `next` and `previous` are inverses at every position.
//! - **Errors are eager and precise.**
//!   Malformed input fails with a stable [`ErrorCode`] at the offset of the offending symbol.
//!   Nothing is skipped or repaired internally.
//! - **Allocation is optional.**
//!   Drain any cursor into a fixed buffer with [`Cursor::fill`]; wrappers such as [`Limit`] and
//!   [`SkipIf`] keep memory bounded on large inputs.
//!
//! ## Formats
//!
//! - Base64: RFC 4648 standard and URL-safe alphabets, 3 bytes to 4 symbols, `=` padding.
//! - Base32: RFC 4648 standard and extended-hex alphabets, 5 bytes to 8 symbols, `=` padding.
//! - Base16: lower/upper-case hexadecimal, 1 byte to 2 symbols.
//!
//! Alphabets carry a [`BitOrder`]; little-endian packing fills symbols from the low bits of each
//! byte instead of the high bits. Group sizes and padding rules do not change.
//!
//! ## Example
//!
//! ```
//! use cursor_codec::{ByteCursor, Codec, CodePointCursor, Cursor, DecodeOptions, EncodeOptions, SliceCursor};
//!
//! let mut text = SliceCursor::new(b"foo").encode(Codec::BASE64, EncodeOptions::default());
//! assert_eq!(text.collect_string().unwrap(), "Zm9v");
//!
//! // Walk back over the last symbol; the group is rebuilt from the source.
//! assert_eq!(text.previous().unwrap(), 'v');
//! assert_eq!(text.index(), 3);
//!
//! let bytes = Codec::BASE64.decode_to_vec("Zm8", DecodeOptions::lenient()).unwrap();
//! assert_eq!(bytes, b"fo");
//! ```
//!
//! ## Feature flags
//!
//! - `std` *(default)*: implements `std::error::Error` for [`CodecError`].
//! - `alloc` *(default)*: enables [`Concat`], boxed cursors, collect helpers and one-shot
//!   `encode_to_string`/`decode_to_vec`.
//! - `serde`: enables the [`with`] modules and serde support for [`EncodeOptions`]/[`DecodeOptions`].
//! - `simdutf8`: enables SIMD-accelerated UTF-8 validation in [`StrCursor::from_utf8`].
//! - `log`: emits `debug` records for rejected input and `trace` records for backward group
//!   rebuilds through the `log` facade.
//!
//! ## `no_std`
//!
//! The crate is `no_std` compatible. Without `alloc`, every cursor and codec works over borrowed
//! or fixed-size storage.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "alloc")]
mod alloc_util;
mod alphabet;
mod codec;
mod cursor;
mod decode;
mod delimit;
mod encode;
mod error;
mod group;
mod limit;
mod macros;
mod options;
mod packing;
mod skip;
mod source;
mod translate;
mod utf8;

#[cfg(feature = "alloc")]
mod concat;
#[cfg(feature = "serde")]
mod serde_impl;

pub use crate::alphabet::{Alphabet, Base32Alphabet, Base64Alphabet, BitOrder, PAD};
pub use crate::codec::Codec;
pub use crate::cursor::{ByteCursor, CodePointCursor, Cursor, Iter};
pub use crate::decode::Decoder;
pub use crate::delimit::Delimit;
pub use crate::encode::Encoder;
pub use crate::error::{CodecError, ErrorCode, ErrorKind};
pub use crate::limit::Limit;
pub use crate::options::{DecodeOptions, EncodeOptions};
pub use crate::skip::SkipIf;
pub use crate::source::{ArrayCursor, SliceCursor, StrCursor};
pub use crate::translate::{identity_table, Translate};

#[cfg(feature = "alloc")]
pub use crate::concat::Concat;

/// `#[serde(with = "...")]` modules storing byte fields as encoded strings.
///
/// ```
/// # #[cfg(feature = "serde")] {
/// #[derive(serde::Serialize, serde::Deserialize)]
/// struct Blob {
///     #[serde(with = "cursor_codec::with::base64")]
///     payload: Vec<u8>,
/// }
/// # }
/// ```
#[cfg(feature = "serde")]
pub mod with {
    pub use crate::serde_impl::{base16, base32, base64, base64_url};
}
