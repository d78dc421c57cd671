#[cfg(feature = "simdutf8")]
use simdutf8::basic as simd_utf8;

use crate::{CodecError, ErrorCode};

/// Validates UTF-8 bytes and returns a borrowed `&str` on success.
///
/// The error offset is the length of the longest valid prefix.
#[inline]
pub fn validate(bytes: &[u8]) -> Result<&str, CodecError> {
    #[cfg(feature = "simdutf8")]
    {
        if let Ok(s) = simd_utf8::from_utf8(bytes) {
            return Ok(s);
        }
    }

    // The SIMD path does not report a position, so failures are re-checked here.
    core::str::from_utf8(bytes)
        .map_err(|e| CodecError::new(ErrorCode::InvalidUtf8, e.valid_up_to()))
}
