//! Crate-internal logging macros.
//!
//! With the `log` feature these forward to the `log` facade under the `cursor_codec` target.
//! Without it they expand to nothing, so arguments are never evaluated.

macro_rules! codec_debug {
    ($($arg:tt)+) => {
        #[cfg(feature = "log")]
        ::log::debug!(target: "cursor_codec", $($arg)+);
    };
}

macro_rules! codec_trace {
    ($($arg:tt)+) => {
        #[cfg(feature = "log")]
        ::log::trace!(target: "cursor_codec", $($arg)+);
    };
}

pub(crate) use codec_debug;
pub(crate) use codec_trace;
