//! Optional logging macros
//!
//! Expand to the `log` facade when the `log` feature is enabled and to a
//! no-op that still type-checks the arguments otherwise. Exported so the
//! mapper and predictor crates log through the same switch.

#[cfg(feature = "log")]
#[macro_export]
#[doc(hidden)]
macro_rules! log_trace {
    ($($arg:tt)*) => { $crate::__log::trace!($($arg)*) };
}

#[cfg(not(feature = "log"))]
#[macro_export]
#[doc(hidden)]
macro_rules! log_trace {
    ($($arg:tt)*) => {{ let _ = format_args!($($arg)*); }};
}

#[cfg(feature = "log")]
#[macro_export]
#[doc(hidden)]
macro_rules! log_debug {
    ($($arg:tt)*) => { $crate::__log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
#[macro_export]
#[doc(hidden)]
macro_rules! log_debug {
    ($($arg:tt)*) => {{ let _ = format_args!($($arg)*); }};
}

#[cfg(feature = "log")]
#[macro_export]
#[doc(hidden)]
macro_rules! log_warn {
    ($($arg:tt)*) => { $crate::__log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
#[macro_export]
#[doc(hidden)]
macro_rules! log_warn {
    ($($arg:tt)*) => {{ let _ = format_args!($($arg)*); }};
}
