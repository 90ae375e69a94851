/// Emits a `tracing` event at `TRACE` level when the `tracing` feature is
/// enabled, and nothing otherwise.
macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!($($arg)*);
    };
}

pub(crate) use trace;
