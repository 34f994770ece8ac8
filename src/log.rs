//! Logging macros gated on the `tracing` feature.
//!
//! With the feature on these are the `tracing` macros themselves, so fields
//! and `?value` captures work as usual. With it off every call compiles away.

#[cfg(feature = "tracing")]
pub use tracing::{debug, warn};

#[cfg(not(feature = "tracing"))]
#[macro_export]
#[doc(hidden)]
macro_rules! __linal_debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
#[doc(hidden)]
macro_rules! __linal_warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{__linal_debug as debug, __linal_warn as warn};
