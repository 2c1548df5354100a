//! Logging macros that compile away unless the `tracing` feature is enabled.

#[cfg(feature = "tracing")]
pub use tracing::{debug, trace, warn};

#[doc(hidden)]
#[macro_export]
macro_rules! __tj_noop_log {
    ($($_:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::__tj_noop_log as debug;
#[cfg(not(feature = "tracing"))]
pub use crate::__tj_noop_log as trace;
#[cfg(not(feature = "tracing"))]
pub use crate::__tj_noop_log as warn;
