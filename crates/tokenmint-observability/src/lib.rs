//! Tokenmint Observability
//!
//! Console logging for binaries and services that embed tokenmint. The issuer
//! itself only emits `tracing` events; installing a subscriber is left to the
//! host application, which can use [`init_basic_console_logging`].
//!
//! # Features
//!
//! - `observability` (default): Enables the `tracing-subscriber` console layer
//!
//! # Examples
//!
//! ```no_run
//! use tokenmint_observability::init_basic_console_logging;
//!
//! init_basic_console_logging();
//! ```

#[cfg(feature = "observability")]
pub mod basic_logging;

#[cfg(feature = "observability")]
pub use basic_logging::{build_env_filter, init_basic_console_logging, try_init_basic_console_logging};

// No-op stubs when observability is disabled
#[cfg(not(feature = "observability"))]
pub mod stubs {
    /// No-op logging initialization when feature disabled
    pub fn init_basic_console_logging() {}

    /// No-op logging initialization when feature disabled
    pub fn try_init_basic_console_logging() -> Result<(), std::convert::Infallible> {
        Ok(())
    }
}

#[cfg(not(feature = "observability"))]
pub use stubs::*;
