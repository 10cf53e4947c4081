//! # Tokenmint Core
//!
//! Core types shared by every tokenmint crate.
//!
//! - [`errors`]: The [`TokenError`] taxonomy returned by every fallible operation
//! - [`format`]: [`TokenFormat`], the legacy and current claim-shape rulesets
//! - [`values`]: [`OptionValue`], the dynamically-typed value accepted by
//!   name-based option setters
//!
//! # Example
//!
//! ```
//! use tokenmint_core::{OptionValue, TokenError};
//!
//! let value = OptionValue::from(true);
//! assert_eq!(value.type_name(), "bool");
//!
//! let err = TokenError::MissingSubject;
//! assert_eq!(err.to_string(), "No uid provided in data and admin option not set");
//! ```

pub mod errors;
pub mod format;
pub mod values;

// Re-export commonly used types at crate root
pub use errors::{Result, TokenError};
pub use format::TokenFormat;
pub use values::{OptionValue, json_type_name};
