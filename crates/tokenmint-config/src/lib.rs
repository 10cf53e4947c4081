//! # Tokenmint Config
//!
//! Configuration types for tokenmint, loaded from environment variables:
//!
//! - [`issuer`]: Secret, token format and default options for an issuer
//!
//! # Example
//!
//! ```ignore
//! use tokenmint_config::IssuerConfig;
//!
//! let config = IssuerConfig::from_env()?;
//! println!("issuing {} tokens", config.format);
//! ```

pub mod issuer;

// Re-export commonly used types at crate root
pub use issuer::IssuerConfig;
