//! # Tokenmint Auth
//!
//! Claim assembly, validation and signing for tokenmint identity tokens.
//!
//! This crate provides:
//!
//! - [`claims`]: The canonical claim set handed to the signer
//! - [`options`]: The fixed option registry (`admin`, `debug`, `expires`, `notBefore`)
//! - [`signer`]: The signing primitive and its HMAC implementation
//! - [`issuer`]: [`TokenIssuer`], the builder that ties them together
//!
//! # Token Formats
//!
//! - **Legacy** (`v=0`): the whole payload under `d`, uid up to 256 bytes
//! - **Current** (`v=1`): `uid` at the top level, the rest under `claims`,
//!   uid up to 64 bytes of `[A-Za-z0-9:-]`
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use tokenmint_auth::TokenIssuer;
//!
//! let data = json!({"uid": "alice-1"});
//! let token = TokenIssuer::current("s3cr3t")
//!     .set_data(data.as_object().unwrap().clone())
//!     .create()?;
//! assert!(token.len() <= 1024);
//! # Ok::<(), tokenmint_auth::TokenError>(())
//! ```

pub mod claims;
pub mod issuer;
pub mod options;
pub mod signer;

// Re-export commonly used types at crate root
pub use claims::{Payload, TokenClaims, UID_KEY};
pub use issuer::{ALGORITHM, TokenIssuer};
pub use options::{IssuerOption, IssuerOptions};
pub use signer::{ClaimsSigner, HmacSigner, SignerError};
pub use tokenmint_core::{OptionValue, TokenError, TokenFormat};
