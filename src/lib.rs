//! # Tokenmint
//!
//! Issues signed identity tokens that a backend-as-a-service client SDK
//! presents to the platform. Server-side code holding the shared secret mints
//! short-lived HS256 tokens; this crate never verifies or stores them.
//!
//! ## Overview
//!
//! ```text
//! crates/
//! ├── tokenmint-core/          # TokenError, TokenFormat, OptionValue
//! ├── tokenmint-config/        # IssuerConfig loaded from the environment
//! ├── tokenmint-auth/          # claims, options, signer, TokenIssuer
//! └── tokenmint-observability/ # console logging setup
//! ```
//!
//! ## Token Formats
//!
//! | Format  | `v` | Identity claims                              | uid limit |
//! |---------|-----|----------------------------------------------|-----------|
//! | Legacy  | 0   | whole payload under `d`                      | 256 bytes |
//! | Current | 1   | `uid` top-level, remaining data under `claims` | 64 bytes  |
//!
//! Every token also carries `admin`, `debug`, `v` and `iat`, plus `exp` and
//! `nbf` when the `expires`/`notBefore` options are set. Tokens larger than
//! 1024 bytes are rejected.
//!
//! ## Example
//!
//! ```
//! use serde_json::json;
//! use tokenmint::{TokenFormat, TokenIssuer};
//!
//! let mut issuer = TokenIssuer::new("s3cr3t", TokenFormat::Current);
//! let data = json!({"uid": "alice-1", "plan": "pro"});
//! let token = issuer
//!     .set_data(data.as_object().unwrap().clone())
//!     .set_option("expires", 4_102_444_800i64)?
//!     .create()?;
//! # let _ = token;
//! # Ok::<(), tokenmint::TokenError>(())
//! ```
//!
//! ## Environment Variables
//!
//! See [`IssuerConfig`] for the variables read by [`issuer_from_env`].

pub mod bootstrap;

// Re-export commonly used types at crate root
pub use bootstrap::{issuer_from_env, mint};
pub use tokenmint_auth::{
    ALGORITHM, ClaimsSigner, HmacSigner, IssuerOption, IssuerOptions, Payload, SignerError,
    TokenClaims, TokenIssuer, UID_KEY,
};
pub use tokenmint_config::IssuerConfig;
pub use tokenmint_core::{OptionValue, Result, TokenError, TokenFormat};
pub use tokenmint_observability::init_basic_console_logging;
