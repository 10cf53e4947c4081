//! Helpers for building issuers from configuration.
//!
//! # Example
//!
//! ```ignore
//! use tokenmint::issuer_from_env;
//!
//! // TOKEN_SECRET (and optionally TOKEN_FORMAT, ...) set in the environment or .env
//! let mut issuer = issuer_from_env()?;
//! let token = issuer.set_data(data).create()?;
//! ```

use dotenvy::dotenv;
use tokenmint_auth::{Payload, TokenIssuer};
use tokenmint_config::IssuerConfig;
use tokenmint_core::Result;
use tracing::info;

/// Builds an issuer from the process environment, loading `.env` first when
/// one exists.
pub fn issuer_from_env() -> Result<TokenIssuer> {
    dotenv().ok();

    let config = IssuerConfig::from_env()?;
    info!(
        format = %config.format,
        admin = config.admin,
        lifetime = ?config.token_lifetime,
        "Loaded issuer configuration"
    );

    Ok(TokenIssuer::from_config(&config))
}

/// Issues a single token for `data` with a fresh issuer built from `config`.
pub fn mint(config: &IssuerConfig, data: Payload) -> Result<String> {
    TokenIssuer::from_config(config).set_data(data).create()
}
