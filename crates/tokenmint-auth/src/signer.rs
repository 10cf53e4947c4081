//! Signing primitive.
//!
//! The issuer hands the assembled claims, its secret and an algorithm to a
//! [`ClaimsSigner`] and receives a compact `header.payload.signature` token.

use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use thiserror::Error;

use crate::claims::TokenClaims;

#[derive(Error, Debug)]
pub enum SignerError {
    #[error(transparent)]
    Encoding(#[from] jsonwebtoken::errors::Error),
    #[error("unsupported algorithm for a shared secret: {0:?}")]
    UnsupportedAlgorithm(Algorithm),
    #[error("{0}")]
    Other(String),
}

pub trait ClaimsSigner {
    fn sign(&self, claims: &TokenClaims, secret: &str, algorithm: Algorithm) -> Result<String, SignerError>;
}

/// Signs claims with an HMAC algorithm keyed by the shared secret.
///
/// Output is deterministic for a given claim set, secret and algorithm.
#[derive(Debug, Clone, Copy, Default)]
pub struct HmacSigner;

impl ClaimsSigner for HmacSigner {
    fn sign(&self, claims: &TokenClaims, secret: &str, algorithm: Algorithm) -> Result<String, SignerError> {
        use Algorithm::*;
        match algorithm {
            HS256 | HS384 | HS512 => Ok(encode(
                &Header::new(algorithm),
                claims,
                &EncodingKey::from_secret(secret.as_bytes()),
            )?),
            other => Err(SignerError::UnsupportedAlgorithm(other)),
        }
    }
}
