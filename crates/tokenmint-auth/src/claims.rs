//! Canonical claim set handed to the signer.
//!
//! Claims are built fresh on every issuance from the issuer options and the
//! identity payload:
//!
//! - `admin`, `debug`: copied from the options
//! - `exp`, `nbf`: epoch seconds, only when the option is set; `exp` falls
//!   back to `iat` plus the configured lifetime
//! - `d` (legacy): the whole payload, unmodified
//! - `uid`, `claims` (current): the uid promoted to the top level, remaining
//!   entries nested under `claims` when there are any
//! - `v`: format version
//! - `iat`: issuance time in epoch seconds

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tokenmint_core::TokenFormat;

use crate::options::IssuerOptions;

/// Identity payload supplied by the caller.
pub type Payload = Map<String, Value>;

/// Reserved payload key identifying the subject.
pub const UID_KEY: &str = "uid";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub admin: bool,
    pub debug: bool,
    /// Expiration time (as UTC timestamp). Optional.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
    /// Not before (as UTC timestamp). Optional.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nbf: Option<i64>,
    /// Legacy payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub d: Option<Payload>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    /// Current-format payload without the uid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claims: Option<Payload>,
    pub v: u8,
    /// Issued at (as UTC timestamp).
    pub iat: i64,
}

impl TokenClaims {
    /// Assembles the claim set for `format`.
    ///
    /// The payload's uid must already have been validated; a non-string uid is
    /// not promoted.
    pub fn assemble(format: TokenFormat, options: &IssuerOptions, payload: &Payload, iat: i64) -> Self {
        let mut claims = Self {
            admin: options.admin,
            debug: options.debug,
            exp: options.exp_at(iat),
            nbf: options.nbf(),
            d: None,
            uid: None,
            claims: None,
            v: format.version(),
            iat,
        };

        match format {
            TokenFormat::Legacy => {
                claims.d = Some(payload.clone());
            }
            TokenFormat::Current => {
                let mut rest = payload.clone();
                claims.uid = match rest.remove(UID_KEY) {
                    Some(Value::String(uid)) => Some(uid),
                    _ => None,
                };
                if !rest.is_empty() {
                    claims.claims = Some(rest);
                }
            }
        }

        claims
    }
}
