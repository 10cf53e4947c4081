//! Token issuer.
//!
//! A [`TokenIssuer`] holds a shared secret, a [`TokenFormat`], the identity
//! payload and the issuer options. Mutators return the issuer for chaining;
//! validation of the payload is deferred until [`TokenIssuer::claims`] or
//! [`TokenIssuer::create`].
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use tokenmint_auth::{TokenFormat, TokenIssuer};
//!
//! let mut issuer = TokenIssuer::new("s3cr3t", TokenFormat::Current);
//! let data = json!({"uid": "alice-1", "role": "editor"});
//! let token = issuer
//!     .set_data(data.as_object().unwrap().clone())
//!     .set_option("debug", true)?
//!     .create()?;
//! assert_eq!(token.split('.').count(), 3);
//! # Ok::<(), tokenmint_auth::TokenError>(())
//! ```

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::Algorithm;
use serde_json::Value;
use tokenmint_config::IssuerConfig;
use tokenmint_core::{OptionValue, Result, TokenError, TokenFormat, json_type_name};
use tracing::{debug, error, warn};

use crate::claims::{Payload, TokenClaims, UID_KEY};
use crate::options::IssuerOptions;
use crate::signer::{ClaimsSigner, HmacSigner};

/// Algorithm used for every issued token.
pub const ALGORITHM: Algorithm = Algorithm::HS256;

#[derive(Clone)]
pub struct TokenIssuer {
    secret: String,
    format: TokenFormat,
    data: Payload,
    options: IssuerOptions,
    signer: Arc<dyn ClaimsSigner + Send + Sync>,
}

impl TokenIssuer {
    pub fn new(secret: impl Into<String>, format: TokenFormat) -> Self {
        Self {
            secret: secret.into(),
            format,
            data: Payload::new(),
            options: IssuerOptions::default(),
            signer: Arc::new(HmacSigner),
        }
    }

    /// Issuer for `v=0` tokens.
    pub fn legacy(secret: impl Into<String>) -> Self {
        Self::new(secret, TokenFormat::Legacy)
    }

    /// Issuer for `v=1` tokens.
    pub fn current(secret: impl Into<String>) -> Self {
        Self::new(secret, TokenFormat::Current)
    }

    /// Builds an issuer from a dynamically-typed secret.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::InvalidSecretType`] unless `secret` is text.
    pub fn from_secret_value(secret: impl Into<OptionValue>, format: TokenFormat) -> Result<Self> {
        match secret.into() {
            OptionValue::Text(secret) => Ok(Self::new(secret, format)),
            other => Err(TokenError::InvalidSecretType {
                given: other.type_name(),
            }),
        }
    }

    /// Builds an issuer from loaded configuration.
    ///
    /// A configured token lifetime is applied relative to each issuance, so
    /// every token expires `lifetime` after its own `iat`.
    pub fn from_config(config: &IssuerConfig) -> Self {
        let mut issuer = Self::new(config.secret.clone(), config.format);
        issuer.admin(config.admin).debug(config.debug);
        if let Some(lifetime) = config.token_lifetime {
            issuer.token_lifetime(lifetime);
        }
        issuer
    }

    /// Replaces the signing primitive.
    pub fn with_signer<S>(mut self, signer: S) -> Self
    where
        S: ClaimsSigner + Send + Sync + 'static,
    {
        self.signer = Arc::new(signer);
        self
    }

    /// Replaces the whole payload. Nothing is validated until issuance.
    pub fn set_data(&mut self, data: Payload) -> &mut Self {
        self.data = data;
        self
    }

    /// Sets one option by name.
    ///
    /// # Errors
    ///
    /// - [`TokenError::UnsupportedOption`] for an unknown name
    /// - [`TokenError::InvalidOptionType`] for a value of the wrong type
    /// - [`TokenError::InvalidTimestamp`] for an unrepresentable integer timestamp
    pub fn set_option(&mut self, name: &str, value: impl Into<OptionValue>) -> Result<&mut Self> {
        self.options.set(name, value.into())?;
        Ok(self)
    }

    /// Sets options in iteration order, stopping at the first failure.
    ///
    /// Options applied before the failing one stay applied.
    pub fn set_options<I, K, V>(&mut self, options: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<OptionValue>,
    {
        for (name, value) in options {
            self.options.set(name.as_ref(), value.into())?;
        }
        Ok(self)
    }

    pub fn admin(&mut self, admin: bool) -> &mut Self {
        self.options.admin = admin;
        self
    }

    pub fn debug(&mut self, debug: bool) -> &mut Self {
        self.options.debug = debug;
        self
    }

    pub fn expires(&mut self, expires: DateTime<Utc>) -> &mut Self {
        self.options.expires = Some(expires);
        self
    }

    pub fn not_before(&mut self, not_before: DateTime<Utc>) -> &mut Self {
        self.options.not_before = Some(not_before);
        self
    }

    /// Expires each token `lifetime` after it is issued, unless `expires` is set.
    pub fn token_lifetime(&mut self, lifetime: Duration) -> &mut Self {
        self.options.lifetime = Some(lifetime);
        self
    }

    pub fn format(&self) -> TokenFormat {
        self.format
    }

    pub fn data(&self) -> &Payload {
        &self.data
    }

    pub fn options(&self) -> &IssuerOptions {
        &self.options
    }

    /// Checks the payload against the options and the format's uid rules.
    pub fn validate(&self) -> Result<()> {
        match self.data.get(UID_KEY) {
            None if self.options.admin => Ok(()),
            None => Err(TokenError::MissingSubject),
            Some(Value::String(uid)) => self.format.validate_uid(uid),
            Some(other) => Err(TokenError::InvalidSubjectType {
                given: json_type_name(other),
            }),
        }
    }

    /// Validates and assembles the claim set, stamped with the current time.
    pub fn claims(&self) -> Result<TokenClaims> {
        self.validate()?;
        Ok(TokenClaims::assemble(
            self.format,
            &self.options,
            &self.data,
            Utc::now().timestamp(),
        ))
    }

    /// Issues a signed compact token.
    ///
    /// Each call re-reads the current payload and options and stamps a fresh
    /// `iat`; the issuer itself is not modified.
    pub fn create(&self) -> Result<String> {
        let claims = self.claims().inspect_err(|e| {
            warn!(format = %self.format, error = %e, "Rejected token request");
        })?;

        let token = self
            .signer
            .sign(&claims, &self.secret, ALGORITHM)
            .map_err(|e| {
                error!(format = %self.format, error = %e, "Token signing failed");
                TokenError::SigningFailure(e.to_string())
            })?;

        let size = token.len();
        let limit = self.format.max_token_bytes();
        if size > limit {
            warn!(format = %self.format, size, limit, "Generated token exceeds size limit");
            return Err(TokenError::TokenTooLarge { limit, actual: size });
        }

        debug!(
            format = %self.format,
            version = claims.v,
            admin = claims.admin,
            size,
            "Issued token"
        );
        Ok(token)
    }
}

impl fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("secret", &"[redacted]")
            .field("format", &self.format)
            .field("data", &self.data)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
