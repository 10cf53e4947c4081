//! Issuer configuration.
//!
//! # Environment Variables
//!
//! | Variable              | Required | Default   | Notes                                                      |
//! |-----------------------|----------|-----------|------------------------------------------------------------|
//! | `TOKEN_SECRET`        | **yes**  |           | Shared HMAC secret                                         |
//! | `TOKEN_FORMAT`        | no       | `current` | `legacy`/`v0`/`0` or `current`/`v1`/`1`                    |
//! | `TOKEN_ADMIN`         | no       | `false`   | `true` or `1` to enable                                    |
//! | `TOKEN_DEBUG`         | no       | `false`   | `true` or `1` to enable                                    |
//! | `TOKEN_LIFETIME_SECS` | no       | *(unset)* | Positive seconds; each token expires this long after `iat` |

use std::env;
use std::fmt;

use chrono::Duration;
use tokenmint_core::{TokenError, TokenFormat};

/// Settings used to build a token issuer.
#[derive(Clone, PartialEq, Eq)]
pub struct IssuerConfig {
    pub secret: String,
    pub format: TokenFormat,
    pub admin: bool,
    pub debug: bool,
    /// When set, issuers built from this config expire each token this long
    /// after it is issued.
    pub token_lifetime: Option<Duration>,
}

impl IssuerConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            format: TokenFormat::default(),
            admin: false,
            debug: false,
            token_lifetime: None,
        }
    }

    /// Build from environment variables already set in the process.
    pub fn from_env() -> Result<Self, TokenError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. See the module docs for the keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, TokenError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = lookup("TOKEN_SECRET")
            .ok_or_else(|| TokenError::Config("TOKEN_SECRET is not set".into()))?;

        let format = match lookup("TOKEN_FORMAT") {
            Some(v) if !v.trim().is_empty() => v.parse()?,
            _ => TokenFormat::default(),
        };

        let flag = |key: &str| {
            lookup(key)
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false)
        };

        let token_lifetime = match lookup("TOKEN_LIFETIME_SECS") {
            Some(v) if !v.trim().is_empty() => {
                let secs: i64 = v.trim().parse().map_err(|_| {
                    TokenError::Config(format!("TOKEN_LIFETIME_SECS must be an integer, got \"{v}\""))
                })?;
                if secs <= 0 {
                    return Err(TokenError::Config(format!(
                        "TOKEN_LIFETIME_SECS must be positive, got {secs}"
                    )));
                }
                Some(Duration::try_seconds(secs).ok_or_else(|| {
                    TokenError::Config(format!("TOKEN_LIFETIME_SECS is out of range ({secs})"))
                })?)
            }
            _ => None,
        };

        Ok(Self {
            secret,
            format,
            admin: flag("TOKEN_ADMIN"),
            debug: flag("TOKEN_DEBUG"),
            token_lifetime,
        })
    }

    pub fn format(mut self, v: TokenFormat) -> Self {
        self.format = v;
        self
    }
    pub fn admin(mut self, v: bool) -> Self {
        self.admin = v;
        self
    }
    pub fn debug(mut self, v: bool) -> Self {
        self.debug = v;
        self
    }
    pub fn token_lifetime(mut self, v: Duration) -> Self {
        self.token_lifetime = Some(v);
        self
    }
}

// The secret never appears in logs.
impl fmt::Debug for IssuerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IssuerConfig")
            .field("secret", &"[redacted]")
            .field("format", &self.format)
            .field("admin", &self.admin)
            .field("debug", &self.debug)
            .field("token_lifetime", &self.token_lifetime)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_from_lookup_defaults() {
        let config = IssuerConfig::from_lookup(lookup_from(&[("TOKEN_SECRET", "s3cr3t")])).unwrap();
        assert_eq!(config.secret, "s3cr3t");
        assert_eq!(config.format, TokenFormat::Current);
        assert!(!config.admin);
        assert!(!config.debug);
        assert!(config.token_lifetime.is_none());
    }

    #[test]
    fn test_from_lookup_missing_secret() {
        let result = IssuerConfig::from_lookup(lookup_from(&[]));
        assert!(matches!(result, Err(TokenError::Config(msg)) if msg.contains("TOKEN_SECRET")));
    }

    #[test]
    fn test_from_lookup_all_values() {
        let config = IssuerConfig::from_lookup(lookup_from(&[
            ("TOKEN_SECRET", "s3cr3t"),
            ("TOKEN_FORMAT", "legacy"),
            ("TOKEN_ADMIN", "1"),
            ("TOKEN_DEBUG", "true"),
            ("TOKEN_LIFETIME_SECS", "3600"),
        ]))
        .unwrap();
        assert_eq!(config.format, TokenFormat::Legacy);
        assert!(config.admin);
        assert!(config.debug);
        assert_eq!(config.token_lifetime, Some(Duration::seconds(3600)));
    }

    #[test]
    fn test_from_lookup_flags_only_accept_true_or_one() {
        let config = IssuerConfig::from_lookup(lookup_from(&[
            ("TOKEN_SECRET", "s3cr3t"),
            ("TOKEN_ADMIN", "yes"),
        ]))
        .unwrap();
        assert!(!config.admin);
    }

    #[test]
    fn test_from_lookup_bad_format() {
        let result = IssuerConfig::from_lookup(lookup_from(&[
            ("TOKEN_SECRET", "s3cr3t"),
            ("TOKEN_FORMAT", "v9"),
        ]));
        assert!(matches!(result, Err(TokenError::Config(_))));
    }

    #[test]
    fn test_from_lookup_bad_lifetime() {
        let result = IssuerConfig::from_lookup(lookup_from(&[
            ("TOKEN_SECRET", "s3cr3t"),
            ("TOKEN_LIFETIME_SECS", "an hour"),
        ]));
        assert!(matches!(result, Err(TokenError::Config(msg)) if msg.contains("TOKEN_LIFETIME_SECS")));
    }

    #[test]
    fn test_from_lookup_rejects_non_positive_lifetime() {
        for value in ["0", "-30"] {
            let result = IssuerConfig::from_lookup(lookup_from(&[
                ("TOKEN_SECRET", "s3cr3t"),
                ("TOKEN_LIFETIME_SECS", value),
            ]));
            assert!(
                matches!(result, Err(TokenError::Config(ref msg)) if msg.contains("must be positive")),
                "{value}: {result:?}"
            );
        }
    }

    #[test]
    fn test_builder_methods() {
        let config = IssuerConfig::new("s3cr3t")
            .format(TokenFormat::Legacy)
            .admin(true)
            .debug(true)
            .token_lifetime(Duration::minutes(5));
        assert_eq!(config.format, TokenFormat::Legacy);
        assert!(config.admin);
        assert!(config.debug);
        assert_eq!(config.token_lifetime, Some(Duration::seconds(300)));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let rendered = format!("{:?}", IssuerConfig::new("s3cr3t"));
        assert!(!rendered.contains("s3cr3t"));
        assert!(rendered.contains("[redacted]"));
    }
}
