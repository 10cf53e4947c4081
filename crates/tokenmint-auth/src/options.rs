//! Issuer options.
//!
//! Four options exist, each with a declared type and default:
//!
//! | name        | type             | default | claim   |
//! |-------------|------------------|---------|---------|
//! | `admin`     | bool             | false   | `admin` |
//! | `debug`     | bool             | false   | `debug` |
//! | `expires`   | int or DateTime  | unset   | `exp`   |
//! | `notBefore` | int or DateTime  | unset   | `nbf`   |
//!
//! Integer timestamps are epoch seconds and are normalised to an instant when
//! the option is set.
//!
//! A token lifetime can also be attached through the typed API. It is not a
//! named option: it only fills `exp` at issuance when `expires` is unset.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, TimeZone, Utc};
use tokenmint_core::{OptionValue, TokenError};

/// Name of a supported issuer option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssuerOption {
    Admin,
    Debug,
    Expires,
    NotBefore,
}

impl IssuerOption {
    pub const ALL: [IssuerOption; 4] = [Self::Admin, Self::Debug, Self::Expires, Self::NotBefore];

    pub fn name(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Debug => "debug",
            Self::Expires => "expires",
            Self::NotBefore => "notBefore",
        }
    }

    /// Declared type, as named in error messages.
    pub fn expected_type(self) -> &'static str {
        match self {
            Self::Admin | Self::Debug => "bool",
            Self::Expires | Self::NotBefore => "int or DateTime",
        }
    }

    fn valid_names() -> String {
        Self::ALL
            .iter()
            .map(|o| o.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for IssuerOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IssuerOption {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|o| o.name() == s)
            .ok_or_else(|| TokenError::UnsupportedOption {
                name: s.to_string(),
                valid: Self::valid_names(),
            })
    }
}

/// Current option values of an issuer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssuerOptions {
    /// Waives the uid requirement.
    pub admin: bool,
    pub debug: bool,
    pub expires: Option<DateTime<Utc>>,
    pub not_before: Option<DateTime<Utc>>,
    /// Relative expiry applied to each issuance. `expires` takes precedence.
    pub lifetime: Option<Duration>,
}

impl IssuerOptions {
    /// Sets an option by name, checking the value against the declared type.
    ///
    /// On error the options are left unchanged.
    pub fn set(&mut self, name: &str, value: OptionValue) -> Result<(), TokenError> {
        let option: IssuerOption = name.parse()?;
        match option {
            IssuerOption::Admin => self.admin = expect_bool(option, value)?,
            IssuerOption::Debug => self.debug = expect_bool(option, value)?,
            IssuerOption::Expires => self.expires = Some(expect_instant(option, value)?),
            IssuerOption::NotBefore => self.not_before = Some(expect_instant(option, value)?),
        }
        Ok(())
    }

    /// `exp` claim value in epoch seconds.
    pub fn exp(&self) -> Option<i64> {
        self.expires.map(|t| t.timestamp())
    }

    /// `exp` claim value for a token issued at `iat`.
    ///
    /// An explicit `expires` wins over the lifetime.
    pub fn exp_at(&self, iat: i64) -> Option<i64> {
        self.exp()
            .or_else(|| self.lifetime.map(|l| iat.saturating_add(l.num_seconds())))
    }

    /// `nbf` claim value in epoch seconds.
    pub fn nbf(&self) -> Option<i64> {
        self.not_before.map(|t| t.timestamp())
    }
}

fn type_mismatch(option: IssuerOption, value: &OptionValue) -> TokenError {
    TokenError::InvalidOptionType {
        name: option.name().to_string(),
        expected: option.expected_type(),
        given: value.type_name(),
    }
}

fn expect_bool(option: IssuerOption, value: OptionValue) -> Result<bool, TokenError> {
    match value {
        OptionValue::Bool(b) => Ok(b),
        other => Err(type_mismatch(option, &other)),
    }
}

fn expect_instant(option: IssuerOption, value: OptionValue) -> Result<DateTime<Utc>, TokenError> {
    match value {
        OptionValue::Instant(t) => Ok(t),
        OptionValue::Integer(secs) => {
            Utc.timestamp_opt(secs, 0)
                .single()
                .ok_or_else(|| TokenError::InvalidTimestamp {
                    name: option.name().to_string(),
                    value: secs,
                })
        }
        other => Err(type_mismatch(option, &other)),
    }
}
