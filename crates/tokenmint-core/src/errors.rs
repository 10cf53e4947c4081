//! Error taxonomy for token issuance.
//!
//! Every failure is reported synchronously to the immediate caller. Nothing is
//! retried internally; callers fix their inputs and try again.

use thiserror::Error;

/// Convenience alias used across the tokenmint crates.
pub type Result<T, E = TokenError> = std::result::Result<T, E>;

/// Errors raised while configuring an issuer or creating a token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// The issuer secret was supplied as something other than a string.
    #[error("The secret must be a string, {given} given")]
    InvalidSecretType { given: &'static str },

    /// An option name outside the fixed registry.
    #[error("Unsupported option \"{name}\". Valid options are: {valid}")]
    UnsupportedOption { name: String, valid: String },

    /// An option value whose type does not match the option's declared type.
    #[error("Invalid option \"{name}\". Expected {expected}, but {given} given")]
    InvalidOptionType {
        name: String,
        expected: &'static str,
        given: &'static str,
    },

    /// An integer timestamp that cannot be represented as an instant.
    #[error("Invalid option \"{name}\". Timestamp {value} is out of range")]
    InvalidTimestamp { name: String, value: i64 },

    #[error("No uid provided in data and admin option not set")]
    MissingSubject,

    #[error("The uid must be a string, {given} given")]
    InvalidSubjectType { given: &'static str },

    /// The uid contains characters outside the format's allowed class.
    #[error("The uid \"{uid}\" may only contain letters, digits, ':' and '-'")]
    InvalidSubject { uid: String },

    #[error("The provided uid is longer than {limit} bytes ({actual})")]
    SubjectTooLong { limit: usize, actual: usize },

    #[error("The provided uid is empty")]
    EmptySubject,

    /// Wraps any failure of the signing primitive, keeping its message.
    #[error("Failed to sign token: {0}")]
    SigningFailure(String),

    #[error("The generated token is larger than {limit} bytes ({actual})")]
    TokenTooLarge { limit: usize, actual: usize },

    /// Missing or malformed issuer configuration.
    #[error("Issuer not configured: {0}")]
    Config(String),
}
