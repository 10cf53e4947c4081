//! Token format variants.
//!
//! Both variants share the same issuance skeleton and differ only in the
//! limits and character class applied to the uid and in the claim shape:
//!
//! | variant   | `v` | max uid bytes | uid characters   |
//! |-----------|-----|---------------|------------------|
//! | `Legacy`  | 0   | 256           | any              |
//! | `Current` | 1   | 64            | `[A-Za-z0-9:-]`  |
//!
//! The signed token is capped at [`MAX_TOKEN_BYTES`] for both.

use std::fmt;
use std::str::FromStr;

use crate::errors::TokenError;

/// Ceiling on the size of a signed token, in bytes.
pub const MAX_TOKEN_BYTES: usize = 1024;

/// Claim-shape and validation ruleset for issued tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TokenFormat {
    /// `v=0`: the whole payload is nested under `d`.
    Legacy,
    /// `v=1`: `uid` is a top-level claim, the rest is nested under `claims`.
    #[default]
    Current,
}

impl TokenFormat {
    /// Value of the `v` claim.
    pub fn version(self) -> u8 {
        match self {
            Self::Legacy => 0,
            Self::Current => 1,
        }
    }

    pub fn max_uid_bytes(self) -> usize {
        match self {
            Self::Legacy => 256,
            Self::Current => 64,
        }
    }

    pub fn max_token_bytes(self) -> usize {
        MAX_TOKEN_BYTES
    }

    /// Whether every character of `uid` belongs to the format's allowed class.
    ///
    /// The whole string must match, so the check is equivalent to the anchored
    /// pattern `^[A-Za-z0-9:-]*$` for the current format.
    pub fn uid_charset_allows(self, uid: &str) -> bool {
        match self {
            Self::Legacy => true,
            Self::Current => uid
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == ':' || c == '-'),
        }
    }

    /// Validates a string uid against this format's rules.
    ///
    /// The character class is checked before the length, so an over-long uid
    /// with illegal characters reports [`TokenError::InvalidSubject`].
    pub fn validate_uid(self, uid: &str) -> Result<(), TokenError> {
        if !self.uid_charset_allows(uid) {
            return Err(TokenError::InvalidSubject {
                uid: uid.to_string(),
            });
        }

        let size = uid.len();
        if size > self.max_uid_bytes() {
            return Err(TokenError::SubjectTooLong {
                limit: self.max_uid_bytes(),
                actual: size,
            });
        }
        if size == 0 {
            return Err(TokenError::EmptySubject);
        }

        Ok(())
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Legacy => "legacy",
            Self::Current => "current",
        }
    }
}

impl fmt::Display for TokenFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenFormat {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" | "v0" | "0" => Ok(Self::Legacy),
            "current" | "v1" | "1" => Ok(Self::Current),
            other => Err(TokenError::Config(format!(
                "unknown token format \"{other}\", expected legacy or current"
            ))),
        }
    }
}
