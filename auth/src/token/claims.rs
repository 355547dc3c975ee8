use serde::Deserialize;
use serde::Serialize;

/// Algorithm tag carried by every issued token. Tokens are never signed.
pub const UNSIGNED_ALGORITHM: &str = "none";

/// Type tag carried by every issued token.
pub const TOKEN_TYPE: &str = "JWT";

/// Token header segment.
///
/// Only a format signal: the codec never produces or checks a signature.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Header {
    pub alg: String,
    pub typ: String,
}

impl Header {
    /// Header for an unsigned token: `{"alg": "none", "typ": "JWT"}`.
    pub fn unsigned() -> Self {
        Self {
            alg: UNSIGNED_ALGORITHM.to_string(),
            typ: TOKEN_TYPE.to_string(),
        }
    }

    /// Whether this header declares the unsigned algorithm.
    pub fn is_unsigned(&self) -> bool {
        self.alg == UNSIGNED_ALGORITHM
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::unsigned()
    }
}

/// Session token payload.
///
/// Field order is the serialized order: `sub`, `name`, `exp`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (numeric user identifier)
    pub sub: u64,

    /// Normalized username of the subject
    pub name: String,

    /// Expiration time (Unix timestamp, seconds)
    pub exp: i64,
}

impl Claims {
    /// Create claims for a user session.
    ///
    /// # Arguments
    /// * `user_id` - Numeric user identifier
    /// * `username` - Normalized username
    /// * `exp` - Absolute expiry (Unix timestamp)
    pub fn for_user(user_id: u64, username: impl Into<String>, exp: i64) -> Self {
        Self {
            sub: user_id,
            name: username.into(),
            exp,
        }
    }

    /// Check if the claims are expired at the given time.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        super::expiry::is_expired_at(self.exp, current_timestamp)
    }
}
