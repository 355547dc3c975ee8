use auth::PasswordError;
use auth::TokenError;
use thiserror::Error;

use crate::domain::identity::models::RoleName;
use crate::domain::identity::models::Username;

/// Top-level error for all identity operations
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    // Account and role errors, carrying the normalized name
    #[error("Username \"{0}\" already exists")]
    UsernameAlreadyExists(Username),

    #[error("Username \"{0}\" does not exist")]
    UsernameNotFound(Username),

    #[error("Role \"{0}\" already exists")]
    RoleAlreadyExists(RoleName),

    #[error("Role \"{0}\" does not exist")]
    RoleNotFound(RoleName),

    // Session errors
    #[error("The entered password is not correct")]
    InvalidPassword,

    /// Unknown, invalidated and expired tokens are deliberately indistinguishable.
    #[error("Auth token is invalid")]
    InvalidToken,

    // Infrastructure errors
    #[error("No free user identifier of {digits} digits remains")]
    IdSpaceExhausted { digits: u32 },

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),
}

impl From<auth::AuthenticationError> for AuthError {
    fn from(err: auth::AuthenticationError) -> Self {
        match err {
            auth::AuthenticationError::InvalidCredentials => AuthError::InvalidPassword,
            auth::AuthenticationError::PasswordError(e) => AuthError::Password(e),
        }
    }
}
