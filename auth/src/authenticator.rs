use serde::Serialize;

use crate::password::gen_salt;
use crate::password::Argon2Encryptor;
use crate::password::PasswordEncryptor;
use crate::password::PasswordError;
use crate::token::TokenCodec;
use crate::token::TokenError;

/// Authentication coordinator combining salted password checks and token encoding.
///
/// Generic over the password encryptor so the hashing algorithm can be
/// swapped without touching callers.
pub struct Authenticator<PE = Argon2Encryptor>
where
    PE: PasswordEncryptor,
{
    encryptor: PE,
    codec: TokenCodec,
    salt_length: usize,
}

/// Freshly generated salt and the hash derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaltedHash {
    pub salt: String,
    pub hash: String,
}

/// Authentication operation errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),
}

impl<PE> Authenticator<PE>
where
    PE: PasswordEncryptor,
{
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `encryptor` - Password encryption implementation
    /// * `salt_length` - Length of generated salts in characters
    ///
    /// # Returns
    /// Configured Authenticator instance
    pub fn new(encryptor: PE, salt_length: usize) -> Self {
        Self {
            encryptor,
            codec: TokenCodec::new(),
            salt_length,
        }
    }

    /// Generate a salt and hash a password with it for storage.
    ///
    /// # Arguments
    /// * `password` - Plaintext password
    ///
    /// # Returns
    /// The new salt together with the derived hash
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<SaltedHash, PasswordError> {
        let salt = gen_salt(self.salt_length);
        let hash = self.encryptor.encrypt_password(password, &salt)?;

        Ok(SaltedHash { salt, hash })
    }

    /// Check a password against a stored salt and hash.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `salt` - Salt stored alongside the hash
    /// * `stored_hash` - Stored password hash
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Password verification failed
    pub fn verify_credentials(
        &self,
        password: &str,
        salt: &str,
        stored_hash: &str,
    ) -> Result<(), AuthenticationError> {
        if !self.encryptor.validate_password(password, salt, stored_hash)? {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(())
    }

    /// Encode claims into a session token.
    ///
    /// # Errors
    /// * `TokenError` - Token encoding failed
    pub fn generate_token<T: Serialize>(&self, claims: &T) -> Result<String, TokenError> {
        self.codec.encode(claims)
    }
}
