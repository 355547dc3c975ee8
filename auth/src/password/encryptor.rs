use super::errors::PasswordError;

/// Salted password encryption seam.
///
/// Maps `(password, salt)` to a fixed-width hash string. Implementations must
/// be deterministic: the same pair always yields the same hash, so a stored
/// hash can be checked by recomputing it.
pub trait PasswordEncryptor: Send + Sync {
    /// Derive the hash for a password and salt.
    ///
    /// # Errors
    /// * `HashingFailed` - The underlying algorithm rejected the input
    fn encrypt_password(&self, password: &str, salt: &str) -> Result<String, PasswordError>;

    /// Recompute the hash for `input` and compare it with `stored_hash`.
    ///
    /// # Returns
    /// True if the password matches, false otherwise
    fn validate_password(
        &self,
        input: &str,
        salt: &str,
        stored_hash: &str,
    ) -> Result<bool, PasswordError> {
        Ok(self.encrypt_password(input, salt)? == stored_hash)
    }
}
