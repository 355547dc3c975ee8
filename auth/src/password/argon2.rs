use argon2::Algorithm;
use argon2::Argon2;
use argon2::Params;
use argon2::Version;

use super::encryptor::PasswordEncryptor;
use super::errors::PasswordError;

/// Hash output size in bytes. Encoded hashes are twice as long in hex.
pub const HASH_LENGTH: usize = 32;

/// Shortest salt Argon2 accepts, in bytes.
pub const MIN_SALT_LENGTH: usize = argon2::MIN_SALT_LEN;

/// Argon2's recommended memory cost in KiB.
pub const DEFAULT_MEMORY_KIB: u32 = Params::DEFAULT_M_COST;

/// Argon2's recommended number of passes.
pub const DEFAULT_ITERATIONS: u32 = Params::DEFAULT_T_COST;

/// Argon2's recommended number of lanes.
pub const DEFAULT_PARALLELISM: u32 = Params::DEFAULT_P_COST;

/// Password encryption implementation.
///
/// Derives a fixed-width hash from the password and the caller-supplied salt
/// (internally uses Argon2id). Salts must be at least 8 bytes long.
pub struct Argon2Encryptor {
    argon2: Argon2<'static>,
}

impl Argon2Encryptor {
    /// Create an encryptor with Argon2's recommended default costs.
    ///
    /// # Returns
    /// Argon2Encryptor instance configured with secure defaults
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }

    /// Create an encryptor with explicit Argon2id costs.
    ///
    /// # Arguments
    /// * `memory_kib` - Memory cost in KiB (at least 8 per lane)
    /// * `iterations` - Number of passes
    /// * `parallelism` - Number of lanes
    ///
    /// # Errors
    /// * `InvalidParameters` - Costs are outside the range Argon2 accepts
    pub fn with_params(
        memory_kib: u32,
        iterations: u32,
        parallelism: u32,
    ) -> Result<Self, PasswordError> {
        let params = Params::new(memory_kib, iterations, parallelism, Some(HASH_LENGTH))
            .map_err(|e| PasswordError::InvalidParameters(e.to_string()))?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }
}

impl Default for Argon2Encryptor {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordEncryptor for Argon2Encryptor {
    fn encrypt_password(&self, password: &str, salt: &str) -> Result<String, PasswordError> {
        let mut output = [0u8; HASH_LENGTH];

        self.argon2
            .hash_password_into(password.as_bytes(), salt.as_bytes(), &mut output)
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))?;

        Ok(hex::encode(output))
    }

    fn validate_password(
        &self,
        input: &str,
        salt: &str,
        stored_hash: &str,
    ) -> Result<bool, PasswordError> {
        let well_formed = stored_hash.len() == HASH_LENGTH * 2
            && stored_hash.chars().all(|c| c.is_ascii_hexdigit());
        if !well_formed {
            return Err(PasswordError::VerificationFailed(
                "Stored hash is not a hex-encoded Argon2 output".to_string(),
            ));
        }

        Ok(self.encrypt_password(input, salt)? == stored_hash)
    }
}
