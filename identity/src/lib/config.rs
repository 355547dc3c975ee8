use std::env;

use auth::ids::ID_DIGITS;
use auth::password::argon2::DEFAULT_ITERATIONS;
use auth::password::argon2::DEFAULT_MEMORY_KIB;
use auth::password::argon2::DEFAULT_PARALLELISM;
use auth::password::salt::SALT_LENGTH;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

/// Session lifetime applied when nothing overrides it (2 hours).
pub const DEFAULT_TOKEN_LIFETIME_SECS: i64 = 2 * 60 * 60;

#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub token: TokenConfig,
    pub password: PasswordConfig,
    pub identity: IdentityConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct TokenConfig {
    pub lifetime_seconds: i64,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            lifetime_seconds: DEFAULT_TOKEN_LIFETIME_SECS,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PasswordConfig {
    pub salt_length: usize,
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            salt_length: SALT_LENGTH,
            memory_kib: DEFAULT_MEMORY_KIB,
            iterations: DEFAULT_ITERATIONS,
            parallelism: DEFAULT_PARALLELISM,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct IdentityConfig {
    pub id_digits: u32,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            id_digits: ID_DIGITS,
        }
    }
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (IDENTITY__TOKEN__LIFETIME_SECONDS, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    /// 4. Built-in defaults
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: IDENTITY__PASSWORD__SALT_LENGTH=32 overrides password.salt_length
            .add_source(
                Environment::with_prefix("IDENTITY")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        configuration.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();

        assert_eq!(config.token.lifetime_seconds, 7200);
        assert_eq!(config.password.salt_length, 16);
        assert_eq!(config.identity.id_digits, 6);
    }

    #[test]
    fn test_partial_source_keeps_defaults() {
        let config: Config = ConfigBuilder::builder()
            .set_override("token.lifetime_seconds", 60)
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.token.lifetime_seconds, 60);
        assert_eq!(config.password, PasswordConfig::default());
        assert_eq!(config.identity, IdentityConfig::default());
    }
}
