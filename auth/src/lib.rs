//! Session token and password utilities
//!
//! Stateless building blocks for an in-process identity core:
//! - Salted password encryption behind a swappable trait (Argon2id by default)
//! - Unsigned three-segment token encoding and decoding
//! - Random salts, numeric identifiers and expiry timestamps
//!
//! Nothing here decides whether a token is trusted. Tokens carry the
//! algorithm tag `none` and are only meaningful when looked up in a
//! server-side index of live sessions.
//!
//! # Examples
//!
//! ## Password Encryption
//! ```
//! use auth::{gen_salt, Argon2Encryptor, PasswordEncryptor};
//!
//! let encryptor = Argon2Encryptor::new();
//! let salt = gen_salt(16);
//! let hash = encryptor.encrypt_password("my_password", &salt).unwrap();
//! assert!(encryptor.validate_password("my_password", &salt, &hash).unwrap());
//! ```
//!
//! ## Tokens
//! ```
//! use auth::{Claims, DecodedToken, TokenCodec};
//!
//! let codec = TokenCodec::new();
//! let claims = Claims::for_user(123456, "alice", 1_700_000_000);
//! let token = codec.encode(&claims).unwrap();
//! let decoded: DecodedToken<Claims> = codec.decode(&token).unwrap();
//! assert_eq!(decoded.claims.name, "alice");
//! ```

pub mod authenticator;
pub mod ids;
pub mod password;
pub mod token;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use authenticator::SaltedHash;
pub use ids::gen_id;
pub use password::gen_salt;
pub use password::Argon2Encryptor;
pub use password::PasswordEncryptor;
pub use password::PasswordError;
pub use token::Claims;
pub use token::DecodedToken;
pub use token::Header;
pub use token::TokenCodec;
pub use token::TokenError;
