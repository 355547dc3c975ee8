pub mod argon2;
pub mod encryptor;
pub mod errors;
pub mod salt;

pub use self::argon2::Argon2Encryptor;
pub use encryptor::PasswordEncryptor;
pub use errors::PasswordError;
pub use salt::gen_salt;
