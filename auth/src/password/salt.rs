use rand::distributions::Alphanumeric;
use rand::Rng;

/// Default salt length in characters.
pub const SALT_LENGTH: usize = 16;

/// Generate a random salt of `length` characters drawn from `[0-9a-zA-Z]`.
pub fn gen_salt(length: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}
