pub mod claims;
pub mod codec;
pub mod errors;
pub mod expiry;
pub mod json;

pub use claims::Claims;
pub use claims::Header;
pub use codec::DecodedToken;
pub use codec::TokenCodec;
pub use errors::TokenError;
