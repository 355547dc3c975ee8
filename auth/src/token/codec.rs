use base64::engine::general_purpose::URL_SAFE;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::claims::Header;
use super::errors::TokenError;
use super::json;

/// Segment separator in the token string.
pub const SEGMENT_SEPARATOR: char = '.';

/// Header and claims recovered from a token string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedToken<T> {
    pub header: Header,
    pub claims: T,
}

/// Codec for unsigned three-segment tokens.
///
/// Produces `base64url(header) + "." + base64url(claims) + "."`, where the
/// trailing empty segment stands in for a signature that is never computed.
/// Decoding gives no integrity guarantee: anyone holding a token can forge
/// another one. Trust must come from a server-side lookup of the full string.
#[derive(Debug, Clone)]
pub struct TokenCodec {
    header: Header,
}

impl TokenCodec {
    /// Create a codec emitting the unsigned header.
    pub fn new() -> Self {
        Self {
            header: Header::unsigned(),
        }
    }

    /// Encode claims into a token string.
    ///
    /// # Arguments
    /// * `claims` - Claims to encode (must implement Serialize)
    ///
    /// # Returns
    /// Token string with an empty signature segment
    ///
    /// # Errors
    /// * `EncodingFailed` - Claims could not be serialized
    pub fn encode<T: Serialize>(&self, claims: &T) -> Result<String, TokenError> {
        let header = encode_segment(&self.header)?;
        let payload = encode_segment(claims)?;

        Ok(format!(
            "{header}{SEGMENT_SEPARATOR}{payload}{SEGMENT_SEPARATOR}"
        ))
    }

    /// Decode a token string without any trust decision.
    ///
    /// # Arguments
    /// * `token` - Token string to decode
    ///
    /// # Returns
    /// Decoded header and claims
    ///
    /// # Errors
    /// * `Malformed` - Wrong segment count or a non-empty signature segment
    /// * `DecodingFailed` - A segment is not base64url JSON of the expected shape
    /// * `UnsupportedAlgorithm` - Header declares something other than `none`
    pub fn decode<T: DeserializeOwned>(&self, token: &str) -> Result<DecodedToken<T>, TokenError> {
        let segments: Vec<&str> = token.split(SEGMENT_SEPARATOR).collect();

        let [header, payload, signature] = segments.as_slice() else {
            return Err(TokenError::Malformed(format!(
                "expected 3 segments, got {}",
                segments.len()
            )));
        };

        if !signature.is_empty() {
            return Err(TokenError::Malformed(
                "signature segment must be empty".to_string(),
            ));
        }

        let header: Header = decode_segment(header)?;
        if !header.is_unsigned() {
            return Err(TokenError::UnsupportedAlgorithm(header.alg));
        }

        let claims = decode_segment(payload)?;

        Ok(DecodedToken { header, claims })
    }
}

impl Default for TokenCodec {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialize a value with the segment JSON layout and base64url-encode it
/// without padding.
pub fn encode_segment<T: Serialize>(value: &T) -> Result<String, TokenError> {
    let json = json::to_vec(value).map_err(|e| TokenError::EncodingFailed(e.to_string()))?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}

/// Restore padding on a base64url segment, decode it and parse the JSON inside.
pub fn decode_segment<T: DeserializeOwned>(segment: &str) -> Result<T, TokenError> {
    let padded = with_padding(segment);
    let bytes = URL_SAFE
        .decode(padded.as_bytes())
        .map_err(|e| TokenError::DecodingFailed(e.to_string()))?;

    serde_json::from_slice(&bytes).map_err(|e| TokenError::DecodingFailed(e.to_string()))
}

fn with_padding(segment: &str) -> String {
    let missing = (4 - segment.len() % 4) % 4;
    let mut padded = String::with_capacity(segment.len() + missing);
    padded.push_str(segment);
    padded.extend(std::iter::repeat('=').take(missing));
    padded
}
