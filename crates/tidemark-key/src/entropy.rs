//! Key generation and base64 encoding
//!
//! Keys are drawn from the OS CSPRNG. A failed entropy source surfaces as
//! an error; it never degrades to a zero or partially-filled key.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::Zeroizing;

use crate::KeyError;

/// Encryption key length in bytes (256 bits)
pub const KEY_LEN: usize = 32;

/// Generate a fresh encryption key from the OS CSPRNG.
pub fn generate_key() -> Result<[u8; KEY_LEN], KeyError> {
    let mut key = [0u8; KEY_LEN];
    OsRng
        .try_fill_bytes(&mut key)
        .map_err(|e| KeyError::Entropy(e.to_string()))?;
    Ok(key)
}

/// Generate a fresh encryption key and return it base64-encoded.
pub fn generate_key_base64() -> Result<String, KeyError> {
    let key = Zeroizing::new(generate_key()?);
    Ok(encode_key(key.as_slice()))
}

/// Encode key bytes as standard base64 with padding.
pub fn encode_key(key: &[u8]) -> String {
    STANDARD.encode(key)
}

/// Decode a base64-encoded key.
///
/// Fails on characters outside the standard alphabet or bad padding.
pub fn decode_key(encoded: &str) -> Result<Vec<u8>, KeyError> {
    Ok(STANDARD.decode(encoded)?)
}
