//! Tidemark Key Codec
//!
//! Generation and encoding of the per-account encryption key.
//!
//! # Encodings
//!
//! The same 32 bytes of CSPRNG entropy carry two interchangeable forms:
//! - standard base64 with padding (compact machine form)
//! - BIP-39 mnemonic, English wordlist, 24 words (human-transcribable form)
//!
//! Converting either form back to bytes and re-encoding to the other
//! reproduces the original key exactly. Nothing here holds state; the
//! codec converts on demand and never stores both forms.

pub mod entropy;
pub mod import;
pub mod mnemonic;

pub use entropy::{decode_key, encode_key, generate_key, generate_key_base64, KEY_LEN};
pub use import::{normalize_imported_key, ImportedKey};
pub use mnemonic::{is_valid_mnemonic, key_to_mnemonic, mnemonic_to_key};

use thiserror::Error;

/// Errors from key generation and encoding
#[derive(Error, Debug)]
pub enum KeyError {
    /// The OS entropy source failed. Not recoverable at this layer; there
    /// is no fallback PRNG.
    #[error("entropy source failed: {0}")]
    Entropy(String),

    #[error("invalid base64 key: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("invalid mnemonic: {0}")]
    Mnemonic(#[from] bip39::Error),
}
