//! BIP-39 mnemonic encoding of key material
//!
//! A 32-byte key encodes as 24 English words; the final word carries a
//! checksum over the entropy, so decoding rejects transcription errors.
//! Shorter BIP-39 entropy sizes (16/20/24/28 bytes) are accepted by the
//! codec itself; the 32-byte length is a caller-level invariant.

use bip39::{Language, Mnemonic};

use crate::KeyError;

/// Encode key bytes as a BIP-39 mnemonic sentence.
///
/// Fails if the length is not a sanctioned BIP-39 entropy size.
pub fn key_to_mnemonic(key: &[u8]) -> Result<String, KeyError> {
    let mnemonic = Mnemonic::from_entropy_in(Language::English, key)?;
    Ok(mnemonic.to_string())
}

/// Decode a BIP-39 mnemonic sentence back to key bytes.
///
/// Fails on an unknown word, an unsanctioned word count, or a checksum
/// mismatch.
pub fn mnemonic_to_key(words: &str) -> Result<Vec<u8>, KeyError> {
    let mnemonic = Mnemonic::parse_in(Language::English, words)?;
    Ok(mnemonic.to_entropy())
}

/// True iff [`mnemonic_to_key`] would accept the sentence. Never panics;
/// used as a predicate for format detection.
pub fn is_valid_mnemonic(words: &str) -> bool {
    Mnemonic::parse_in(Language::English, words).is_ok()
}
