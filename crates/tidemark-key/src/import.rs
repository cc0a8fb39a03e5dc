//! Format detection for externally supplied keys
//!
//! Import paths hand over a single string of unknown encoding. If it
//! parses as a BIP-39 sentence it is treated as the mnemonic form,
//! otherwise as base64. A base64 string that happens to consist entirely
//! of wordlist words with a valid checksum would be misread as a
//! mnemonic; that window is vanishingly small and accepted rather than
//! special-cased.

use zeroize::Zeroizing;

use crate::{
    decode_key, encode_key, is_valid_mnemonic, key_to_mnemonic, mnemonic_to_key, KeyError,
};

/// A key recovered from an import string, in both encodings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedKey {
    /// Standard base64 form
    pub base64: String,
    /// BIP-39 mnemonic form
    pub mnemonic: String,
}

/// Detect the encoding of `input` and derive the missing form.
pub fn normalize_imported_key(input: &str) -> Result<ImportedKey, KeyError> {
    if is_valid_mnemonic(input) {
        let key = Zeroizing::new(mnemonic_to_key(input)?);
        Ok(ImportedKey {
            base64: encode_key(&key),
            mnemonic: input.to_string(),
        })
    } else {
        let key = Zeroizing::new(decode_key(input)?);
        Ok(ImportedKey {
            base64: input.to_string(),
            mnemonic: key_to_mnemonic(&key)?,
        })
    }
}
