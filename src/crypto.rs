// src/crypto.rs
use chacha20poly1305::{
    aead::{Aead, KeyInit},
    ChaCha20Poly1305, Key, Nonce,
};
use rand::{rngs::OsRng, RngCore};
use sha1::Sha1;
use sha2::{Digest, Sha256};
use thiserror::Error;

pub const KEY_LEN: usize = 32;
pub const NONCE_LEN: usize = 12;
const TAG_LEN: usize = 16;

#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("Encryption error: {0}")]
    EncryptionError(String),

    #[error("Decryption error: {0}")]
    DecryptionError(String),

    #[error("Invalid data format: {0}")]
    InvalidFormat(String),

    #[error("UTF-8 encoding error: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),

    #[error("Key size error: {0}")]
    KeySizeError(String),
}

pub type Result<T> = std::result::Result<T, CryptoError>;

/// Fresh random key from the operating system CSPRNG.
pub fn generate_key() -> [u8; KEY_LEN] {
    let mut key = [0u8; KEY_LEN];
    OsRng.fill_bytes(&mut key);
    key
}

fn cipher_for(key: &[u8]) -> Result<ChaCha20Poly1305> {
    if key.len() != KEY_LEN {
        return Err(CryptoError::KeySizeError(format!(
            "expected {} bytes, got {}",
            KEY_LEN,
            key.len()
        )));
    }
    Ok(ChaCha20Poly1305::new(Key::from_slice(key)))
}

/// Encrypt arbitrary data using the provided key
pub fn encrypt_data(key: &[u8], data: &[u8]) -> Result<Vec<u8>> {
    let cipher = cipher_for(key)?;

    // Generate a random nonce
    let mut nonce = [0u8; NONCE_LEN];
    OsRng.fill_bytes(&mut nonce);

    let ciphertext = cipher
        .encrypt(Nonce::from_slice(&nonce), data)
        .map_err(|e| CryptoError::EncryptionError(e.to_string()))?;

    // Combine nonce and ciphertext
    let mut result = Vec::with_capacity(nonce.len() + ciphertext.len());
    result.extend_from_slice(&nonce);
    result.extend(ciphertext);

    Ok(result)
}

/// Decrypt data that was encrypted with encrypt_data
pub fn decrypt_data(key: &[u8], data: &[u8]) -> Result<Vec<u8>> {
    // Ensure data is long enough to contain nonce + tag
    if data.len() < NONCE_LEN + TAG_LEN {
        return Err(CryptoError::InvalidFormat("Data too short".to_string()));
    }

    let cipher = cipher_for(key)?;
    let (nonce, ciphertext) = data.split_at(NONCE_LEN);

    cipher
        .decrypt(Nonce::from_slice(nonce), ciphertext)
        .map_err(|e| CryptoError::DecryptionError(e.to_string()))
}

pub fn encrypt_password(key: &[u8], plaintext: &str) -> Result<Vec<u8>> {
    encrypt_data(key, plaintext.as_bytes())
}

pub fn decrypt_password(key: &[u8], ciphertext: &[u8]) -> Result<String> {
    let plaintext = decrypt_data(key, ciphertext)?;
    Ok(String::from_utf8(plaintext)?)
}

/// Lowercase hex SHA-256 digest.
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

/// Uppercase hex SHA-1 digest, the form used by the breach range service.
pub fn sha1_hex_upper(data: &[u8]) -> String {
    hex::encode_upper(Sha1::digest(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encrypt_decrypt_password() {
        let key = generate_key();
        let encrypted = encrypt_password(&key, "Tr0ub4dor&3").unwrap();
        assert_ne!(&encrypted[NONCE_LEN..], b"Tr0ub4dor&3");
        assert_eq!(decrypt_password(&key, &encrypted).unwrap(), "Tr0ub4dor&3");
    }

    #[test]
    fn test_wrong_key_fails() {
        let encrypted = encrypt_password(&generate_key(), "secret").unwrap();
        let result = decrypt_password(&generate_key(), &encrypted);
        assert!(matches!(result, Err(CryptoError::DecryptionError(_))));
    }

    #[test]
    fn test_tampered_ciphertext_fails() {
        let key = generate_key();
        let mut encrypted = encrypt_password(&key, "secret").unwrap();
        let last = encrypted.len() - 1;
        encrypted[last] ^= 0x01;
        assert!(decrypt_password(&key, &encrypted).is_err());
    }

    #[test]
    fn test_fresh_keys_and_nonces() {
        let key = generate_key();
        assert_ne!(key, generate_key());
        let first = encrypt_password(&key, "same").unwrap();
        let second = encrypt_password(&key, "same").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_bad_key_size() {
        let result = encrypt_data(&[0u8; 16], b"data");
        assert!(matches!(result, Err(CryptoError::KeySizeError(_))));
    }

    #[test]
    fn test_short_data() {
        let result = decrypt_data(&generate_key(), &[0u8; 10]);
        assert!(matches!(result, Err(CryptoError::InvalidFormat(_))));
    }

    #[test]
    fn test_digests() {
        assert_eq!(
            sha1_hex_upper(b"password"),
            "5BAA61E4C9B93F3F0682250B6CF8331B7EE68FD8"
        );
        assert_eq!(
            sha256_hex(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}
