//! AES-256-GCM encryption of identity documents at rest.

use aes_gcm::aead::rand_core::RngCore;
use aes_gcm::aead::{Aead, KeyInit, OsRng};
use aes_gcm::{Aes256Gcm, Key, Nonce};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::AuthError;

const NONCE_LEN: usize = 12;

/// Encrypt a document blob with AES-256-GCM.
///
/// Returns `base64(nonce || ciphertext || tag)`.
pub fn encrypt_document(key: &[u8; 32], plaintext: &[u8]) -> Result<String, AuthError> {
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key));
    let mut nonce_bytes = [0u8; NONCE_LEN];
    OsRng.fill_bytes(&mut nonce_bytes);
    let nonce = Nonce::from_slice(&nonce_bytes);

    let ciphertext = cipher
        .encrypt(nonce, plaintext)
        .map_err(|e| AuthError::Encryption(format!("AES-GCM encrypt: {e}")))?;

    let mut combined = nonce_bytes.to_vec();
    combined.extend_from_slice(&ciphertext);
    Ok(STANDARD.encode(combined))
}

/// Decrypt a document produced by [`encrypt_document`].
pub fn decrypt_document(key: &[u8; 32], encoded: &str) -> Result<Vec<u8>, AuthError> {
    let combined = STANDARD
        .decode(encoded)
        .map_err(|e| AuthError::Encryption(format!("base64 decode: {e}")))?;

    if combined.len() <= NONCE_LEN {
        return Err(AuthError::Encryption("ciphertext too short".into()));
    }

    let (nonce_bytes, ciphertext) = combined.split_at(NONCE_LEN);
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key));
    let nonce = Nonce::from_slice(nonce_bytes);

    cipher
        .decrypt(nonce, ciphertext)
        .map_err(|e| AuthError::Encryption(format!("AES-GCM decrypt: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: [u8; 32] = [7u8; 32];

    #[test]
    fn encrypted_document_decrypts_with_same_key() {
        let photo = b"\xff\xd8\xff\xe0 jpeg bytes";
        let sealed = encrypt_document(&KEY, photo).unwrap();
        assert_eq!(decrypt_document(&KEY, &sealed).unwrap(), photo);
    }

    #[test]
    fn ciphertext_does_not_leak_plaintext_and_is_randomized() {
        let a = encrypt_document(&KEY, b"ktp").unwrap();
        let b = encrypt_document(&KEY, b"ktp").unwrap();
        assert_ne!(a, b);
        assert_ne!(STANDARD.decode(&a).unwrap(), b"ktp");
    }

    #[test]
    fn wrong_key_fails() {
        let sealed = encrypt_document(&KEY, b"selfie").unwrap();
        assert!(matches!(
            decrypt_document(&[8u8; 32], &sealed),
            Err(AuthError::Encryption(_))
        ));
    }

    #[test]
    fn truncated_input_fails() {
        let short = STANDARD.encode([0u8; NONCE_LEN]);
        assert!(decrypt_document(&KEY, &short).is_err());
        assert!(decrypt_document(&KEY, "%%%").is_err());
    }
}
