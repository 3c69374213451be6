//! RSA-OAEP algorithms (RS256, RS384, RS512)
//!
//! These identifiers do NOT produce RFC 7518 RSASSA-PKCS1-v1_5 signatures.
//! The signing input is encrypted with RSA-OAEP under the verifier's public
//! key, and verification decrypts it with the matching private key. Tokens
//! signed this way are not accepted by standard RS256 verifiers.

use crate::algorithm::{DecryptionAlgorithm, EncryptionAlgorithm};
use crate::error::{Error, Result};
use crate::utils::base64url;

use rsa::sha2::{Sha256, Sha384, Sha512};
use rsa::{Oaep, RsaPrivateKey, RsaPublicKey};

/// RS256 algorithm (RSA-OAEP with SHA-256)
pub struct RS256;

/// RS384 algorithm (RSA-OAEP with SHA-384)
pub struct RS384;

/// RS512 algorithm (RSA-OAEP with SHA-512)
pub struct RS512;

impl EncryptionAlgorithm for RS256 {
    fn encrypt(&self, message: &str, label: &str, key: &RsaPublicKey) -> Result<String> {
        encrypt_rs256(message, label, key)
    }
}

impl DecryptionAlgorithm for RS256 {
    fn decrypt(&self, ciphertext: &str, label: &str, key: &RsaPrivateKey) -> Result<String> {
        decrypt_rs256(ciphertext, label, key)
    }
}

impl EncryptionAlgorithm for RS384 {
    fn encrypt(&self, message: &str, label: &str, key: &RsaPublicKey) -> Result<String> {
        encrypt_rs384(message, label, key)
    }
}

impl DecryptionAlgorithm for RS384 {
    fn decrypt(&self, ciphertext: &str, label: &str, key: &RsaPrivateKey) -> Result<String> {
        decrypt_rs384(ciphertext, label, key)
    }
}

impl EncryptionAlgorithm for RS512 {
    fn encrypt(&self, message: &str, label: &str, key: &RsaPublicKey) -> Result<String> {
        encrypt_rs512(message, label, key)
    }
}

impl DecryptionAlgorithm for RS512 {
    fn decrypt(&self, ciphertext: &str, label: &str, key: &RsaPrivateKey) -> Result<String> {
        decrypt_rs512(ciphertext, label, key)
    }
}

/// Encrypt with RSA-OAEP/SHA-256, returning the Base64URL ciphertext
pub fn encrypt_rs256(message: &str, label: &str, key: &RsaPublicKey) -> Result<String> {
    encrypt_oaep(message, Oaep::new_with_label::<Sha256, _>(label), key)
}

/// Decrypt a Base64URL RSA-OAEP/SHA-256 ciphertext
pub fn decrypt_rs256(ciphertext: &str, label: &str, key: &RsaPrivateKey) -> Result<String> {
    decrypt_oaep(ciphertext, Oaep::new_with_label::<Sha256, _>(label), key)
}

/// Encrypt with RSA-OAEP/SHA-384, returning the Base64URL ciphertext
pub fn encrypt_rs384(message: &str, label: &str, key: &RsaPublicKey) -> Result<String> {
    encrypt_oaep(message, Oaep::new_with_label::<Sha384, _>(label), key)
}

/// Decrypt a Base64URL RSA-OAEP/SHA-384 ciphertext
pub fn decrypt_rs384(ciphertext: &str, label: &str, key: &RsaPrivateKey) -> Result<String> {
    decrypt_oaep(ciphertext, Oaep::new_with_label::<Sha384, _>(label), key)
}

/// Encrypt with RSA-OAEP/SHA-512, returning the Base64URL ciphertext
pub fn encrypt_rs512(message: &str, label: &str, key: &RsaPublicKey) -> Result<String> {
    encrypt_oaep(message, Oaep::new_with_label::<Sha512, _>(label), key)
}

/// Decrypt a Base64URL RSA-OAEP/SHA-512 ciphertext
pub fn decrypt_rs512(ciphertext: &str, label: &str, key: &RsaPrivateKey) -> Result<String> {
    decrypt_oaep(ciphertext, Oaep::new_with_label::<Sha512, _>(label), key)
}

fn encrypt_oaep(message: &str, padding: Oaep, key: &RsaPublicKey) -> Result<String> {
    let mut rng = rand::thread_rng();
    let ciphertext = key
        .encrypt(&mut rng, padding, message.as_bytes())
        .map_err(|e| Error::Crypto(format!("RSA-OAEP encryption failed: {e}")))?;
    Ok(base64url::encode_bytes(&ciphertext))
}

fn decrypt_oaep(ciphertext: &str, padding: Oaep, key: &RsaPrivateKey) -> Result<String> {
    let ciphertext = base64url::decode_bytes(ciphertext)?;
    let plaintext = key.decrypt(padding, &ciphertext).map_err(|e| match e {
        rsa::Error::Decryption => Error::DecryptionFailed,
        other => Error::Crypto(format!("RSA-OAEP decryption failed: {other}")),
    })?;
    String::from_utf8(plaintext)
        .map_err(|e| Error::Crypto(format!("Decrypted signing input is not UTF-8: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::OnceLock;

    const SIGNING_INPUT: &str = "eyJhbGciOiJSUzI1NiIsInR5cCI6IkpXVCJ9.eyJzdWIiOiIxMjM0NTY3ODkwIn0";

    // Helper to share one RSA key pair across tests
    fn keypair() -> &'static (RsaPrivateKey, RsaPublicKey) {
        static KEYS: OnceLock<(RsaPrivateKey, RsaPublicKey)> = OnceLock::new();
        KEYS.get_or_init(|| {
            let mut rng = rand::thread_rng();
            let private = RsaPrivateKey::new(&mut rng, 2048).expect("Failed to generate key");
            let public = RsaPublicKey::from(&private);
            (private, public)
        })
    }

    #[test]
    fn test_rs256_roundtrip() {
        let (private, public) = keypair();
        let ciphertext = RS256.encrypt(SIGNING_INPUT, "label", public).unwrap();
        assert_eq!(
            RS256.decrypt(&ciphertext, "label", private).unwrap(),
            SIGNING_INPUT
        );
    }

    #[test]
    fn test_rs384_roundtrip() {
        let (private, public) = keypair();
        let ciphertext = RS384.encrypt(SIGNING_INPUT, "label", public).unwrap();
        assert_eq!(
            RS384.decrypt(&ciphertext, "label", private).unwrap(),
            SIGNING_INPUT
        );
    }

    #[test]
    fn test_rs512_roundtrip() {
        let (private, public) = keypair();
        let ciphertext = RS512.encrypt(SIGNING_INPUT, "", public).unwrap();
        assert_eq!(RS512.decrypt(&ciphertext, "", private).unwrap(), SIGNING_INPUT);
    }

    #[test]
    fn test_encryption_is_randomized() {
        let (_, public) = keypair();
        let a = RS256.encrypt(SIGNING_INPUT, "label", public).unwrap();
        let b = RS256.encrypt(SIGNING_INPUT, "label", public).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_wrong_label() {
        let (private, public) = keypair();
        let ciphertext = RS256.encrypt(SIGNING_INPUT, "label", public).unwrap();
        assert_eq!(
            RS256.decrypt(&ciphertext, "other", private),
            Err(Error::DecryptionFailed)
        );
    }

    #[test]
    fn test_wrong_hash() {
        let (private, public) = keypair();
        let ciphertext = RS256.encrypt(SIGNING_INPUT, "label", public).unwrap();
        assert_eq!(
            RS512.decrypt(&ciphertext, "label", private),
            Err(Error::DecryptionFailed)
        );
    }

    #[test]
    fn test_invalid_base64_ciphertext() {
        let (private, _) = keypair();
        assert!(matches!(
            RS256.decrypt("!!!", "label", private),
            Err(Error::FormatInvalidBase64(_))
        ));
    }

    #[test]
    fn test_message_too_long() {
        let (_, public) = keypair();
        // OAEP/SHA-512 on a 2048-bit key fits at most 126 bytes
        let message = "a".repeat(200);
        assert!(matches!(
            RS512.encrypt(&message, "label", public),
            Err(Error::Crypto(_))
        ));
    }
}
