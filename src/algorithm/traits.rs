use crate::error::Result;

#[cfg(feature = "rsa")]
use rsa::{RsaPrivateKey, RsaPublicKey};

/// Symmetric signing algorithm (the HMAC family)
///
/// Implementations return the Base64URL-encoded signature of `message`.
/// Closures of the form `Fn(&str, &[u8]) -> Result<String>` implement this
/// trait, so custom algorithms can be registered without a named type.
pub trait SigningAlgorithm: Send + Sync {
    /// Sign the signing input (header.payload) with a shared secret
    fn sign(&self, message: &str, secret: &[u8]) -> Result<String>;
}

impl<F> SigningAlgorithm for F
where
    F: Fn(&str, &[u8]) -> Result<String> + Send + Sync,
{
    fn sign(&self, message: &str, secret: &[u8]) -> Result<String> {
        self(message, secret)
    }
}

/// Asymmetric "signing" by encryption with the verifier's public key
///
/// Implementations return the Base64URL-encoded ciphertext of `message`.
#[cfg(feature = "rsa")]
pub trait EncryptionAlgorithm: Send + Sync {
    /// Encrypt the signing input under `key`, bound to `label`
    fn encrypt(&self, message: &str, label: &str, key: &RsaPublicKey) -> Result<String>;
}

#[cfg(feature = "rsa")]
impl<F> EncryptionAlgorithm for F
where
    F: Fn(&str, &str, &RsaPublicKey) -> Result<String> + Send + Sync,
{
    fn encrypt(&self, message: &str, label: &str, key: &RsaPublicKey) -> Result<String> {
        self(message, label, key)
    }
}

/// Asymmetric verification by decryption with the issuer's private key
///
/// Implementations take the Base64URL-encoded ciphertext and return the
/// plaintext. A ciphertext that does not match the key or label must be
/// reported as [`Error::DecryptionFailed`](crate::Error::DecryptionFailed).
#[cfg(feature = "rsa")]
pub trait DecryptionAlgorithm: Send + Sync {
    /// Decrypt a Base64URL ciphertext with `key`, bound to `label`
    fn decrypt(&self, ciphertext: &str, label: &str, key: &RsaPrivateKey) -> Result<String>;
}

#[cfg(feature = "rsa")]
impl<F> DecryptionAlgorithm for F
where
    F: Fn(&str, &str, &RsaPrivateKey) -> Result<String> + Send + Sync,
{
    fn decrypt(&self, ciphertext: &str, label: &str, key: &RsaPrivateKey) -> Result<String> {
        self(ciphertext, label, key)
    }
}
