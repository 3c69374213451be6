//! Key material for signing and validation
//!
//! - Symmetric secrets (for HMAC algorithms) as [`SymmetricKey`]
//! - RSA keys (for the RSA-OAEP algorithms) loaded from PEM

use std::fmt;

#[cfg(feature = "rsa")]
use crate::error::{Error, Result};

#[cfg(feature = "rsa")]
pub use rsa::{RsaPrivateKey, RsaPublicKey};

/// Shared secret for HMAC algorithms
///
/// Every `impl AsRef<[u8]>` is accepted as a secret, so this wrapper is
/// optional. It keeps the secret out of `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct SymmetricKey {
    secret: Vec<u8>,
}

impl SymmetricKey {
    /// Create a new symmetric key
    pub fn new(secret: Vec<u8>) -> Self {
        Self { secret }
    }

    /// Get the secret bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.secret
    }

    /// Length of the secret in bytes
    pub fn len(&self) -> usize {
        self.secret.len()
    }

    /// Check if the secret is empty
    pub fn is_empty(&self) -> bool {
        self.secret.is_empty()
    }
}

impl AsRef<[u8]> for SymmetricKey {
    fn as_ref(&self) -> &[u8] {
        &self.secret
    }
}

impl fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SymmetricKey")
            .field("len", &self.secret.len())
            .finish_non_exhaustive()
    }
}

impl From<Vec<u8>> for SymmetricKey {
    fn from(secret: Vec<u8>) -> Self {
        Self::new(secret)
    }
}

impl From<&[u8]> for SymmetricKey {
    fn from(secret: &[u8]) -> Self {
        Self::new(secret.to_vec())
    }
}

impl From<String> for SymmetricKey {
    fn from(secret: String) -> Self {
        Self::new(secret.into_bytes())
    }
}

impl From<&str> for SymmetricKey {
    fn from(secret: &str) -> Self {
        Self::new(secret.as_bytes().to_vec())
    }
}

/// Load an RSA public key from PEM (SubjectPublicKeyInfo or PKCS#1)
#[cfg(feature = "rsa")]
pub fn rsa_public_key_from_pem(pem: &str) -> Result<RsaPublicKey> {
    use rsa::pkcs1::DecodeRsaPublicKey;
    use rsa::pkcs8::DecodePublicKey;

    RsaPublicKey::from_public_key_pem(pem)
        .or_else(|_| RsaPublicKey::from_pkcs1_pem(pem))
        .map_err(|e| Error::KeyInvalid(format!("Failed to parse RSA public key PEM: {e}")))
}

/// Load an RSA private key from PEM (PKCS#8 or PKCS#1)
#[cfg(feature = "rsa")]
pub fn rsa_private_key_from_pem(pem: &str) -> Result<RsaPrivateKey> {
    use rsa::pkcs1::DecodeRsaPrivateKey;
    use rsa::pkcs8::DecodePrivateKey;

    RsaPrivateKey::from_pkcs8_pem(pem)
        .or_else(|_| RsaPrivateKey::from_pkcs1_pem(pem))
        .map_err(|e| Error::KeyInvalid(format!("Failed to parse RSA private key PEM: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symmetric_key_conversions() {
        let expected = b"secret".as_slice();
        assert_eq!(SymmetricKey::from("secret").as_bytes(), expected);
        assert_eq!(SymmetricKey::from("secret".to_string()).as_bytes(), expected);
        assert_eq!(SymmetricKey::from(expected).as_bytes(), expected);
        assert_eq!(SymmetricKey::from(expected.to_vec()).as_ref(), expected);
    }

    #[test]
    fn test_symmetric_key_debug_hides_secret() {
        let debug = format!("{:?}", SymmetricKey::from("hunter2"));
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("len: 7"));
    }

    #[test]
    fn test_empty_symmetric_key() {
        assert!(SymmetricKey::from("").is_empty());
        assert_eq!(SymmetricKey::from("abc").len(), 3);
    }

    #[cfg(feature = "rsa")]
    mod pem {
        use super::super::*;
        use crate::error::Error;
        use rsa::pkcs1::{EncodeRsaPrivateKey, EncodeRsaPublicKey};
        use rsa::pkcs8::{EncodePrivateKey, EncodePublicKey, LineEnding};
        use std::sync::OnceLock;

        fn private_key() -> &'static RsaPrivateKey {
            static KEY: OnceLock<RsaPrivateKey> = OnceLock::new();
            KEY.get_or_init(|| {
                let mut rng = rand::thread_rng();
                RsaPrivateKey::new(&mut rng, 1024).expect("Failed to generate key")
            })
        }

        #[test]
        fn test_private_key_pkcs8() {
            let pem = private_key().to_pkcs8_pem(LineEnding::LF).unwrap();
            let loaded = rsa_private_key_from_pem(&pem).unwrap();
            assert_eq!(&loaded, private_key());
        }

        #[test]
        fn test_private_key_pkcs1() {
            let pem = private_key().to_pkcs1_pem(LineEnding::LF).unwrap();
            let loaded = rsa_private_key_from_pem(&pem).unwrap();
            assert_eq!(&loaded, private_key());
        }

        #[test]
        fn test_public_key_spki_and_pkcs1() {
            let public = RsaPublicKey::from(private_key());

            let spki = public.to_public_key_pem(LineEnding::LF).unwrap();
            assert_eq!(rsa_public_key_from_pem(&spki).unwrap(), public);

            let pkcs1 = public.to_pkcs1_pem(LineEnding::LF).unwrap();
            assert_eq!(rsa_public_key_from_pem(&pkcs1).unwrap(), public);
        }

        #[test]
        fn test_invalid_pem() {
            assert!(matches!(
                rsa_private_key_from_pem("-----BEGIN NOTHING-----"),
                Err(Error::KeyInvalid(_))
            ));
            assert!(matches!(
                rsa_public_key_from_pem(""),
                Err(Error::KeyInvalid(_))
            ));
        }
    }
}
