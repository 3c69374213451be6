mod registry;
mod traits;

pub mod hmac;

#[cfg(feature = "rsa")]
pub mod rsa;

pub use registry::AlgorithmRegistry;
pub use traits::SigningAlgorithm;

#[cfg(feature = "rsa")]
pub use traits::{DecryptionAlgorithm, EncryptionAlgorithm};

pub use self::hmac::{sign_hs256, sign_hs384, sign_hs512};

#[cfg(feature = "rsa")]
pub use self::rsa::{
    decrypt_rs256, decrypt_rs384, decrypt_rs512, encrypt_rs256, encrypt_rs384, encrypt_rs512,
};

use crate::error::{Error, Result};

/// Built-in algorithm identifier
///
/// The header's `alg` field stays a plain string so custom algorithms can be
/// registered under any name. This enum names the identifiers that ship with
/// the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmId {
    /// HMAC with SHA-256
    HS256,

    /// HMAC with SHA-384
    HS384,

    /// HMAC with SHA-512
    HS512,

    /// RSA-OAEP with SHA-256
    #[cfg(feature = "rsa")]
    RS256,

    /// RSA-OAEP with SHA-384
    #[cfg(feature = "rsa")]
    RS384,

    /// RSA-OAEP with SHA-512
    #[cfg(feature = "rsa")]
    RS512,
}

impl AlgorithmId {
    /// Parse a built-in algorithm identifier
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self> {
        match s {
            "HS256" => Ok(AlgorithmId::HS256),
            "HS384" => Ok(AlgorithmId::HS384),
            "HS512" => Ok(AlgorithmId::HS512),

            #[cfg(feature = "rsa")]
            "RS256" => Ok(AlgorithmId::RS256),
            #[cfg(feature = "rsa")]
            "RS384" => Ok(AlgorithmId::RS384),
            #[cfg(feature = "rsa")]
            "RS512" => Ok(AlgorithmId::RS512),

            _ => Err(Error::AlgorithmNotImplemented(s.to_string())),
        }
    }

    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            AlgorithmId::HS256 => "HS256",
            AlgorithmId::HS384 => "HS384",
            AlgorithmId::HS512 => "HS512",

            #[cfg(feature = "rsa")]
            AlgorithmId::RS256 => "RS256",
            #[cfg(feature = "rsa")]
            AlgorithmId::RS384 => "RS384",
            #[cfg(feature = "rsa")]
            AlgorithmId::RS512 => "RS512",
        }
    }

    /// Check if algorithm is HMAC-based (symmetric)
    pub fn is_symmetric(&self) -> bool {
        matches!(
            self,
            AlgorithmId::HS256 | AlgorithmId::HS384 | AlgorithmId::HS512
        )
    }

    /// Check if algorithm is RSA-OAEP based (asymmetric)
    pub fn is_asymmetric(&self) -> bool {
        !self.is_symmetric()
    }
}

impl std::fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<AlgorithmId> for String {
    fn from(id: AlgorithmId) -> Self {
        id.as_str().to_string()
    }
}
