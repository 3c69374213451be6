use crate::algorithm::SigningAlgorithm;
use crate::error::{Error, Result};
use crate::utils::base64url;

use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha384, Sha512};

/// HS256 algorithm (HMAC with SHA-256)
pub struct HS256;

/// HS384 algorithm (HMAC with SHA-384)
pub struct HS384;

/// HS512 algorithm (HMAC with SHA-512)
pub struct HS512;

impl SigningAlgorithm for HS256 {
    fn sign(&self, message: &str, secret: &[u8]) -> Result<String> {
        sign_hs256(message, secret)
    }
}

impl SigningAlgorithm for HS384 {
    fn sign(&self, message: &str, secret: &[u8]) -> Result<String> {
        sign_hs384(message, secret)
    }
}

impl SigningAlgorithm for HS512 {
    fn sign(&self, message: &str, secret: &[u8]) -> Result<String> {
        sign_hs512(message, secret)
    }
}

/// Sign with HMAC-SHA256, returning the Base64URL digest
pub fn sign_hs256(message: &str, secret: &[u8]) -> Result<String> {
    let mut mac = Hmac::<Sha256>::new_from_slice(secret)
        .map_err(|e| Error::Crypto(format!("HMAC-SHA256 key rejected: {e}")))?;
    mac.update(message.as_bytes());
    Ok(base64url::encode_bytes(&mac.finalize().into_bytes()))
}

/// Sign with HMAC-SHA384, returning the Base64URL digest
pub fn sign_hs384(message: &str, secret: &[u8]) -> Result<String> {
    let mut mac = Hmac::<Sha384>::new_from_slice(secret)
        .map_err(|e| Error::Crypto(format!("HMAC-SHA384 key rejected: {e}")))?;
    mac.update(message.as_bytes());
    Ok(base64url::encode_bytes(&mac.finalize().into_bytes()))
}

/// Sign with HMAC-SHA512, returning the Base64URL digest
pub fn sign_hs512(message: &str, secret: &[u8]) -> Result<String> {
    let mut mac = Hmac::<Sha512>::new_from_slice(secret)
        .map_err(|e| Error::Crypto(format!("HMAC-SHA512 key rejected: {e}")))?;
    mac.update(message.as_bytes());
    Ok(base64url::encode_bytes(&mac.finalize().into_bytes()))
}
