//! Error types for JWT processing
//!
//! Every failing operation returns one of these variants. Callers are
//! expected to branch on the variant (for example to tell an invalid secret
//! apart from a token that is not valid yet), so the enum is `Clone` and
//! `PartialEq`.

use thiserror::Error;

/// jwtseal errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // ============================================================================
    // Token Errors
    // ============================================================================
    #[error("Signature algorithm '{0}' is not implemented")]
    AlgorithmNotImplemented(String),

    #[error("Token is not signed")]
    TokenNotSigned,

    #[error("Invalid secret: signature does not match")]
    InvalidSecret,

    #[error("Token is outside of its validity period")]
    TokenPeriodInvalid,

    #[error("Invalid JWT format: expected three parts separated by '.'")]
    BadToken,

    // ============================================================================
    // Format Errors
    // ============================================================================
    #[error("Base64URL decoding failed: {0}")]
    FormatInvalidBase64(String),

    #[error("JSON processing failed: {0}")]
    FormatInvalidJson(String),

    // ============================================================================
    // Crypto Errors
    // ============================================================================
    /// RSA-OAEP rejected the ciphertext, usually because of a wrong key or label
    #[error("Decryption failed")]
    DecryptionFailed,

    #[error("Cryptographic operation failed: {0}")]
    Crypto(String),

    #[error("Invalid key: {0}")]
    KeyInvalid(String),

    // ============================================================================
    // Timestamp Errors
    // ============================================================================
    #[error("Timestamp out of range: {0}")]
    TimestampOutOfRange(i64),

    #[error("Integer overflow in timestamp arithmetic")]
    TimestampOverflow,
}

/// Result type alias for jwtseal operations
pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::FormatInvalidJson(err.to_string())
    }
}
