//! The `Token` type: encoding, signing, loading and validation
//!
//! A token is a header, a payload and a signature. The signing input is
//! `base64url(header JSON) + "." + base64url(payload JSON)`; the wire form
//! appends `"." + signature`.
//!
//! Validation always runs the same checks in the same order:
//!
//! ```text
//! data()              signing input can be serialized
//!     │
//! algorithm lookup    AlgorithmNotImplemented
//!     │
//! is_signed()         TokenNotSigned
//!     │
//! validity window     TokenPeriodInvalid   (exp exclusive, nbf inclusive)
//!     │
//! signature compare   InvalidSecret        (constant time)
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use constant_time_eq::constant_time_eq;

use crate::algorithm::{AlgorithmId, AlgorithmRegistry};
use crate::claims::{ClaimsValidator, Payload, Timestamp};
use crate::error::{Error, Result};
use crate::token::{Header, TokenBuilder};
use crate::utils::base64url;

#[cfg(feature = "rsa")]
use rsa::{RsaPrivateKey, RsaPublicKey};

/// A JSON Web Token
///
/// Fields are public and can be changed freely; the signature is only
/// computed on [`sign`](Token::sign) and checked on
/// [`validate`](Token::validate), so a token edited after signing fails
/// validation with [`Error::InvalidSecret`].
///
/// # Examples
///
/// ```ignore
/// use jwtseal::*;
///
/// let mut token = Token::new();
/// token.payload.subject = "user-42".into();
/// token.payload.set_custom("role", "admin");
///
/// let jwt = token.sign_parse("secret")?;
///
/// let loaded = Token::load(&jwt)?;
/// loaded.validate("secret")?;
/// assert_eq!(loaded.payload.subject, "user-42");
/// ```
#[derive(Clone)]
pub struct Token {
    /// JOSE header
    pub header: Header,

    /// Claims
    pub payload: Payload,

    /// Base64URL signature segment, empty until signed
    pub signature: String,

    registry: Arc<AlgorithmRegistry>,
}

impl Token {
    /// Create an unsigned HS256 token with an empty payload
    pub fn new() -> Self {
        Self::from_parts(Header::new(AlgorithmId::HS256), Payload::default())
    }

    /// Create an unsigned token from a header and a payload
    pub fn from_parts(header: Header, payload: Payload) -> Self {
        Self {
            header,
            payload,
            signature: String::new(),
            registry: AlgorithmRegistry::shared(),
        }
    }

    /// Start a [`TokenBuilder`]
    pub fn builder() -> TokenBuilder {
        TokenBuilder::new()
    }

    /// Use `registry` for algorithm lookups instead of the shared standard one
    pub fn with_registry(mut self, registry: Arc<AlgorithmRegistry>) -> Self {
        self.registry = registry;
        self
    }

    /// Registry used for algorithm lookups
    pub fn registry(&self) -> &Arc<AlgorithmRegistry> {
        &self.registry
    }

    /// Load a token from its `header.payload.signature` form
    ///
    /// Loading only decodes; nothing is verified until
    /// [`validate`](Token::validate) is called.
    pub fn load(token: &str) -> Result<Self> {
        Self::load_with_registry(token, AlgorithmRegistry::shared())
    }

    /// Load a token that will use `registry` for algorithm lookups
    pub fn load_with_registry(token: &str, registry: Arc<AlgorithmRegistry>) -> Result<Self> {
        let parts: Vec<&str> = token.split('.').collect();
        if parts.len() != 3 {
            tracing::debug!(segments = parts.len(), "rejecting token with wrong segment count");
            return Err(Error::BadToken);
        }

        let header = Header::from_json(&base64url::decode_bytes(parts[0])?)?;
        let payload = Payload::from_json(&base64url::decode_bytes(parts[1])?)?;

        tracing::trace!(algorithm = %header.algorithm, "loaded token");

        Ok(Self {
            header,
            payload,
            signature: parts[2].to_string(),
            registry,
        })
    }

    /// Signing input: `base64url(header) + "." + base64url(payload)`
    pub fn data(&self) -> Result<String> {
        let header = base64url::encode(&self.header.to_json()?);
        let payload = base64url::encode(&self.payload.to_json()?);
        Ok(format!("{header}.{payload}"))
    }

    /// Sign with a shared secret using the header's symmetric algorithm
    ///
    /// Replaces any previous signature. On error the token is unchanged.
    /// The validity window is not checked.
    pub fn sign(&mut self, secret: impl AsRef<[u8]>) -> Result<()> {
        let data = self.data()?;
        let signer = self.registry.signer(&self.header.algorithm)?;
        let signature = signer.sign(&data, secret.as_ref())?;

        tracing::debug!(algorithm = %self.header.algorithm, "signed token");
        self.signature = signature;
        Ok(())
    }

    /// Sign by encrypting the signing input with the verifier's public key
    ///
    /// This is RSA-OAEP encryption, not an RFC 7518 RSA signature; only
    /// [`validate_with_key`](Token::validate_with_key) accepts the result.
    #[cfg(feature = "rsa")]
    pub fn sign_with_key(&mut self, label: &str, key: &RsaPublicKey) -> Result<()> {
        let data = self.data()?;
        let encrypter = self.registry.encrypter(&self.header.algorithm)?;
        let signature = encrypter.encrypt(&data, label, key)?;

        tracing::debug!(algorithm = %self.header.algorithm, "signed token with public key");
        self.signature = signature;
        Ok(())
    }

    /// Wire form `header.payload.signature`
    pub fn parse(&self) -> Result<String> {
        if !self.is_signed() {
            return Err(Error::TokenNotSigned);
        }
        Ok(format!("{}.{}", self.data()?, self.signature))
    }

    /// [`sign`](Token::sign), then [`parse`](Token::parse)
    pub fn sign_parse(&mut self, secret: impl AsRef<[u8]>) -> Result<String> {
        self.sign(secret)?;
        self.parse()
    }

    /// [`sign_with_key`](Token::sign_with_key), then [`parse`](Token::parse)
    #[cfg(feature = "rsa")]
    pub fn sign_parse_with_key(&mut self, label: &str, key: &RsaPublicKey) -> Result<String> {
        self.sign_with_key(label, key)?;
        self.parse()
    }

    /// Validate the signature and validity window against the current time
    pub fn validate(&self, secret: impl AsRef<[u8]>) -> Result<()> {
        self.validate_at(secret, &Timestamp::now())
    }

    /// Validate the signature and validity window against `now`
    pub fn validate_at(&self, secret: impl AsRef<[u8]>, now: &Timestamp) -> Result<()> {
        let data = self.data()?;
        let signer = self.registry.signer(&self.header.algorithm)?;
        self.check_signed()?;
        ClaimsValidator::validate(&self.payload, now)?;

        let expected = signer.sign(&data, secret.as_ref())?;
        if !constant_time_eq(expected.as_bytes(), self.signature.as_bytes()) {
            tracing::debug!(algorithm = %self.header.algorithm, "signature mismatch");
            return Err(Error::InvalidSecret);
        }

        Ok(())
    }

    /// Validate by decrypting the signature with the issuer's private key
    #[cfg(feature = "rsa")]
    pub fn validate_with_key(&self, label: &str, key: &RsaPrivateKey) -> Result<()> {
        self.validate_with_key_at(label, key, &Timestamp::now())
    }

    /// [`validate_with_key`](Token::validate_with_key) against `now`
    #[cfg(feature = "rsa")]
    pub fn validate_with_key_at(
        &self,
        label: &str,
        key: &RsaPrivateKey,
        now: &Timestamp,
    ) -> Result<()> {
        let data = self.data()?;
        let decrypter = self.registry.decrypter(&self.header.algorithm)?;
        self.check_signed()?;
        ClaimsValidator::validate(&self.payload, now)?;

        let decrypted = decrypter
            .decrypt(&self.signature, label, key)
            .map_err(|e| match e {
                Error::DecryptionFailed => Error::InvalidSecret,
                other => other,
            })?;

        if !constant_time_eq(decrypted.as_bytes(), data.as_bytes()) {
            tracing::debug!(algorithm = %self.header.algorithm, "decrypted signature mismatch");
            return Err(Error::InvalidSecret);
        }

        Ok(())
    }

    /// Check if the token is outside its validity window right now
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(&Timestamp::now())
    }

    /// Check if the token is outside its validity window at `now`
    pub fn is_expired_at(&self, now: &Timestamp) -> bool {
        ClaimsValidator::is_outside_window(&self.payload, now)
    }

    /// Check if a signature is present
    pub fn is_signed(&self) -> bool {
        !self.signature.is_empty()
    }

    /// Check if both header and payload are blank
    pub fn is_empty(&self) -> bool {
        self.header.is_empty() && self.payload.is_empty()
    }

    fn check_signed(&self) -> Result<()> {
        if self.is_signed() {
            Ok(())
        } else {
            tracing::debug!("token is not signed");
            Err(Error::TokenNotSigned)
        }
    }
}

impl Default for Token {
    /// A blank token: empty header, empty payload, no signature
    fn default() -> Self {
        Self::from_parts(Header::default(), Payload::default())
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token")
            .field("header", &self.header)
            .field("payload", &self.payload)
            .field("signature", &self.signature)
            .finish_non_exhaustive()
    }
}

/// Tokens compare by header, payload and signature; the registry is ignored
impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.header == other.header
            && self.payload == other.payload
            && self.signature == other.signature
    }
}

/// Writes the wire form, or nothing when the token cannot be parsed
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.parse() {
            Ok(token) => f.write_str(&token),
            Err(_) => Ok(()),
        }
    }
}

impl FromStr for Token {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::load(s)
    }
}
