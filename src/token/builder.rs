use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;

use crate::algorithm::AlgorithmRegistry;
use crate::claims::Timestamp;
use crate::error::{Error, Result};
use crate::token::Token;

#[cfg(feature = "rsa")]
use rsa::RsaPublicKey;

/// Fluent construction of a [`Token`]
///
/// Starts from [`Token::new`] (HS256, empty payload). Errors from relative
/// times such as [`expires_in`](TokenBuilder::expires_in) are kept and
/// returned by [`build`](TokenBuilder::build) or the signing methods.
///
/// ```ignore
/// use jwtseal::*;
/// use std::time::Duration;
///
/// let jwt = TokenBuilder::new()
///     .issuer("auth.example.com")
///     .subject("user-42")
///     .issued_now()
///     .expires_in(Duration::from_secs(3600))
///     .custom("role", "admin")
///     .sign("secret")?;
/// ```
#[derive(Debug, Clone)]
pub struct TokenBuilder {
    token: Token,
    error: Option<Error>,
}

impl TokenBuilder {
    /// Create a builder for an HS256 token
    pub fn new() -> Self {
        Self {
            token: Token::new(),
            error: None,
        }
    }

    /// Set the issuer (iss)
    pub fn issuer(mut self, issuer: impl Into<String>) -> Self {
        self.token.payload.issuer = issuer.into();
        self
    }

    /// Set the subject (sub)
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.token.payload.subject = subject.into();
        self
    }

    /// Set the audience (aud)
    pub fn audience(mut self, audience: impl Into<String>) -> Self {
        self.token.payload.audience = audience.into();
        self
    }

    /// Set the expiration time (exp)
    pub fn expiration_time(mut self, at: Timestamp) -> Self {
        self.token.payload.expiration_time = Some(at);
        self
    }

    /// Expire `duration` from now
    pub fn expires_in(mut self, duration: Duration) -> Self {
        match Timestamp::now().add(duration) {
            Ok(at) => self.token.payload.expiration_time = Some(at),
            Err(e) => self.keep_error(e),
        }
        self
    }

    /// Set the not-before time (nbf)
    pub fn not_before(mut self, at: Timestamp) -> Self {
        self.token.payload.not_before = Some(at);
        self
    }

    /// Set the issued-at time (iat)
    pub fn issued_at(mut self, at: Timestamp) -> Self {
        self.token.payload.issued_at = Some(at);
        self
    }

    /// Set the issued-at time (iat) to now
    pub fn issued_now(self) -> Self {
        self.issued_at(Timestamp::now())
    }

    /// Set the JWT ID (jti)
    pub fn jwt_id(mut self, jwt_id: impl Into<String>) -> Self {
        self.token.payload.jwt_id = jwt_id.into();
        self
    }

    /// Add a custom claim
    pub fn custom(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.token.payload.set_custom(key, value);
        self
    }

    /// Set the header's algorithm (alg)
    pub fn algorithm(mut self, algorithm: impl Into<String>) -> Self {
        self.token.header.algorithm = algorithm.into();
        self
    }

    /// Set the header's content type (cty)
    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.token.header.content_type = content_type.into();
        self
    }

    /// Use a custom algorithm registry
    pub fn registry(mut self, registry: Arc<AlgorithmRegistry>) -> Self {
        self.token = self.token.with_registry(registry);
        self
    }

    /// Finish without signing
    pub fn build(self) -> Result<Token> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.token),
        }
    }

    /// Finish, sign with a shared secret and return the wire form
    pub fn sign(self, secret: impl AsRef<[u8]>) -> Result<String> {
        self.build()?.sign_parse(secret)
    }

    /// Finish, sign with a public key and return the wire form
    #[cfg(feature = "rsa")]
    pub fn sign_with_key(self, label: &str, key: &RsaPublicKey) -> Result<String> {
        self.build()?.sign_parse_with_key(label, key)
    }

    // First error wins
    fn keep_error(&mut self, error: Error) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }
}

impl Default for TokenBuilder {
    fn default() -> Self {
        Self::new()
    }
}
