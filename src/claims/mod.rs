mod timestamp;
mod validator;

pub use timestamp::Timestamp;
pub use validator::ClaimsValidator;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::Result;

/// Registered claim names from [RFC 7519 Section 4.1](https://datatracker.ietf.org/doc/html/rfc7519#section-4.1)
///
/// Custom claims never use these keys: they are skipped when encoding and
/// routed to the fixed fields when decoding.
pub const RESERVED_CLAIMS: [&str; 7] = ["iss", "sub", "aud", "exp", "nbf", "iat", "jti"];

/// Check if a claim name is one of the registered claims
pub fn is_reserved_claim(name: &str) -> bool {
    RESERVED_CLAIMS.contains(&name)
}

/// JWT payload: registered claims plus a bag of custom claims
///
/// The JSON form is a single flat object. Registered claims come first in
/// the order `iss, sub, aud, exp, nbf, iat, jti` and are omitted when empty;
/// custom claims follow as top-level members.
///
/// # Examples
///
/// ```ignore
/// use jwtseal::*;
///
/// let mut payload = Payload::default();
/// payload.issuer = "auth.example.com".into();
/// payload.set_custom("role", "admin");
///
/// assert_eq!(
///     payload.to_json()?,
///     r#"{"iss":"auth.example.com","role":"admin"}"#
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Payload {
    /// Issuer (iss) - identifies the principal that issued the JWT
    pub issuer: String,

    /// Subject (sub) - identifies the principal that is the subject of the JWT
    pub subject: String,

    /// Audience (aud) - identifies the recipient that the JWT is intended for
    pub audience: String,

    /// Expiration Time (exp) - the token is invalid from this instant on
    pub expiration_time: Option<Timestamp>,

    /// Not Before (nbf) - the token is invalid before this instant
    pub not_before: Option<Timestamp>,

    /// Issued At (iat) - the time at which the JWT was issued
    pub issued_at: Option<Timestamp>,

    /// JWT ID (jti) - provides a unique identifier for the JWT
    pub jwt_id: String,

    /// Custom claims, merged into the top-level JSON object
    pub custom: Map<String, Value>,
}

/// Fixed-shape view of a payload, used for the first decoding pass
#[derive(Deserialize)]
struct RegisteredClaims {
    #[serde(rename = "iss", default)]
    issuer: Option<String>,
    #[serde(rename = "sub", default)]
    subject: Option<String>,
    #[serde(rename = "aud", default)]
    audience: Option<String>,
    #[serde(rename = "exp", default)]
    expiration_time: Option<Timestamp>,
    #[serde(rename = "nbf", default)]
    not_before: Option<Timestamp>,
    #[serde(rename = "iat", default)]
    issued_at: Option<Timestamp>,
    #[serde(rename = "jti", default)]
    jwt_id: Option<String>,
}

impl Payload {
    /// Set a custom claim, replacing any previous value under `key`
    ///
    /// Reserved claim names are accepted here but never serialized; use the
    /// registered fields for those.
    pub fn set_custom(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.custom.insert(key.into(), value.into());
        self
    }

    /// Get a custom claim
    pub fn custom_claim(&self, key: &str) -> Option<&Value> {
        self.custom.get(key)
    }

    /// Remove a custom claim, returning its value
    pub fn remove_custom(&mut self, key: &str) -> Option<Value> {
        self.custom.remove(key)
    }

    /// Serialize the payload to its flat JSON form
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a payload from JSON
    ///
    /// The input is read twice: once into the registered claims, once into a
    /// generic map whose non-reserved keys become custom claims.
    pub fn from_json(raw: &[u8]) -> Result<Self> {
        let registered: RegisteredClaims = serde_json::from_slice(raw)?;
        let all: Map<String, Value> = serde_json::from_slice(raw)?;

        let custom = all
            .into_iter()
            .filter(|(key, _)| !is_reserved_claim(key))
            .collect();

        Ok(Self {
            issuer: registered.issuer.unwrap_or_default(),
            subject: registered.subject.unwrap_or_default(),
            audience: registered.audience.unwrap_or_default(),
            expiration_time: registered.expiration_time,
            not_before: registered.not_before,
            issued_at: registered.issued_at,
            jwt_id: registered.jwt_id.unwrap_or_default(),
            custom,
        })
    }

    /// Check if the payload serializes identically to an empty payload
    pub fn is_empty(&self) -> bool {
        match (self.to_json(), Payload::default().to_json()) {
            (Ok(this), Ok(empty)) => this == empty,
            _ => false,
        }
    }
}

impl Serialize for Payload {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;

        let strings = [
            ("iss", &self.issuer),
            ("sub", &self.subject),
            ("aud", &self.audience),
        ];
        for (name, value) in strings {
            if !value.is_empty() {
                map.serialize_entry(name, value)?;
            }
        }

        let times = [
            ("exp", &self.expiration_time),
            ("nbf", &self.not_before),
            ("iat", &self.issued_at),
        ];
        for (name, value) in times {
            if let Some(timestamp) = value {
                map.serialize_entry(name, timestamp)?;
            }
        }

        if !self.jwt_id.is_empty() {
            map.serialize_entry("jti", &self.jwt_id)?;
        }

        for (key, value) in &self.custom {
            if is_reserved_claim(key) {
                continue;
            }
            map.serialize_entry(key, value)?;
        }

        map.end()
    }
}
