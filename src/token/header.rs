use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Token type written by [`Header::new`]
pub const TYPE_JWT: &str = "JWT";

/// JWT header structure
///
/// Serializes as `{"alg":..,"cty":..,"typ":..}`. `cty` is omitted when
/// empty; missing members decode as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Algorithm used for signing, looked up in the token's registry
    #[serde(rename = "alg", default)]
    pub algorithm: String,

    /// Content type (only set for nested tokens)
    #[serde(rename = "cty", default, skip_serializing_if = "String::is_empty")]
    pub content_type: String,

    /// Token type (typically "JWT")
    #[serde(rename = "typ", default)]
    pub token_type: String,
}

impl Header {
    /// Create a header for `algorithm` with token type `JWT`
    pub fn new(algorithm: impl Into<String>) -> Self {
        Self {
            algorithm: algorithm.into(),
            content_type: String::new(),
            token_type: TYPE_JWT.to_string(),
        }
    }

    /// Serialize the header to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a header from JSON
    pub fn from_json(raw: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(raw)?)
    }

    /// Check if all fields are blank
    pub fn is_empty(&self) -> bool {
        self.algorithm.is_empty() && self.content_type.is_empty() && self.token_type.is_empty()
    }
}
