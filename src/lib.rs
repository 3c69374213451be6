//! # jwtseal - JSON Web Token encoding, signing and validation
//!
//! > Build, sign, load and validate JWTs with a pluggable algorithm registry.
//!
//! **jwtseal** covers the whole token life cycle: a [`Token`] holds a [`Header`], a
//! [`Payload`] and a signature. Signing serializes header and payload to JSON,
//! Base64URL-encodes both and hands the signing input to the algorithm named by the
//! header's `alg` field. Validation recomputes the same input, checks the validity
//! window and compares signatures in constant time.
//!
//! ## Quick Start
//!
//! ```ignore
//! use jwtseal::*;
//! use std::time::Duration;
//!
//! let jwt = TokenBuilder::new()
//!     .issuer("auth.example.com")
//!     .subject("user-42")
//!     .expires_in(Duration::from_secs(3600))
//!     .custom("role", "admin")
//!     .sign("secret")?;
//!
//! let token = Token::load(&jwt)?;
//! token.validate("secret")?;
//!
//! println!("Subject: {}", token.payload.subject);
//! ```
//!
//! ## Validation Flow
//!
//! ```text
//! Token::load("header.payload.signature")
//!     │ decode header and payload, keep the signature verbatim
//!     ▼
//! Token (unverified)
//!     │ .validate(secret) / .validate_with_key(label, key)
//!     │   1. algorithm lookup   -> AlgorithmNotImplemented
//!     │   2. signature present  -> TokenNotSigned
//!     │   3. nbf <= now < exp   -> TokenPeriodInvalid
//!     │   4. signature matches  -> InvalidSecret
//!     ▼
//! Ok(())
//! ```
//!
//! Because the window is checked before the signature, an expired token
//! reports [`Error::TokenPeriodInvalid`] even when the secret is wrong.
//!
//! ## Algorithm Support
//!
//! Algorithms live in an [`AlgorithmRegistry`] with three independent mappings:
//!
//! - **signers** (always enabled): HS256, HS384, HS512
//! - **encrypters / decrypters** (with `rsa` feature): RS256, RS384, RS512
//!
//! Tokens use the process-wide standard registry unless one is injected with
//! [`Token::with_registry`] or [`Token::load_with_registry`]. Custom identifiers
//! can be registered as closures:
//!
//! ```ignore
//! use std::sync::Arc;
//!
//! let registry = Arc::new(
//!     AlgorithmRegistry::standard()
//!         .with_signer("HS256-LEGACY", |m: &str, s: &[u8]| sign_hs256(m, s)),
//! );
//! let token = Token::load_with_registry(&jwt, registry)?;
//! ```
//!
//! ## RS256/384/512 Are Not RSA Signatures
//!
//! The RSA identifiers encrypt the signing input with RSA-OAEP under the
//! verifier's **public** key, and validation decrypts it with the **private**
//! key. Only the private key holder can validate; anyone with the public key
//! can issue. Standard JOSE libraries will not accept these tokens.
//!
//! ## Features
//!
//! - **HMAC** (always enabled): HS256, HS384, HS512
//! - **`rsa`** (default): RSA-OAEP algorithms, `sign_with_key`,
//!   `validate_with_key` and PEM key loading
//!
//! ## Logging
//!
//! Signing and validation decisions are reported through [`tracing`] at
//! `debug`/`trace` level. Secrets and signatures are never logged. Install
//! any subscriber to see them.
//!
//! ## References
//!
//! - [RFC 7515](https://datatracker.ietf.org/doc/html/rfc7515) - JSON Web Signature (JWS)
//! - [RFC 7519](https://datatracker.ietf.org/doc/html/rfc7519) - JSON Web Token (JWT)
//! - [RFC 8017](https://datatracker.ietf.org/doc/html/rfc8017) - RSAES-OAEP

// Core modules
pub mod error;
pub mod utils;

// Algorithm system
pub mod algorithm;
pub mod keys;

// Claims
pub mod claims;

// Token types
pub mod token;

// ============================================================================
// PUBLIC API
// ============================================================================

pub use token::{Header, TYPE_JWT, Token, TokenBuilder};

pub use claims::{Payload, Timestamp};

pub use algorithm::{AlgorithmId, AlgorithmRegistry, SigningAlgorithm};
pub use algorithm::{sign_hs256, sign_hs384, sign_hs512};
pub use error::{Error, Result};
pub use keys::SymmetricKey;

#[cfg(feature = "rsa")]
pub use algorithm::{DecryptionAlgorithm, EncryptionAlgorithm};
#[cfg(feature = "rsa")]
pub use algorithm::{
    decrypt_rs256, decrypt_rs384, decrypt_rs512, encrypt_rs256, encrypt_rs384, encrypt_rs512,
};
#[cfg(feature = "rsa")]
pub use keys::{RsaPrivateKey, RsaPublicKey, rsa_private_key_from_pem, rsa_public_key_from_pem};
