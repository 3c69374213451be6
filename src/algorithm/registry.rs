use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, LazyLock};

use crate::algorithm::{AlgorithmId, SigningAlgorithm, hmac};
use crate::error::{Error, Result};

#[cfg(feature = "rsa")]
use crate::algorithm::{DecryptionAlgorithm, EncryptionAlgorithm, rsa};

static STANDARD: LazyLock<Arc<AlgorithmRegistry>> =
    LazyLock::new(|| Arc::new(AlgorithmRegistry::standard()));

/// Mapping from algorithm identifier to implementation
///
/// A registry holds three independent mappings: signers (symmetric),
/// encrypters (asymmetric signing) and decrypters (asymmetric verification).
/// Tokens look up the identifier from their header's `alg` field; a missing
/// entry is [`Error::AlgorithmNotImplemented`].
///
/// Registries are plain values. Build one at startup, wrap it in an `Arc`
/// and hand it to tokens with [`Token::with_registry`](crate::Token::with_registry).
/// To change a shared registry, clone it, modify the clone and share the new
/// `Arc`.
///
/// ```ignore
/// use jwtseal::*;
///
/// let registry = AlgorithmRegistry::standard()
///     .with_signer("HS256-LEGACY", |message: &str, secret: &[u8]| {
///         sign_hs256(message, secret)
///     });
/// ```
#[derive(Clone)]
pub struct AlgorithmRegistry {
    signers: HashMap<String, Arc<dyn SigningAlgorithm>>,
    #[cfg(feature = "rsa")]
    encrypters: HashMap<String, Arc<dyn EncryptionAlgorithm>>,
    #[cfg(feature = "rsa")]
    decrypters: HashMap<String, Arc<dyn DecryptionAlgorithm>>,
}

impl AlgorithmRegistry {
    /// Registry without any algorithm
    pub fn empty() -> Self {
        Self {
            signers: HashMap::new(),
            #[cfg(feature = "rsa")]
            encrypters: HashMap::new(),
            #[cfg(feature = "rsa")]
            decrypters: HashMap::new(),
        }
    }

    /// Registry with all built-in algorithms
    ///
    /// HS256, HS384 and HS512 are signers. With the `rsa` feature, RS256,
    /// RS384 and RS512 are both encrypters and decrypters.
    pub fn standard() -> Self {
        let mut registry = Self::empty();

        registry
            .register_signer(AlgorithmId::HS256, hmac::HS256)
            .register_signer(AlgorithmId::HS384, hmac::HS384)
            .register_signer(AlgorithmId::HS512, hmac::HS512);

        #[cfg(feature = "rsa")]
        {
            registry
                .register_encrypter(AlgorithmId::RS256, rsa::RS256)
                .register_encrypter(AlgorithmId::RS384, rsa::RS384)
                .register_encrypter(AlgorithmId::RS512, rsa::RS512)
                .register_decrypter(AlgorithmId::RS256, rsa::RS256)
                .register_decrypter(AlgorithmId::RS384, rsa::RS384)
                .register_decrypter(AlgorithmId::RS512, rsa::RS512);
        }

        registry
    }

    /// Process-wide standard registry, shared by default-constructed tokens
    pub fn shared() -> Arc<Self> {
        Arc::clone(&STANDARD)
    }

    /// Register a signing algorithm, replacing any previous entry for `id`
    pub fn register_signer<A>(&mut self, id: impl Into<String>, algorithm: A) -> &mut Self
    where
        A: SigningAlgorithm + 'static,
    {
        self.signers.insert(id.into(), Arc::new(algorithm));
        self
    }

    /// Register an encryption algorithm, replacing any previous entry for `id`
    #[cfg(feature = "rsa")]
    pub fn register_encrypter<A>(&mut self, id: impl Into<String>, algorithm: A) -> &mut Self
    where
        A: EncryptionAlgorithm + 'static,
    {
        self.encrypters.insert(id.into(), Arc::new(algorithm));
        self
    }

    /// Register a decryption algorithm, replacing any previous entry for `id`
    #[cfg(feature = "rsa")]
    pub fn register_decrypter<A>(&mut self, id: impl Into<String>, algorithm: A) -> &mut Self
    where
        A: DecryptionAlgorithm + 'static,
    {
        self.decrypters.insert(id.into(), Arc::new(algorithm));
        self
    }

    /// By-value form of [`register_signer`](Self::register_signer)
    pub fn with_signer<A>(mut self, id: impl Into<String>, algorithm: A) -> Self
    where
        A: SigningAlgorithm + 'static,
    {
        self.register_signer(id, algorithm);
        self
    }

    /// By-value form of [`register_encrypter`](Self::register_encrypter)
    #[cfg(feature = "rsa")]
    pub fn with_encrypter<A>(mut self, id: impl Into<String>, algorithm: A) -> Self
    where
        A: EncryptionAlgorithm + 'static,
    {
        self.register_encrypter(id, algorithm);
        self
    }

    /// By-value form of [`register_decrypter`](Self::register_decrypter)
    #[cfg(feature = "rsa")]
    pub fn with_decrypter<A>(mut self, id: impl Into<String>, algorithm: A) -> Self
    where
        A: DecryptionAlgorithm + 'static,
    {
        self.register_decrypter(id, algorithm);
        self
    }

    /// Remove `id` from every mapping
    pub fn remove(&mut self, id: &str) -> &mut Self {
        self.signers.remove(id);
        #[cfg(feature = "rsa")]
        {
            self.encrypters.remove(id);
            self.decrypters.remove(id);
        }
        self
    }

    /// Look up a signing algorithm
    pub fn signer(&self, id: &str) -> Result<&dyn SigningAlgorithm> {
        lookup(&self.signers, id, "signer")
    }

    /// Look up an encryption algorithm
    #[cfg(feature = "rsa")]
    pub fn encrypter(&self, id: &str) -> Result<&dyn EncryptionAlgorithm> {
        lookup(&self.encrypters, id, "encrypter")
    }

    /// Look up a decryption algorithm
    #[cfg(feature = "rsa")]
    pub fn decrypter(&self, id: &str) -> Result<&dyn DecryptionAlgorithm> {
        lookup(&self.decrypters, id, "decrypter")
    }

    /// Identifiers registered as signers, sorted
    pub fn signer_ids(&self) -> Vec<&str> {
        sorted_ids(&self.signers)
    }

    /// Identifiers registered as encrypters, sorted
    #[cfg(feature = "rsa")]
    pub fn encrypter_ids(&self) -> Vec<&str> {
        sorted_ids(&self.encrypters)
    }

    /// Identifiers registered as decrypters, sorted
    #[cfg(feature = "rsa")]
    pub fn decrypter_ids(&self) -> Vec<&str> {
        sorted_ids(&self.decrypters)
    }
}

fn lookup<'a, T: ?Sized>(
    mapping: &'a HashMap<String, Arc<T>>,
    id: &str,
    kind: &str,
) -> Result<&'a T> {
    match mapping.get(id) {
        Some(algorithm) => Ok(&**algorithm),
        None => {
            tracing::debug!(algorithm = id, kind, "algorithm not registered");
            Err(Error::AlgorithmNotImplemented(id.to_string()))
        }
    }
}

fn sorted_ids<T: ?Sized>(mapping: &HashMap<String, Arc<T>>) -> Vec<&str> {
    let mut ids: Vec<&str> = mapping.keys().map(String::as_str).collect();
    ids.sort_unstable();
    ids
}

impl Default for AlgorithmRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for AlgorithmRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("AlgorithmRegistry");
        debug.field("signers", &self.signer_ids());
        #[cfg(feature = "rsa")]
        {
            debug.field("encrypters", &self.encrypter_ids());
            debug.field("decrypters", &self.decrypter_ids());
        }
        debug.finish()
    }
}
