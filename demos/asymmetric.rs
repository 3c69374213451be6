//! RS256/384/512 example
//!
//! These identifiers encrypt the signing input with RSA-OAEP under the
//! verifier's public key. Only the private key holder can validate the
//! token, so the usual roles are reversed: the issuer needs the public key,
//! the verifier keeps the private key.
//!
//! Tokens produced this way are not RFC 7515 signatures and will not verify
//! with other JOSE libraries.

use jwtseal::*;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const LABEL: &str = "api-tokens";

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jwtseal=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== jwtseal RSA-OAEP Example ===\n");

    println!("Generating 2048-bit key pair...");
    let mut rng = rand::thread_rng();
    let private_key = RsaPrivateKey::new(&mut rng, 2048)?;
    let public_key = RsaPublicKey::from(&private_key);

    for algorithm in [AlgorithmId::RS256, AlgorithmId::RS384, AlgorithmId::RS512] {
        println!("\n--- {algorithm} ---");

        let jwt = TokenBuilder::new()
            .algorithm(algorithm)
            .issuer("https://example.com")
            .subject("service-a")
            .expires_in(Duration::from_secs(300))
            .sign_with_key(LABEL, &public_key)?;
        println!("  ✓ Issued {} byte token", jwt.len());

        let token = Token::load(&jwt)?;
        token.validate_with_key(LABEL, &private_key)?;
        println!("  ✓ Validated with private key");

        match token.validate_with_key("other-label", &private_key) {
            Err(Error::InvalidSecret) => println!("  ✓ Different label rejected"),
            other => println!("  ✗ Unexpected result for other label: {other:?}"),
        }
    }

    // OAEP bounds the plaintext: 2048-bit keys with SHA-512 take at most 126 bytes
    let oversized = TokenBuilder::new()
        .algorithm(AlgorithmId::RS512)
        .custom("blob", "x".repeat(200))
        .sign_with_key(LABEL, &public_key);
    println!("\nOversized RS512 token: {:?}", oversized.err());

    Ok(())
}
