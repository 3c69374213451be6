//! Basic example demonstrating the token life cycle
//!
//! 1. Build and sign a token with the `TokenBuilder`
//! 2. Load the compact string back into a `Token`
//! 3. Validate signature and validity window
//! 4. Read standard and custom claims
//!
//! Run with `RUST_LOG=jwtseal=trace` to see the validation decisions.

use jwtseal::*;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const SECRET: &[u8] = b"your-256-bit-secret-key-here!";

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jwtseal=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== jwtseal - Basic Example ===\n");

    // Step 1: Issue a token
    println!("Step 1: Signing token...");
    let jwt = TokenBuilder::new()
        .issuer("https://example.com")
        .subject("user123")
        .audience("https://api.example.com")
        .issued_now()
        .expires_in(Duration::from_secs(3600))
        .custom("role", "admin")
        .custom("scopes", serde_json::json!(["read", "write"]))
        .sign(SECRET)?;
    println!("  ✓ Token: {jwt}\n");

    // Step 2: Load it as a receiver would
    println!("Step 2: Loading token...");
    let token = Token::load(&jwt)?;
    println!("  ✓ Algorithm: {}", token.header.algorithm);
    println!("  ✓ Token type: {}\n", token.header.token_type);

    // Step 3: Validate
    println!("Step 3: Validating...");
    token.validate(SECRET)?;
    println!("  ✓ Signature and validity window accepted");

    match token.validate("wrong-secret") {
        Err(Error::InvalidSecret) => println!("  ✓ Wrong secret rejected\n"),
        other => println!("  ✗ Unexpected result for wrong secret: {other:?}\n"),
    }

    // Step 4: Read claims
    println!("=== Token Data ===");
    println!("Issuer: {}", token.payload.issuer);
    println!("Subject: {}", token.payload.subject);
    println!("Audience: {}", token.payload.audience);
    println!(
        "Expires at: {}",
        Timestamp::to_text(token.payload.expiration_time.as_ref())
    );
    println!(
        "Issued at: {}",
        Timestamp::to_text(token.payload.issued_at.as_ref())
    );
    println!("Role: {:?}", token.payload.custom_claim("role"));
    println!("Scopes: {:?}", token.payload.custom_claim("scopes"));

    // An expired token fails on the window before the signature is checked
    let mut expired = Token::new();
    expired.payload.subject = "user123".into();
    expired.payload.expiration_time = Some(Timestamp::now().sub(Duration::from_secs(60))?);
    let expired = Token::load(&expired.sign_parse(SECRET)?)?;
    println!("\nExpired token: {:?}", expired.validate(SECRET));

    Ok(())
}
