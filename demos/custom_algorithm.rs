//! Custom algorithm registry example
//!
//! Registries are plain values. This example builds one that accepts a
//! project-specific identifier and refuses HS256, then injects it into
//! both issuing and loading.

use jwtseal::*;
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== jwtseal Custom Algorithm Example ===\n");

    let mut registry = AlgorithmRegistry::standard();
    registry
        .register_signer("HS512-V2", |message: &str, secret: &[u8]| {
            sign_hs512(&format!("v2:{message}"), secret)
        })
        .remove("HS256");
    let registry = Arc::new(registry);

    println!("Registered signers: {:?}\n", registry.signer_ids());

    let jwt = TokenBuilder::new()
        .registry(Arc::clone(&registry))
        .algorithm("HS512-V2")
        .subject("user123")
        .sign("secret")?;
    println!("Token: {jwt}\n");

    let token = Token::load_with_registry(&jwt, Arc::clone(&registry))?;
    token.validate("secret")?;
    println!("  ✓ HS512-V2 token validated with the custom registry");

    // The process-wide registry has never heard of HS512-V2
    let foreign = Token::load(&jwt)?;
    println!("  Standard registry: {:?}", foreign.validate("secret"));

    // HS256 was removed from the custom registry
    let mut hs256 = Token::new().with_registry(Arc::clone(&registry));
    println!("  HS256 with custom registry: {:?}", hs256.sign("secret"));

    Ok(())
}
