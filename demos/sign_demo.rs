#!/usr/bin/env cargo
//! HMAC Signature Demo
//!
//! Shows the canonical string and signature the gateway client would send
//! for a sample payload. Run with:
//!
//! ```
//! cargo run --example sign_demo
//! ```

use mtls_hmac_gateway::{
    GatewayError, HmacAlgorithm, Payload, SignatureEncoding, canonicalize, generate_signature,
};

fn main() -> Result<(), GatewayError> {
    println!("🔐 Gateway HMAC Signature Demo");
    println!("==============================\n");

    let secret = "top-secret";
    let payload = Payload::from([
        ("transaction_id", "12345"),
        ("amount", "99.99"),
        ("currency", "USD"),
    ]);

    println!("Configuration:");
    println!("  Secret: {secret}");
    println!("  Payload: {}", serde_json::to_string(&payload).unwrap_or_default());

    println!("\n🔍 Canonical string (sorted, RFC 3986 encoded):");
    println!("  '{}'", canonicalize(&payload));

    println!("\n✅ Signatures:");
    for algo in [HmacAlgorithm::Sha256, HmacAlgorithm::Sha512, HmacAlgorithm::Md5] {
        let hex_sig = generate_signature(&payload, secret, algo, SignatureEncoding::Hex)?;
        let b64_sig = generate_signature(&payload, secret, algo, SignatureEncoding::Base64)?;
        println!("  {algo:<7} hex:    {hex_sig}");
        println!("  {algo:<7} base64: {b64_sig}");
    }

    println!("\n⚙️  To call the gateway, set environment variables:");
    println!("  export GATEWAY_HMAC_SECRET={secret}");
    println!("  export GATEWAY_CERT_PATH=./certs/client-cert.pem");
    println!("  export GATEWAY_KEY_PATH=./certs/client-key.pem");
    println!("  export GATEWAY_ENDPOINT=https://client.badssl.com/");
    println!("  cargo run --bin gateway-demo");

    Ok(())
}
