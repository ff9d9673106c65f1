use std::env;
use std::process::ExitCode;

use chrono::Utc;
use mtls_hmac_gateway::{
    GatewayClient, GatewayError, GatewayResponse, LoggingConfig, Payload, canonicalize,
    init_tracing,
};
use tracing::{error, info};
use uuid::Uuid;

const BODY_PREVIEW_CHARS: usize = 500;

fn preview(body: &str) -> String {
    body.chars().take(BODY_PREVIEW_CHARS).collect()
}

fn print_response(response: &GatewayResponse) {
    println!("HTTP Status: {}", response.status.as_u16());
    println!("Response Headers:");
    for (name, value) in response.headers.iter() {
        println!("   {}: {}", name, value.to_str().unwrap_or("<binary>"));
    }
    println!("Response Body (first {BODY_PREVIEW_CHARS} characters):");
    println!("{}", preview(&response.text()));
}

/// Sends one signed request using the `GATEWAY_*` environment.
///
/// Usage: `gateway-demo [endpoint-url]`. Without an argument the endpoint is
/// read from `GATEWAY_ENDPOINT`.
#[tokio::main]
async fn main() -> ExitCode {
    if let Err(e) = init_tracing(&LoggingConfig::from_env()) {
        eprintln!("Failed to initialize logging: {e}");
    }

    let client = match GatewayClient::from_env() {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, "Could not build gateway client from environment");
            println!("Configuration error: {e}");
            println!("Check GATEWAY_HMAC_SECRET, GATEWAY_CERT_PATH and GATEWAY_KEY_PATH,");
            println!("and that the certificate and key files exist and are valid PEM.");
            return ExitCode::FAILURE;
        }
    };

    let payload = Payload::new()
        .with("transaction_id", Uuid::new_v4().to_string())
        .with("amount", "99.99")
        .with("currency", "USD")
        .with("timestamp", Utc::now().timestamp());

    let config = client.config();
    println!("Certificate: {}", config.cert_path().display());
    println!("Key:         {}", config.key_path().display());
    println!("Algorithm:   {}", config.hmac_algo());
    println!("Header:      {}", config.signature_header());
    println!("Canonical:   {}", canonicalize(&payload));
    match client.sign(&payload) {
        Ok(signature) => println!("Signature:   {signature}"),
        Err(e) => {
            println!("Signing failed: {e}");
            return ExitCode::FAILURE;
        }
    }
    println!();

    let result = match env::args().nth(1) {
        Some(endpoint) => client.get(&endpoint, &payload).await,
        None => client.get_from_env_endpoint(&payload).await,
    };

    match result {
        Ok(response) => {
            info!(status = response.status.as_u16(), "Gateway request succeeded");
            print_response(&response);
            ExitCode::SUCCESS
        }
        Err(GatewayError::Http {
            status,
            body,
            headers,
        }) => {
            error!(status = status.as_u16(), "Gateway returned an error status");
            println!("HTTP error: {}", status);
            println!("Response headers: {}", headers.len());
            println!("Response Body: {}", preview(&String::from_utf8_lossy(&body)));
            ExitCode::FAILURE
        }
        Err(e) if e.is_configuration() => {
            println!("Configuration error: {e}");
            println!("Pass an endpoint URL as the first argument or set GATEWAY_ENDPOINT.");
            ExitCode::FAILURE
        }
        Err(e) => {
            error!(error = %e, "Gateway request failed");
            println!("Transport error: {e}");
            println!("Possible causes: rejected client certificate, TLS handshake failure,");
            println!("DNS resolution failure or timeout.");
            ExitCode::FAILURE
        }
    }
}
