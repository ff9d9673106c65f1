//! mTLS HMAC Gateway - a client for a single payment gateway endpoint
//!
//! Every call is authenticated twice:
//! - the channel, by a client certificate and key presented during the TLS handshake
//! - the request, by an HMAC over a canonical form of the payload sent in a header
//!
//! ## Architecture
//!
//! The codebase is organized into focused modules:
//! - `config/` - Connection profile, HMAC settings and environment loading
//! - `models/` - Payload and response types
//! - `utils/` - Payload canonicalization and HMAC signing
//! - `services/` - mTLS transport construction, the gateway client and its metrics
//! - `logging` - Tracing subscriber setup for binaries
//!
//! ## Quick Start
//!
//! ```no_run
//! use mtls_hmac_gateway::{GatewayClient, GatewayConfig, Payload};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), mtls_hmac_gateway::GatewayError> {
//!     let config = GatewayConfig::builder()
//!         .hmac_secret("top-secret")
//!         .cert_path("./certs/client-cert.pem")
//!         .key_path("./certs/client-key.pem")
//!         .build()?;
//!     let client = GatewayClient::new(config)?;
//!
//!     let payload = Payload::from([("transaction_id", "12345"), ("amount", "99.99")]);
//!     let response = client.get("https://gateway.example/pay", &payload).await?;
//!     println!("{}", response.status);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types and functions for convenience
pub use config::{
    GatewayConfig, GatewayConfigBuilder, HmacAlgorithm, SignatureEncoding, VerifyMode,
    endpoint_from_env,
};
pub use error::GatewayError;
pub use logging::{LogFormat, LoggingConfig, init_tracing};
pub use models::{GatewayResponse, Payload, PayloadValue};
pub use services::{
    CallOutcome, GatewayClient, GatewayMetrics, HttpClientFactory, MtlsOptions, PemSource,
    TransportOverrides,
};
pub use utils::{canonicalize, compute_mac, generate_signature, rfc3986_encode};
