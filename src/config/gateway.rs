//! Gateway connection profile and its resolution from explicit values,
//! environment variables and defaults.

use std::env;
use std::fmt;
use std::path::{Path, PathBuf};

use reqwest::header::HeaderName;
use serde::{Serialize, Serializer};

use super::hmac::{HmacAlgorithm, SignatureEncoding};
use super::verify::VerifyMode;
use crate::error::GatewayError;

pub const ENV_HMAC_SECRET: &str = "GATEWAY_HMAC_SECRET";
pub const ENV_CERT_PATH: &str = "GATEWAY_CERT_PATH";
pub const ENV_KEY_PATH: &str = "GATEWAY_KEY_PATH";
pub const ENV_KEY_PASSPHRASE: &str = "GATEWAY_KEY_PASSPHRASE";
pub const ENV_VERIFY: &str = "GATEWAY_VERIFY";
pub const ENV_HMAC_ALGO: &str = "GATEWAY_HMAC_ALGO";
pub const ENV_SIGNATURE_HEADER: &str = "GATEWAY_SIGNATURE_HEADER";
pub const ENV_SIGNATURE_ENCODING: &str = "GATEWAY_SIGNATURE_ENCODING";
pub const ENV_TIMEOUT_SECONDS: &str = "GATEWAY_TIMEOUT_SECONDS";
pub const ENV_CONNECT_TIMEOUT_SECONDS: &str = "GATEWAY_CONNECT_TIMEOUT_SECONDS";
pub const ENV_ENDPOINT: &str = "GATEWAY_ENDPOINT";

pub const DEFAULT_SIGNATURE_HEADER: &str = "X-Signature";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 15;
pub const DEFAULT_CONNECT_TIMEOUT_SECONDS: u64 = 10;

/// Immutable connection profile for the payment gateway.
///
/// The secret, certificate path and key path are guaranteed non-empty once a
/// value exists. Secrets are skipped when serialized and redacted in `Debug`.
#[derive(Clone, Serialize)]
pub struct GatewayConfig {
    #[serde(skip_serializing)]
    hmac_secret: String,
    cert_path: PathBuf,
    key_path: PathBuf,
    #[serde(skip_serializing)]
    key_passphrase: Option<String>,
    verify: VerifyMode,
    hmac_algo: HmacAlgorithm,
    #[serde(serialize_with = "serialize_header_name")]
    signature_header: HeaderName,
    signature_encoding: SignatureEncoding,
    timeout_seconds: u64,
    connect_timeout_seconds: u64,
}

fn serialize_header_name<S>(name: &HeaderName, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(name.as_str())
}

impl GatewayConfig {
    pub fn builder() -> GatewayConfigBuilder {
        GatewayConfigBuilder::default()
    }

    /// Load configuration entirely from `GATEWAY_*` environment variables
    pub fn from_env() -> Result<Self, GatewayError> {
        GatewayConfigBuilder::default().build()
    }

    pub fn hmac_secret(&self) -> &str {
        &self.hmac_secret
    }

    pub fn cert_path(&self) -> &Path {
        &self.cert_path
    }

    pub fn key_path(&self) -> &Path {
        &self.key_path
    }

    pub fn key_passphrase(&self) -> Option<&str> {
        self.key_passphrase.as_deref()
    }

    pub fn verify(&self) -> &VerifyMode {
        &self.verify
    }

    pub fn hmac_algo(&self) -> HmacAlgorithm {
        self.hmac_algo
    }

    /// Header carrying the signature, already validated (and lowercased)
    pub fn signature_header(&self) -> &HeaderName {
        &self.signature_header
    }

    pub fn signature_encoding(&self) -> SignatureEncoding {
        self.signature_encoding
    }

    pub fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }

    pub fn connect_timeout_seconds(&self) -> u64 {
        self.connect_timeout_seconds
    }
}

impl fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("hmac_secret", &"<redacted>")
            .field("cert_path", &self.cert_path)
            .field("key_path", &self.key_path)
            .field(
                "key_passphrase",
                &self.key_passphrase.as_ref().map(|_| "<redacted>"),
            )
            .field("verify", &self.verify)
            .field("hmac_algo", &self.hmac_algo)
            .field("signature_header", &self.signature_header)
            .field("signature_encoding", &self.signature_encoding)
            .field("timeout_seconds", &self.timeout_seconds)
            .field("connect_timeout_seconds", &self.connect_timeout_seconds)
            .finish()
    }
}

/// Field-by-field builder: an explicit value wins over the environment,
/// the environment wins over the built-in default.
#[derive(Default, Clone)]
pub struct GatewayConfigBuilder {
    hmac_secret: Option<String>,
    cert_path: Option<PathBuf>,
    key_path: Option<PathBuf>,
    key_passphrase: Option<String>,
    verify: Option<VerifyMode>,
    hmac_algo: Option<String>,
    signature_header: Option<String>,
    signature_encoding: Option<SignatureEncoding>,
    timeout_seconds: Option<u64>,
    connect_timeout_seconds: Option<u64>,
}

impl GatewayConfigBuilder {
    pub fn hmac_secret(mut self, secret: impl Into<String>) -> Self {
        self.hmac_secret = Some(secret.into());
        self
    }

    pub fn cert_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.cert_path = Some(path.into());
        self
    }

    pub fn key_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.key_path = Some(path.into());
        self
    }

    pub fn key_passphrase(mut self, passphrase: impl Into<String>) -> Self {
        self.key_passphrase = Some(passphrase.into());
        self
    }

    pub fn verify(mut self, verify: impl Into<VerifyMode>) -> Self {
        self.verify = Some(verify.into());
        self
    }

    pub fn hmac_algo(mut self, algo: impl Into<String>) -> Self {
        self.hmac_algo = Some(algo.into());
        self
    }

    pub fn signature_header(mut self, header: impl Into<String>) -> Self {
        self.signature_header = Some(header.into());
        self
    }

    pub fn signature_encoding(mut self, encoding: SignatureEncoding) -> Self {
        self.signature_encoding = Some(encoding);
        self
    }

    pub fn timeout_seconds(mut self, seconds: u64) -> Self {
        self.timeout_seconds = Some(seconds);
        self
    }

    pub fn connect_timeout_seconds(mut self, seconds: u64) -> Self {
        self.connect_timeout_seconds = Some(seconds);
        self
    }

    /// Resolve against the process environment
    pub fn build(self) -> Result<GatewayConfig, GatewayError> {
        self.build_with(|key| env::var(key).ok())
    }

    /// Resolve against an arbitrary variable source. Empty values count as unset.
    pub fn build_with<F>(self, lookup: F) -> Result<GatewayConfig, GatewayError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let hmac_secret = self
            .hmac_secret
            .or_else(|| var(ENV_HMAC_SECRET))
            .unwrap_or_default();
        let cert_path = self
            .cert_path
            .or_else(|| var(ENV_CERT_PATH).map(PathBuf::from))
            .unwrap_or_default();
        let key_path = self
            .key_path
            .or_else(|| var(ENV_KEY_PATH).map(PathBuf::from))
            .unwrap_or_default();

        if hmac_secret.is_empty()
            || cert_path.as_os_str().is_empty()
            || key_path.as_os_str().is_empty()
        {
            return Err(GatewayError::configuration(format!(
                "Missing required parameters: hmac_secret, cert_path, key_path. \
                 Pass them directly or set {ENV_HMAC_SECRET}, {ENV_CERT_PATH}, {ENV_KEY_PATH} env vars."
            )));
        }

        let key_passphrase = self
            .key_passphrase
            .or_else(|| var(ENV_KEY_PASSPHRASE))
            .filter(|p| !p.is_empty());

        let verify = match self.verify {
            Some(verify) => verify,
            None => var(ENV_VERIFY)
                .map(|v| VerifyMode::parse_env(&v))
                .unwrap_or_default(),
        };

        let hmac_algo = match self.hmac_algo.or_else(|| var(ENV_HMAC_ALGO)) {
            Some(name) => name.parse()?,
            None => HmacAlgorithm::default(),
        };

        let header_name = self
            .signature_header
            .or_else(|| var(ENV_SIGNATURE_HEADER))
            .unwrap_or_else(|| DEFAULT_SIGNATURE_HEADER.to_string());
        let signature_header = HeaderName::from_bytes(header_name.as_bytes()).map_err(|_| {
            GatewayError::configuration(format!("Invalid signature header name: {header_name:?}"))
        })?;

        let signature_encoding = match self.signature_encoding {
            Some(encoding) => encoding,
            None => match var(ENV_SIGNATURE_ENCODING) {
                Some(value) => value.parse()?,
                None => SignatureEncoding::default(),
            },
        };

        // An explicit 0 disables the limit; "0" from the environment counts as unset
        let seconds = |key: &str| {
            var(key)
                .and_then(|v| v.trim().parse::<u64>().ok())
                .filter(|&s| s != 0)
        };
        let timeout_seconds = self
            .timeout_seconds
            .or_else(|| seconds(ENV_TIMEOUT_SECONDS))
            .unwrap_or(DEFAULT_TIMEOUT_SECONDS);
        let connect_timeout_seconds = self
            .connect_timeout_seconds
            .or_else(|| seconds(ENV_CONNECT_TIMEOUT_SECONDS))
            .unwrap_or(DEFAULT_CONNECT_TIMEOUT_SECONDS);

        Ok(GatewayConfig {
            hmac_secret,
            cert_path,
            key_path,
            key_passphrase,
            verify,
            hmac_algo,
            signature_header,
            signature_encoding,
            timeout_seconds,
            connect_timeout_seconds,
        })
    }
}

/// Default endpoint for the zero-argument call path, from `GATEWAY_ENDPOINT`
pub fn endpoint_from_env() -> Result<String, GatewayError> {
    endpoint_with(|key| env::var(key).ok())
}

pub fn endpoint_with<F>(lookup: F) -> Result<String, GatewayError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(ENV_ENDPOINT)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| GatewayError::configuration(format!("Missing env var: {ENV_ENDPOINT}")))
}
