//! HMAC signature configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GatewayError;

/// Hash function used inside the HMAC construction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HmacAlgorithm {
    Md5,
    Sha1,
    Sha224,
    #[default]
    Sha256,
    Sha384,
    Sha512,
}

impl HmacAlgorithm {
    pub const ALL: [HmacAlgorithm; 6] = [
        HmacAlgorithm::Md5,
        HmacAlgorithm::Sha1,
        HmacAlgorithm::Sha224,
        HmacAlgorithm::Sha256,
        HmacAlgorithm::Sha384,
        HmacAlgorithm::Sha512,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            HmacAlgorithm::Md5 => "md5",
            HmacAlgorithm::Sha1 => "sha1",
            HmacAlgorithm::Sha224 => "sha224",
            HmacAlgorithm::Sha256 => "sha256",
            HmacAlgorithm::Sha384 => "sha384",
            HmacAlgorithm::Sha512 => "sha512",
        }
    }

    /// Length of the raw MAC in bytes
    pub fn output_len(&self) -> usize {
        match self {
            HmacAlgorithm::Md5 => 16,
            HmacAlgorithm::Sha1 => 20,
            HmacAlgorithm::Sha224 => 28,
            HmacAlgorithm::Sha256 => 32,
            HmacAlgorithm::Sha384 => 48,
            HmacAlgorithm::Sha512 => 64,
        }
    }
}

impl fmt::Display for HmacAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for HmacAlgorithm {
    type Err = GatewayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "");
        HmacAlgorithm::ALL
            .into_iter()
            .find(|algo| algo.name() == normalized)
            .ok_or_else(|| {
                GatewayError::configuration(format!("Unsupported HMAC algorithm: {s}"))
            })
    }
}

/// Text encoding of the raw MAC bytes placed in the signature header
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignatureEncoding {
    /// Lowercase hexadecimal
    #[default]
    Hex,
    /// Standard base64 with padding
    Base64,
}

impl FromStr for SignatureEncoding {
    type Err = GatewayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hex" => Ok(SignatureEncoding::Hex),
            "base64" => Ok(SignatureEncoding::Base64),
            other => Err(GatewayError::configuration(format!(
                "Unsupported signature encoding: {other}"
            ))),
        }
    }
}
