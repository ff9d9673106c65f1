//! Error type shared by every gateway operation.

use std::borrow::Cow;
use std::path::PathBuf;

use reqwest::StatusCode;
use reqwest::header::HeaderMap;

/// Errors that can occur while configuring or calling the gateway
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Missing or invalid configuration, raised before any network or crypto work
    #[error("{0}")]
    Configuration(String),

    /// The gateway answered with a status outside of 2xx
    #[error("Unexpected HTTP status code: {}", .status.as_u16())]
    Http {
        status: StatusCode,
        body: Vec<u8>,
        headers: HeaderMap,
    },

    /// The request never produced a response (TLS, DNS, connect, timeout)
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A certificate, key or CA bundle file could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A certificate, key or CA bundle file could not be parsed
    #[error("Invalid TLS material: {0}")]
    Tls(String),
}

impl GatewayError {
    pub fn configuration(message: impl Into<String>) -> Self {
        GatewayError::Configuration(message.into())
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, GatewayError::Configuration(_))
    }

    pub fn is_http(&self) -> bool {
        matches!(self, GatewayError::Http { .. })
    }

    /// True for every failure where the gateway never answered, including
    /// unusable TLS material discovered while building the transport.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            GatewayError::Transport(_) | GatewayError::Io { .. } | GatewayError::Tls(_)
        )
    }

    /// HTTP status carried by an [`GatewayError::Http`] error
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            GatewayError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw response body carried by an [`GatewayError::Http`] error
    pub fn body(&self) -> Option<&[u8]> {
        match self {
            GatewayError::Http { body, .. } => Some(body.as_slice()),
            _ => None,
        }
    }

    /// Response body as text, replacing invalid UTF-8 sequences
    pub fn body_text(&self) -> Option<Cow<'_, str>> {
        self.body().map(String::from_utf8_lossy)
    }

    /// Response headers carried by an [`GatewayError::Http`] error
    pub fn headers(&self) -> Option<&HeaderMap> {
        match self {
            GatewayError::Http { headers, .. } => Some(headers),
            _ => None,
        }
    }
}
