//! Signed, mutually-authenticated calls to the payment gateway.
//!
//! Each call signs the payload, sends one GET with the payload as query
//! parameters and the signature in the configured header, then classifies
//! the response. There are no retries and no state carried between calls,
//! so one client can be shared freely across tasks.

use std::time::Instant;

use reqwest::Client;
use tracing::debug;
use url::Url;

use super::metrics::{CallOutcome, GatewayMetrics};
use super::mtls::{HttpClientFactory, MtlsOptions, TransportOverrides};
use crate::config::{GatewayConfig, endpoint_from_env};
use crate::error::GatewayError;
use crate::models::{GatewayResponse, Payload};
use crate::utils::generate_signature;

/// Client bound to one connection profile and one transport
#[derive(Clone, Debug)]
pub struct GatewayClient {
    config: GatewayConfig,
    http: Client,
    base_url: Option<Url>,
    metrics: Option<GatewayMetrics>,
}

impl GatewayClient {
    /// Build the mTLS transport from the profile and bind it to a new client
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
        Self::with_overrides(config, TransportOverrides::default())
    }

    /// Like [`GatewayClient::new`], with caller transport options merged over
    /// the ones derived from the profile
    pub fn with_overrides(
        config: GatewayConfig,
        overrides: TransportOverrides,
    ) -> Result<Self, GatewayError> {
        let options = MtlsOptions::from_config(&config).merge(overrides);
        let http = HttpClientFactory::build(&options)?;
        Ok(Self::assemble(config, http, options.base_url))
    }

    /// Use an already-built HTTP client instead of building one from the profile
    pub fn with_http_client(config: GatewayConfig, http: Client) -> Self {
        Self::assemble(config, http, None)
    }

    /// Profile and transport entirely from `GATEWAY_*` environment variables
    pub fn from_env() -> Result<Self, GatewayError> {
        Self::new(GatewayConfig::from_env()?)
    }

    fn assemble(config: GatewayConfig, http: Client, base_url: Option<Url>) -> Self {
        Self {
            config,
            http,
            base_url,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, metrics: GatewayMetrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Signature that [`GatewayClient::get`] would attach for this payload
    pub fn sign(&self, payload: &Payload) -> Result<String, GatewayError> {
        generate_signature(
            payload,
            self.config.hmac_secret(),
            self.config.hmac_algo(),
            self.config.signature_encoding(),
        )
    }

    /// Send a signed GET to `endpoint_url`.
    ///
    /// Returns the response for any 2xx status and
    /// [`GatewayError::Http`] for every other status.
    pub async fn get(
        &self,
        endpoint_url: &str,
        payload: &Payload,
    ) -> Result<GatewayResponse, GatewayError> {
        if endpoint_url.is_empty() {
            return Err(GatewayError::configuration("Endpoint URL must not be empty"));
        }

        let signature = self.sign(payload)?;
        let url = self.resolve(endpoint_url)?;
        let destination = url.host_str().unwrap_or("unknown").to_string();

        debug!(
            destination = %destination,
            method = "GET",
            path = %url.path(),
            fields = payload.len(),
            algo = %self.config.hmac_algo(),
            "Sending signed gateway request"
        );

        let start = Instant::now();
        let result = self.dispatch(url, payload, signature).await;
        let duration = start.elapsed();

        let outcome = match &result {
            Ok(response) => {
                debug!(
                    destination = %destination,
                    status = response.status.as_u16(),
                    duration_ms = duration.as_millis(),
                    "Gateway request succeeded"
                );
                CallOutcome::Success
            }
            Err(GatewayError::Http { status, .. }) => {
                debug!(
                    destination = %destination,
                    status = status.as_u16(),
                    duration_ms = duration.as_millis(),
                    "Gateway rejected request"
                );
                CallOutcome::HttpError
            }
            Err(e) => {
                debug!(
                    destination = %destination,
                    error = %e,
                    duration_ms = duration.as_millis(),
                    "Gateway request failed before a response"
                );
                CallOutcome::TransportError
            }
        };

        if let Some(metrics) = &self.metrics {
            metrics.record(&destination, outcome, duration);
        }

        result
    }

    /// Send a signed GET to the endpoint named by `GATEWAY_ENDPOINT`
    pub async fn get_from_env_endpoint(
        &self,
        payload: &Payload,
    ) -> Result<GatewayResponse, GatewayError> {
        let endpoint = endpoint_from_env()?;
        self.get(&endpoint, payload).await
    }

    /// Absolute request URL with any existing query dropped; the payload is
    /// the whole query.
    fn resolve(&self, endpoint_url: &str) -> Result<Url, GatewayError> {
        let parsed = match &self.base_url {
            Some(base) => base.join(endpoint_url),
            None => Url::parse(endpoint_url),
        };
        let mut url = parsed.map_err(|e| {
            GatewayError::configuration(format!("Invalid endpoint URL {endpoint_url:?}: {e}"))
        })?;
        url.set_query(None);
        Ok(url)
    }

    async fn dispatch(
        &self,
        url: Url,
        payload: &Payload,
        signature: String,
    ) -> Result<GatewayResponse, GatewayError> {
        let response = self
            .http
            .get(url)
            .query(&payload.query_pairs())
            .header(self.config.signature_header().clone(), signature)
            .send()
            .await?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();

        if status.is_success() {
            Ok(GatewayResponse::new(status, headers, body))
        } else {
            Err(GatewayError::Http {
                status,
                body,
                headers,
            })
        }
    }
}
