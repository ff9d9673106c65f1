use std::env;

use tracing::info;
use tracing_subscriber::EnvFilter;

/// Output format for log lines
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Logging configuration for binaries built on this crate
#[derive(Clone, Debug)]
pub struct LoggingConfig {
    pub format: LogFormat,
    /// Filter directive used when `RUST_LOG` is not set
    pub default_filter: String,
    pub service_name: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Pretty,
            default_filter: "info".to_string(),
            service_name: "mtls-hmac-gateway".to_string(),
        }
    }
}

impl LoggingConfig {
    pub fn from_env() -> Self {
        let format = match env::var("GATEWAY_LOG_FORMAT") {
            Ok(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        Self {
            format,
            default_filter: env::var("GATEWAY_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            service_name: env::var("GATEWAY_SERVICE_NAME")
                .unwrap_or_else(|_| "mtls-hmac-gateway".to_string()),
        }
    }
}

/// Install the global tracing subscriber. `RUST_LOG` wins over the configured default filter.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.default_filter))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);
    match config.format {
        LogFormat::Json => builder.json().try_init()?,
        LogFormat::Pretty => builder.try_init()?,
    }

    info!(
        service_name = %config.service_name,
        service_version = env!("CARGO_PKG_VERSION"),
        "Logging initialized"
    );

    Ok(())
}
