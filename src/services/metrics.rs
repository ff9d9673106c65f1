//! Prometheus metrics for gateway calls.

use std::time::Duration;

use prometheus::{CounterVec, HistogramOpts, HistogramVec, Opts, Registry};

/// Outcome label recorded for each call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallOutcome {
    Success,
    HttpError,
    TransportError,
}

impl CallOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            CallOutcome::Success => "success",
            CallOutcome::HttpError => "http_error",
            CallOutcome::TransportError => "transport_error",
        }
    }
}

/// Request counters and latency histogram, registered on a caller's registry
#[derive(Clone, Debug)]
pub struct GatewayMetrics {
    /// Gateway requests by destination and outcome
    pub requests_total: CounterVec,

    /// Gateway request duration by destination
    pub request_duration_seconds: HistogramVec,
}

impl GatewayMetrics {
    pub fn new(registry: &Registry) -> Result<Self, prometheus::Error> {
        let requests_total = CounterVec::new(
            Opts::new(
                "gateway_requests_total",
                "Total payment gateway requests by destination and outcome",
            ),
            &["destination", "outcome"],
        )?;

        let request_duration_seconds = HistogramVec::new(
            HistogramOpts::new(
                "gateway_request_duration_seconds",
                "Duration of payment gateway requests",
            )
            .buckets(vec![
                0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 15.0,
            ]),
            &["destination"],
        )?;

        registry.register(Box::new(requests_total.clone()))?;
        registry.register(Box::new(request_duration_seconds.clone()))?;

        Ok(Self {
            requests_total,
            request_duration_seconds,
        })
    }

    pub fn record(&self, destination: &str, outcome: CallOutcome, duration: Duration) {
        self.requests_total
            .with_label_values(&[destination, outcome.as_str()])
            .inc();
        self.request_duration_seconds
            .with_label_values(&[destination])
            .observe(duration.as_secs_f64());
    }
}
