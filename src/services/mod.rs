//! Business logic and core services.
//!
//! This module holds the gateway client, the mTLS transport construction it
//! relies on, and the metrics it records.

pub mod gateway;
pub mod metrics;
pub mod mtls;

pub use gateway::*;
pub use metrics::*;
pub use mtls::*;
