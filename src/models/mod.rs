//! Data models for gateway requests and responses.

pub mod payload;
pub mod response;

pub use payload::*;
pub use response::*;
