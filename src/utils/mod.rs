//! Utility functions and helper modules.
//!
//! Payload canonicalization and the HMAC signing built on top of it.

pub mod canonical;
pub mod hmac;

pub use canonical::*;
pub use self::hmac::*;
