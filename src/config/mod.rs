//! Configuration structures and loading utilities.
//!
//! This module contains the gateway connection profile, the HMAC settings it
//! carries, and the environment variable resolution that fills it in.

pub mod gateway;
pub mod hmac;
pub mod verify;

pub use gateway::*;
pub use self::hmac::*;
pub use verify::*;
