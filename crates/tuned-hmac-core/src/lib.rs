//! Core types, configuration, and request defaults for Tuned-HMAC.
//!
//! This crate provides the building blocks shared by the signer and the
//! command-line front end: the HTTP method enumeration, the nonce and
//! timestamp factories used when a caller does not supply its own values,
//! and environment-driven configuration.

mod config;
mod error;
mod types;

pub use config::{DEFAULT_SCHEME, SignerConfig};
pub use error::CoreError;
pub use types::{HttpMethod, current_timestamp, generate_nonce};
