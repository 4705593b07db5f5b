//! Error types for the Tuned-HMAC core.

/// Core error type for Tuned-HMAC.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The HTTP method is not one the signer understands (only GET and POST are).
    #[error("unsupported HTTP method: {0} (expected GET or POST)")]
    UnsupportedMethod(String),
}
