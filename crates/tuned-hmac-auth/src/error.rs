//! Error types for Tuned-HMAC signing.
//!
//! Incomplete input is deliberately absent: a request with empty required
//! fields produces an empty result, not an error.

/// Errors that can occur while signing a request or preparing its payload.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The secret key is not valid standard Base64.
    #[error("secret key is not valid Base64: {0}")]
    InvalidKeyEncoding(#[source] base64::DecodeError),

    /// Payload minification was requested for text that is not JSON.
    #[error("payload is not valid JSON: {0}")]
    InvalidJsonPayload(#[source] serde_json::Error),

    /// A token string does not have the `accessKey:signature:nonce:timestamp` shape.
    #[error("invalid token format")]
    InvalidToken,
}
