//! The signing request and its completeness check.

use std::fmt;

use tuned_hmac_core::{HttpMethod, current_timestamp, generate_nonce};

/// Every input of one signing operation.
///
/// A request is an immutable value. Changing any field means building a new
/// request and signing it again from scratch, since every field participates
/// in the signing string.
#[derive(Clone, PartialEq, Eq)]
pub struct SigningRequest {
    access_key: String,
    secret_key: String,
    method: HttpMethod,
    url: String,
    body: Option<String>,
    nonce: String,
    timestamp: String,
}

impl SigningRequest {
    /// Start building a request.
    #[must_use]
    pub fn builder() -> SigningRequestBuilder {
        SigningRequestBuilder::default()
    }

    /// The access key identifying the caller.
    #[must_use]
    pub fn access_key(&self) -> &str {
        &self.access_key
    }

    /// The Base64-encoded secret key.
    #[must_use]
    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    /// The HTTP method.
    #[must_use]
    pub fn method(&self) -> HttpMethod {
        self.method
    }

    /// The target URL, exactly as supplied.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The request body, if any.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// The single-use nonce.
    #[must_use]
    pub fn nonce(&self) -> &str {
        &self.nonce
    }

    /// Whole seconds since the Unix epoch, as a decimal string.
    #[must_use]
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Whether every required field is present.
    ///
    /// The body is exempt regardless of method.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        [
            &self.access_key,
            &self.secret_key,
            &self.url,
            &self.nonce,
            &self.timestamp,
        ]
        .iter()
        .all(|field| !field.is_empty())
    }

    /// A copy of this request with a fresh nonce and the current timestamp.
    #[must_use]
    pub fn refreshed(&self) -> Self {
        self.refreshed_with(generate_nonce, current_timestamp)
    }

    /// A copy of this request with nonce and timestamp taken from the given factories.
    #[must_use]
    pub fn refreshed_with(
        &self,
        nonce: impl FnOnce() -> String,
        timestamp: impl FnOnce() -> String,
    ) -> Self {
        Self {
            nonce: nonce(),
            timestamp: timestamp(),
            ..self.clone()
        }
    }
}

impl fmt::Debug for SigningRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningRequest")
            .field("access_key", &self.access_key)
            .field("secret_key", &"<redacted>")
            .field("method", &self.method)
            .field("url", &self.url)
            .field("body", &self.body.as_ref().map(String::len))
            .field("nonce", &self.nonce)
            .field("timestamp", &self.timestamp)
            .finish()
    }
}

/// Returns `true` when `request` carries every field needed for a signature.
///
/// A `false` result is not an error: the signer produces an empty result for
/// it, so a half-filled form never shows a premature signature.
#[must_use]
pub fn validate(request: &SigningRequest) -> bool {
    request.is_complete()
}

/// Builder for [`SigningRequest`].
///
/// Fields left unset are empty, except the nonce and timestamp which default
/// through factories when the request is built. A nonce or timestamp that is
/// explicitly set, even to an empty string, is kept as given.
#[derive(Debug, Default, Clone)]
pub struct SigningRequestBuilder {
    access_key: String,
    secret_key: String,
    method: HttpMethod,
    url: String,
    body: Option<String>,
    nonce: Option<String>,
    timestamp: Option<String>,
}

impl SigningRequestBuilder {
    /// Set the access key.
    #[must_use]
    pub fn access_key(mut self, access_key: impl Into<String>) -> Self {
        self.access_key = access_key.into();
        self
    }

    /// Set the Base64-encoded secret key.
    #[must_use]
    pub fn secret_key(mut self, secret_key: impl Into<String>) -> Self {
        self.secret_key = secret_key.into();
        self
    }

    /// Set the HTTP method (defaults to `GET`).
    #[must_use]
    pub fn method(mut self, method: HttpMethod) -> Self {
        self.method = method;
        self
    }

    /// Set the target URL.
    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set the request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Set the nonce instead of generating one.
    #[must_use]
    pub fn nonce(mut self, nonce: impl Into<String>) -> Self {
        self.nonce = Some(nonce.into());
        self
    }

    /// Set the timestamp instead of reading the clock.
    #[must_use]
    pub fn timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    /// Build the request, generating a UUID v4 nonce and the current
    /// timestamp for any of the two left unset.
    #[must_use]
    pub fn build(self) -> SigningRequest {
        self.build_with(generate_nonce, current_timestamp)
    }

    /// Build the request, calling the given factories only for an unset nonce
    /// or timestamp.
    #[must_use]
    pub fn build_with(
        self,
        nonce: impl FnOnce() -> String,
        timestamp: impl FnOnce() -> String,
    ) -> SigningRequest {
        SigningRequest {
            access_key: self.access_key,
            secret_key: self.secret_key,
            method: self.method,
            url: self.url,
            body: self.body,
            nonce: self.nonce.unwrap_or_else(nonce),
            timestamp: self.timestamp.unwrap_or_else(timestamp),
        }
    }
}
