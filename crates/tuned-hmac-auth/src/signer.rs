//! Tuned-HMAC request signing.
//!
//! This module runs the full signing pipeline:
//!
//! 1. Check that every required field is present; otherwise stop with an
//!    empty result.
//! 2. Canonicalize the URL.
//! 3. For `POST`, digest the body (empty body gives an empty digest).
//! 4. Build the signing string.
//! 5. Compute `Base64(HMAC-SHA256(Base64Decode(secret), signing_string))`.
//! 6. Assemble the `accessKey:signature:nonce:timestamp` token.
//!
//! The main entry point is [`sign`].

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use hmac::{Hmac, KeyInit, Mac};
use sha2::Sha256;
use tracing::debug;

use crate::canonical::{build_signing_string, canonicalize_uri};
use crate::error::AuthError;
use crate::payload::digest_payload;
use crate::request::{SigningRequest, validate};
use crate::token::assemble_token;

type HmacSha256 = Hmac<Sha256>;

/// The outputs of one signing operation.
///
/// All fields are empty when the request was incomplete.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedRequest {
    /// The raw string that was signed.
    pub signing_string: String,
    /// Base64-encoded HMAC-SHA256 of the signing string.
    pub signature: String,
    /// The `accessKey:signature:nonce:timestamp` token.
    pub token: String,
}

impl SignedRequest {
    /// Whether a signature was produced.
    #[must_use]
    pub fn is_signed(&self) -> bool {
        !self.token.is_empty()
    }

    /// The token with its authorization scheme, or `None` if nothing was signed.
    #[must_use]
    pub fn authorization_header(&self, scheme: &str) -> Option<String> {
        self.is_signed().then(|| format!("{scheme} {}", self.token))
    }
}

/// Sign a request.
///
/// An incomplete request yields an empty [`SignedRequest`] rather than an
/// error. A `POST` body is signed byte-for-byte as supplied.
///
/// # Errors
///
/// Returns [`AuthError::InvalidKeyEncoding`] if the secret key is not valid
/// standard Base64.
///
/// # Examples
///
/// ```
/// use tuned_hmac_auth::{SigningRequest, sign};
///
/// let request = SigningRequest::builder()
///     .access_key("AK")
///     .secret_key("c2VjcmV0")
///     .url("http://example.com")
///     .nonce("abc")
///     .timestamp("1700000000")
///     .build();
///
/// let signed = sign(&request).unwrap();
/// assert_eq!(
///     signed.token,
///     "AK:UbhBmA05Xs3R1iaas9iAoD1ghIHfPka7lsZe03lSVow=:abc:1700000000"
/// );
/// ```
pub fn sign(request: &SigningRequest) -> Result<SignedRequest, AuthError> {
    if !validate(request) {
        return Ok(SignedRequest::default());
    }

    let canonical_uri = canonicalize_uri(request.url());
    let content_digest = if request.method().signs_payload() {
        digest_payload(request.body().unwrap_or_default())
    } else {
        String::new()
    };

    let signing_string = build_signing_string(request, &canonical_uri, &content_digest);

    debug!(
        access_key = %request.access_key(),
        method = %request.method(),
        signing_string,
        "Built signing string"
    );

    let signature = compute_signature(&signing_string, request.secret_key())?;
    let token = assemble_token(
        request.access_key(),
        &signature,
        request.nonce(),
        request.timestamp(),
    );

    Ok(SignedRequest {
        signing_string,
        signature,
        token: token.to_string(),
    })
}

/// Compute `Base64(HMAC-SHA256(key, signing_string))` where `key` is the
/// Base64-decoded secret.
///
/// The output is always 44 characters (32 bytes, padded).
///
/// # Errors
///
/// Returns [`AuthError::InvalidKeyEncoding`] if `secret_key_base64` does not
/// decode as standard, padded Base64.
pub fn compute_signature(
    signing_string: &str,
    secret_key_base64: &str,
) -> Result<String, AuthError> {
    let key = decode_secret_key(secret_key_base64)?;
    let mut mac = HmacSha256::new_from_slice(&key).expect("HMAC can accept keys of any length");
    mac.update(signing_string.as_bytes());
    Ok(BASE64.encode(mac.finalize().into_bytes()))
}

/// Decode a Base64 secret key into raw key bytes.
///
/// # Errors
///
/// Returns [`AuthError::InvalidKeyEncoding`] on malformed Base64.
pub fn decode_secret_key(secret_key_base64: &str) -> Result<Vec<u8>, AuthError> {
    BASE64.decode(secret_key_base64).map_err(|e| {
        debug!(error = %e, "Secret key is not valid Base64");
        AuthError::InvalidKeyEncoding(e)
    })
}
