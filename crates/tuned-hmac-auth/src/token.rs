//! Authentication token assembly and parsing.
//!
//! The token has the format:
//!
//! ```text
//! <AccessKey>:<Signature>:<Nonce>:<Timestamp>
//! ```
//!
//! and is sent as `Tuned-HMAC <token>`.

use std::fmt;
use std::str::FromStr;

use subtle::ConstantTimeEq;

use crate::error::AuthError;

/// The four fields of an authentication token.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthToken {
    /// The access key that signed the request.
    pub access_key: String,
    /// Base64 HMAC-SHA256 signature.
    pub signature: String,
    /// The nonce included in the signing string.
    pub nonce: String,
    /// The timestamp included in the signing string.
    pub timestamp: String,
}

/// Assemble a token from its fields. No validation is performed.
///
/// # Examples
///
/// ```
/// use tuned_hmac_auth::token::assemble_token;
///
/// let token = assemble_token("AK", "c2ln", "abc", "1700000000");
/// assert_eq!(token.to_string(), "AK:c2ln:abc:1700000000");
/// ```
#[must_use]
pub fn assemble_token(
    access_key: &str,
    signature: &str,
    nonce: &str,
    timestamp: &str,
) -> AuthToken {
    AuthToken {
        access_key: access_key.to_owned(),
        signature: signature.to_owned(),
        nonce: nonce.to_owned(),
        timestamp: timestamp.to_owned(),
    }
}

impl AuthToken {
    /// Render the token with its authorization scheme, e.g. `Tuned-HMAC AK:sig:n:1`.
    #[must_use]
    pub fn to_header_value(&self, scheme: &str) -> String {
        format!("{scheme} {self}")
    }

    /// Parse an authorization header value of the form `<scheme> <token>`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidToken`] if the scheme does not match or the
    /// token is malformed.
    pub fn from_header_value(header: &str, scheme: &str) -> Result<Self, AuthError> {
        let token = header
            .strip_prefix(scheme)
            .and_then(|rest| rest.strip_prefix(' '))
            .ok_or(AuthError::InvalidToken)?;
        token.parse()
    }

    /// Compare two tokens field by field without short-circuiting on the signature.
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        let signature_eq: bool = self
            .signature
            .as_bytes()
            .ct_eq(other.signature.as_bytes())
            .into();
        signature_eq
            && self.access_key == other.access_key
            && self.nonce == other.nonce
            && self.timestamp == other.timestamp
    }
}

impl fmt::Display for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}",
            self.access_key, self.signature, self.nonce, self.timestamp
        )
    }
}

impl FromStr for AuthToken {
    type Err = AuthError;

    /// Split a token from the right, so an access key containing `:` stays intact.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.rsplitn(4, ':');
        let timestamp = parts.next().ok_or(AuthError::InvalidToken)?;
        let nonce = parts.next().ok_or(AuthError::InvalidToken)?;
        let signature = parts.next().ok_or(AuthError::InvalidToken)?;
        let access_key = parts.next().ok_or(AuthError::InvalidToken)?;

        if [access_key, signature, nonce, timestamp]
            .iter()
            .any(|field| field.is_empty())
        {
            return Err(AuthError::InvalidToken);
        }

        Ok(assemble_token(access_key, signature, nonce, timestamp))
    }
}
