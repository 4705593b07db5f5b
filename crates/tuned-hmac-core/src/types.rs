//! Request field types and the default nonce/timestamp factories.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::error::CoreError;

/// HTTP method of the request being signed.
///
/// Only `GET` and `POST` take part in the signing scheme. `POST` requests
/// carry a content digest segment in the signing string; `GET` requests do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    /// `GET` request; the body never participates in the signature.
    #[default]
    Get,
    /// `POST` request; the body digest participates in the signature.
    Post,
}

impl HttpMethod {
    /// The upper-case wire spelling used inside the signing string.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }

    /// Whether a content digest segment is part of the signing string.
    #[must_use]
    pub fn signs_payload(self) -> bool {
        matches!(self, Self::Post)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("GET") {
            Ok(Self::Get)
        } else if s.eq_ignore_ascii_case("POST") {
            Ok(Self::Post)
        } else {
            Err(CoreError::UnsupportedMethod(s.to_owned()))
        }
    }
}

/// Generate a fresh nonce: a random (version 4) UUID in hyphenated lower-case form.
///
/// # Examples
///
/// ```
/// let nonce = tuned_hmac_core::generate_nonce();
/// assert_eq!(nonce.len(), 36);
/// ```
#[must_use]
pub fn generate_nonce() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Whole seconds elapsed since 1970-01-01T00:00:00Z, as a decimal string.
#[must_use]
pub fn current_timestamp() -> String {
    timestamp_at(Utc::now())
}

/// Format an instant as whole Unix seconds, truncating any sub-second part.
pub(crate) fn timestamp_at(instant: DateTime<Utc>) -> String {
    instant.timestamp().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_parse_methods_case_insensitively() {
        assert_eq!("GET".parse::<HttpMethod>().unwrap(), HttpMethod::Get);
        assert_eq!("post".parse::<HttpMethod>().unwrap(), HttpMethod::Post);
        assert_eq!("Post".parse::<HttpMethod>().unwrap(), HttpMethod::Post);
    }

    #[test]
    fn test_should_reject_unsupported_method() {
        let result = "PUT".parse::<HttpMethod>();
        assert!(matches!(result, Err(CoreError::UnsupportedMethod(m)) if m == "PUT"));
    }

    #[test]
    fn test_should_display_upper_case_method() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Post.to_string(), "POST");
        assert!(HttpMethod::Post.signs_payload());
        assert!(!HttpMethod::Get.signs_payload());
    }

    #[test]
    fn test_should_serialize_method_upper_case() {
        assert_eq!(serde_json::to_string(&HttpMethod::Post).unwrap(), "\"POST\"");
        let method: HttpMethod = serde_json::from_str("\"GET\"").unwrap();
        assert_eq!(method, HttpMethod::Get);
    }

    #[test]
    fn test_should_generate_v4_nonce() {
        let nonce = generate_nonce();
        let parsed = uuid::Uuid::parse_str(&nonce).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
        assert_eq!(nonce, nonce.to_lowercase());
        assert_ne!(nonce, generate_nonce());
    }

    #[test]
    fn test_should_truncate_timestamp_to_whole_seconds() {
        let instant = DateTime::parse_from_rfc3339("2023-11-14T22:13:20.999Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(timestamp_at(instant), "1700000000");
    }

    #[test]
    fn test_should_produce_decimal_current_timestamp() {
        let ts = current_timestamp();
        assert!(!ts.is_empty());
        assert!(ts.chars().all(|c| c.is_ascii_digit()));
        assert!(ts.parse::<i64>().unwrap() > 1_700_000_000);
    }
}
