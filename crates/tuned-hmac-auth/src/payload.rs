//! Request payload normalization and content digest.
//!
//! The content digest is `Base64(MD5(body))` computed after every line feed
//! has been expanded to a CR/LF pair, matching the counterpart that serializes
//! text with CR/LF line endings. Minification is a separate, caller-invoked
//! step and never happens implicitly while signing.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use md5::{Digest, Md5};
use serde::de::IgnoredAny;

use crate::error::AuthError;

/// Compute the content digest of a request body.
///
/// Returns an empty string for an empty body. Every `\n` becomes `\r\n`
/// before hashing, including one already preceded by `\r`.
///
/// # Examples
///
/// ```
/// use tuned_hmac_auth::payload::digest_payload;
///
/// assert_eq!(digest_payload(""), "");
/// assert_eq!(digest_payload("{\"a\":1}\n"), "mLaPivN0tFmfgmqemXIwmA==");
/// ```
#[must_use]
pub fn digest_payload(body: &str) -> String {
    if body.is_empty() {
        return String::new();
    }

    let normalized = normalize_line_endings(body);
    BASE64.encode(Md5::digest(normalized.as_bytes()))
}

/// Expand every line feed into a carriage return + line feed pair.
#[must_use]
pub fn normalize_line_endings(body: &str) -> String {
    body.replace('\n', "\r\n")
}

/// Minify a JSON document by removing all insignificant whitespace.
///
/// The text is only rewritten if it parses as JSON. Member order, number
/// spelling and string contents are preserved exactly, so minifying twice
/// yields the same string as minifying once.
///
/// # Errors
///
/// Returns [`AuthError::InvalidJsonPayload`] if `text` is not valid JSON. The
/// input is borrowed and left as it was.
///
/// # Examples
///
/// ```
/// use tuned_hmac_auth::payload::minify_json;
///
/// assert_eq!(minify_json("{ \"a\": [1, 2] }").unwrap(), "{\"a\":[1,2]}");
/// assert!(minify_json("{ not json").is_err());
/// ```
pub fn minify_json(text: &str) -> Result<String, AuthError> {
    serde_json::from_str::<IgnoredAny>(text).map_err(AuthError::InvalidJsonPayload)?;

    let mut result = String::with_capacity(text.len());
    let mut in_string = false;
    let mut escaped = false;

    for ch in text.chars() {
        if in_string {
            result.push(ch);
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        match ch {
            ' ' | '\t' | '\n' | '\r' => {}
            '"' => {
                in_string = true;
                result.push(ch);
            }
            _ => result.push(ch),
        }
    }

    Ok(result)
}
