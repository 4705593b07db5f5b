//! Configuration for the Tuned-HMAC signer.
//!
//! All configuration is driven by environment variables. Command-line flags
//! in the front end take precedence over anything loaded here.

use std::fmt;

/// Authorization scheme prefixed to the token in its display form.
pub const DEFAULT_SCHEME: &str = "Tuned-HMAC";

/// Global configuration for the signer front end.
#[derive(Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignerConfig {
    /// Log level filter used when `RUST_LOG` is unset.
    pub log_level: String,
    /// Access key to sign with when none is given explicitly.
    pub access_key: Option<String>,
    /// Base64-encoded secret key to sign with when none is given explicitly.
    #[serde(skip_serializing)]
    pub secret_key: Option<String>,
    /// Authorization scheme shown in front of the token.
    pub scheme: String,
}

impl Default for SignerConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_owned(),
            access_key: None,
            secret_key: None,
            scheme: DEFAULT_SCHEME.to_owned(),
        }
    }
}

impl fmt::Debug for SignerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignerConfig")
            .field("log_level", &self.log_level)
            .field("access_key", &self.access_key)
            .field("secret_key", &self.secret_key.as_ref().map(|_| "<redacted>"))
            .field("scheme", &self.scheme)
            .finish()
    }
}

impl SignerConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `LOG_LEVEL` | `warn` |
    /// | `TUNED_HMAC_ACCESS_KEY` | *(unset)* |
    /// | `TUNED_HMAC_SECRET_KEY` | *(unset)* |
    /// | `TUNED_HMAC_SCHEME` | `Tuned-HMAC` |
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    #[must_use]
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |name: &str| lookup(name).filter(|v| !v.is_empty());
        let mut config = Self::default();

        if let Some(v) = var("LOG_LEVEL") {
            config.log_level = v;
        }
        config.access_key = var("TUNED_HMAC_ACCESS_KEY");
        config.secret_key = var("TUNED_HMAC_SECRET_KEY");
        if let Some(v) = var("TUNED_HMAC_SCHEME") {
            config.scheme = v;
        }

        config
    }
}
