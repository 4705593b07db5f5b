//! Sign command implementation.

use anyhow::{Context, Result};
use clap::Args;
use tracing::{debug, warn};
use tuned_hmac_auth::{SignedRequest, SigningRequest, minify_json, sign};
use tuned_hmac_core::{HttpMethod, SignerConfig};

use crate::input::read_text;

/// Fields of the request to sign. Unset fields fall back to the environment,
/// and nonce/timestamp are generated when not given.
#[derive(Debug, Args)]
pub struct SignArgs {
    /// Access key (default: `TUNED_HMAC_ACCESS_KEY`)
    #[arg(long)]
    pub access_key: Option<String>,
    /// Base64-encoded secret key (default: `TUNED_HMAC_SECRET_KEY`)
    #[arg(long)]
    pub secret_key: Option<String>,
    /// HTTP method, GET or POST
    #[arg(long, short = 'X', default_value = "GET")]
    pub method: HttpMethod,
    /// Target URL, signed exactly as given
    #[arg(long)]
    pub url: Option<String>,
    /// Request body
    #[arg(long, conflicts_with = "body_file")]
    pub body: Option<String>,
    /// Read the request body from a file (`-` for stdin)
    #[arg(long)]
    pub body_file: Option<String>,
    /// Minify a JSON body before signing; a non-JSON body is signed unchanged
    #[arg(long)]
    pub minify: bool,
    /// Nonce to sign with instead of a fresh UUID v4
    #[arg(long)]
    pub nonce: Option<String>,
    /// Unix timestamp in seconds instead of the current time
    #[arg(long)]
    pub timestamp: Option<String>,
    /// Print every output (signing string, signature, token) as JSON
    #[arg(long)]
    pub json: bool,
}

/// Everything the command reports in `--json` mode.
#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct SignOutput<'a> {
    #[serde(flatten)]
    signed: &'a SignedRequest,
    nonce: &'a str,
    timestamp: &'a str,
    authorization: Option<String>,
}

/// Sign the request described by `args` and render the result.
///
/// An incomplete request renders as an empty line (or empty JSON fields).
pub fn run(args: &SignArgs, config: &SignerConfig) -> Result<String> {
    let request = build_request(args, config)?;
    let signed = sign(&request).context("failed to sign request")?;

    if signed.is_signed() {
        debug!(access_key = %request.access_key(), "Request signed");
    } else {
        debug!("Request incomplete, no token produced");
    }

    let authorization = signed.authorization_header(&config.scheme);

    if args.json {
        let output = SignOutput {
            signed: &signed,
            nonce: request.nonce(),
            timestamp: request.timestamp(),
            authorization,
        };
        return serde_json::to_string_pretty(&output).context("failed to serialize output");
    }

    Ok(authorization.unwrap_or_default())
}

fn build_request(args: &SignArgs, config: &SignerConfig) -> Result<SigningRequest> {
    let access_key = args
        .access_key
        .clone()
        .or_else(|| config.access_key.clone())
        .unwrap_or_default();
    let secret_key = args
        .secret_key
        .clone()
        .or_else(|| config.secret_key.clone())
        .unwrap_or_default();

    let mut builder = SigningRequest::builder()
        .access_key(access_key)
        .secret_key(secret_key)
        .method(args.method)
        .url(args.url.clone().unwrap_or_default());

    if let Some(body) = read_body(args)? {
        builder = builder.body(body);
    }
    if let Some(nonce) = &args.nonce {
        builder = builder.nonce(nonce);
    }
    if let Some(timestamp) = &args.timestamp {
        builder = builder.timestamp(timestamp);
    }

    Ok(builder.build())
}

fn read_body(args: &SignArgs) -> Result<Option<String>> {
    let body = match (&args.body, &args.body_file) {
        (Some(body), _) => Some(body.clone()),
        (None, Some(path)) => Some(read_text(Some(path))?),
        (None, None) => None,
    };

    if !args.minify {
        return Ok(body);
    }

    Ok(body.map(|body| match minify_json(&body) {
        Ok(minified) => minified,
        Err(e) => {
            warn!(error = %e, "Body is not valid JSON, signing it unminified");
            body
        }
    }))
}
