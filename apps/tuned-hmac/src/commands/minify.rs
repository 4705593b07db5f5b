//! Minify command implementation.

use anyhow::{Context, Result};
use tuned_hmac_auth::minify_json;

use crate::input::read_text;

/// Minify the JSON read from `input` (or stdin).
pub fn run(input: Option<&str>) -> Result<String> {
    let text = read_text(input)?;
    minify_json(&text).context("cannot minify payload")
}
