//! Reading payload text from files or stdin.

use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};

/// Read text from `path`, or from stdin when `path` is `None` or `-`.
pub fn read_text(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) if path != "-" => std::fs::read_to_string(Path::new(path))
            .with_context(|| format!("failed to read {path}")),
        _ => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            Ok(buffer)
        }
    }
}
