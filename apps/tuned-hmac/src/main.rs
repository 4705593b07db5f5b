//! Tuned-HMAC - command-line token generator.
//!
//! Builds the `Tuned-HMAC` authorization value for a request from flags and
//! environment variables. Every invocation signs from scratch.
//!
//! # Usage
//!
//! ```text
//! TUNED_HMAC_ACCESS_KEY=AK TUNED_HMAC_SECRET_KEY=c2VjcmV0 \
//!     tuned-hmac sign --url https://api.example.com/orders
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `TUNED_HMAC_ACCESS_KEY` | *(unset)* | Access key when `--access-key` is absent |
//! | `TUNED_HMAC_SECRET_KEY` | *(unset)* | Base64 secret when `--secret-key` is absent |
//! | `TUNED_HMAC_SCHEME` | `Tuned-HMAC` | Authorization scheme prefix |
//! | `LOG_LEVEL` | `warn` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |

mod commands;
mod input;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tuned_hmac_core::SignerConfig;

use crate::commands::{minify, sign};

#[derive(Parser)]
#[command(name = "tuned-hmac")]
#[command(about = "Generate Tuned-HMAC authorization tokens", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign a request and print its authorization value
    Sign(sign::SignArgs),
    /// Minify a JSON payload (file or stdin)
    Minify {
        /// Input JSON file, `-` or nothing for stdin
        input: Option<String>,
    },
    /// Print a fresh nonce (UUID v4)
    Nonce,
    /// Print the current Unix timestamp in seconds
    Timestamp,
}

/// Initialize the tracing subscriber, writing to stderr.
///
/// Uses `RUST_LOG` if set, otherwise falls back to the `LOG_LEVEL` config value.
fn init_tracing(log_level: &str) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = SignerConfig::from_env();

    init_tracing(&config.log_level)?;

    let output = match cli.command {
        Commands::Sign(args) => sign::run(&args, &config)?,
        Commands::Minify { input } => minify::run(input.as_deref())?,
        Commands::Nonce => tuned_hmac_core::generate_nonce(),
        Commands::Timestamp => tuned_hmac_core::current_timestamp(),
    };

    println!("{output}");
    Ok(())
}
