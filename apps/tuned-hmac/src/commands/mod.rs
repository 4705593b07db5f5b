//! Subcommand implementations.

pub mod minify;
pub mod sign;
