//! questioner - interactive yes/no prompts for the terminal.
//!
//! This library backs the `questioner` CLI tool. It prints a question to a
//! line-oriented sink, reads one answer line from a line-oriented source,
//! and keeps re-asking until the answer matches a fixed case-insensitive
//! yes/no grammar.

#![deny(missing_docs)]

/// Version string from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod questioner;

// Re-export key types for convenience
pub use questioner::{AnswerSource, AskError, AskResult, Questioner};
