//! Error types for the replay driver

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("error: Invalid quoting")]
    Quoting,

    /// clap's rendered usage/error text
    #[error("{0}")]
    Command(String),

    #[error("failed to read script {path}")]
    ReadScript {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line_number}: {message}")]
    ScriptLine { line_number: usize, message: String },

    #[error("cannot advance the clock by {secs}s {ms}ms")]
    ClockOutOfRange { secs: u64, ms: u64 },

    #[error("failed to read input")]
    Input(#[source] std::io::Error),

    #[error(transparent)]
    Config(#[from] bassault_core::ConfigError),
}
