//! Error types for the Placard CLI.

use std::{io, path::PathBuf};

use thiserror::Error;

use placard::PlacardError;

/// The main error type for CLI operations.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to parse layout plan: {0}")]
    Plan(String),

    #[error("Failed to parse TOML configuration: {0}")]
    ConfigParse(String),

    #[error("Missing configuration file: {0}")]
    MissingConfigFile(PathBuf),

    #[error("Engine error: {0}")]
    Engine(#[from] PlacardError),

    #[error("Failed to serialize layout output: {0}")]
    Output(#[from] serde_json::Error),
}
