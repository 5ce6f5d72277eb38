//! Error types for kwm configuration.

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use toml::{de, ser};

/// Errors that can occur when loading or processing configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to parse TOML configuration.
    #[error("failed to parse config file {path}: {source}")]
    ParseToml {
        /// Path to the file that could not be parsed.
        path: PathBuf,
        /// Underlying TOML parse error.
        source: de::Error,
    },

    /// A field weight is zero.
    #[error("weight for '{field}' must be a positive integer (set in {path})")]
    InvalidWeight {
        /// Name of the field.
        field: &'static str,
        /// Config file that set the weight.
        path: PathBuf,
    },

    /// The fetch timeout is zero.
    #[error("fetch timeout must be at least one second (set in {path})")]
    InvalidTimeout {
        /// Config file that set the timeout.
        path: PathBuf,
    },

    /// Failed to serialize settings.
    #[error("failed to serialize settings: {0}")]
    Serialize(#[source] ser::Error),

    /// Failed to determine home directory.
    #[error("could not determine home directory")]
    NoHomeDirectory,
}
