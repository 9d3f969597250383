//! Error types and exit codes for export-map

use std::process::ExitCode;
use thiserror::Error;

/// Main error type for export-map operations
///
/// Only conditions that end the run are represented here. Unreadable source
/// files, malformed manifests and unlistable route directories are absorbed
/// where they happen and never reach this type.
#[derive(Error, Debug)]
pub enum ExportMapError {
    #[error("No files found in {path}")]
    NoFilesFound { path: String },

    #[error("Path not found: {path}")]
    PathNotFound { path: String },

    #[error("Not a directory: {path}")]
    NotADirectory { path: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Serialization failed: {message}")]
    Serialization { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ExportMapError {
    /// Convert error to the process exit code:
    /// - 0: Success
    /// - 1: Nothing to report (no matching files)
    /// - 2: Target path missing or not a directory
    /// - 3: Invalid configuration
    /// - 4: Output could not be produced
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::NoFilesFound { .. } => ExitCode::from(1),
            Self::PathNotFound { .. } => ExitCode::from(2),
            Self::NotADirectory { .. } => ExitCode::from(2),
            Self::ConfigError { .. } => ExitCode::from(3),
            Self::Serialization { .. } => ExitCode::from(4),
            Self::Io(_) => ExitCode::from(4),
        }
    }
}

/// Result type alias for export-map operations
pub type Result<T> = std::result::Result<T, ExportMapError>;
