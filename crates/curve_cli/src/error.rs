//! Error types for the curvefit CLI.

use curve_core::types::CurveError;
use thiserror::Error;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Error from the interpolation engine or point files
    #[error(transparent)]
    Curve(#[from] CurveError),
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
