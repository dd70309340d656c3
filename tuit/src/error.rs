//! Error handling for the tuit CLI.

use thiserror::Error;

/// Main error type for the tuit CLI.
#[derive(Error, Debug)]
pub enum TuitError {
    /// Configuration loading or validation failed.
    #[error("configuration error: {0}")]
    Config(String),

    /// Input discovery or validation failed.
    #[error("invalid input: {0}")]
    Input(String),

    /// The compiler reported diagnostics.
    #[error("build failed with {0} error(s)")]
    BuildFailed(usize),

    /// IO operations failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The compilation driver failed before producing outputs.
    #[error(transparent)]
    Drive(#[from] tuic_drv::DriveError),
}

/// Result type alias using TuitError.
pub type Result<T> = std::result::Result<T, TuitError>;
