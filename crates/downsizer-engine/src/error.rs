//! Error types for downsizer-engine

use thiserror::Error;

/// Errors that can occur while downsizing
#[derive(Debug, Error)]
pub enum EngineError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] downsizer_core::Error),

    /// Scale factor is not a finite positive number
    #[error("invalid scale factor: {0}")]
    InvalidScaleFactor(f64),

    /// A worker thread failed while filling its region
    #[error("worker failed: {0}")]
    Worker(String),
}

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
