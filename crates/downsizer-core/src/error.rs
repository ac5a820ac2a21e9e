//! Error types for downsizer-core
//!
//! Provides a unified error type for raster operations. Each variant
//! captures enough context for diagnostics without exposing internal
//! representation details.

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Raster dimensions describe more pixels than can be addressed
    #[error("raster too large: {width}x{height}")]
    TooLarge { width: u32, height: u32 },

    /// Coordinates outside the raster
    #[error("pixel out of bounds: ({x}, {y}) in {width}x{height}")]
    OutOfBounds { x: u32, y: u32, width: u32, height: u32 },
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
