//! Downsizer - bilinear image downsizing for Rust
//!
//! Given a source raster and a scale factor, produces a smaller raster
//! whose pixels are computed by bilinear interpolation over the source.
//! The work can run on the caller's thread or be fanned out across
//! workers that each own a disjoint region of the destination; both
//! strategies produce pixel-identical results.
//!
//! # Overview
//!
//! - [`Raster`] / [`RasterMut`] - the RGB image container
//! - [`engine`] - sampler, region partitioning, sequential/parallel
//!   schedulers
//! - [`io`] - PNG/JPEG decode, JPEG encode, format detection
//! - [`downsize_file`] - file-in, file-out convenience pipeline
//!
//! # Example
//!
//! ```
//! use downsizer::Raster;
//! use downsizer::engine::{downsize_parallel, downsize_sequential};
//!
//! let source = Raster::new(640, 480).unwrap();
//! let half = downsize_parallel(&source, 0.5).unwrap();
//! assert_eq!((half.width(), half.height()), (320, 240));
//!
//! // Parallel execution is an implementation detail, not a result change:
//! let reference = downsize_sequential(&source, 0.5).unwrap();
//! assert_eq!(half.data(), reference.data());
//! ```

// Re-export core types (primary data structures used everywhere)
pub use downsizer_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use downsizer_engine as engine;
pub use downsizer_io as io;

mod pipeline;
pub use pipeline::{Mode, PipelineError, downsize_file};
