//! downsizer-engine - bilinear downsizing core
//!
//! This crate implements the downsizing algorithm itself:
//!
//! - [`sampler`] - pure bilinear interpolation from destination coordinate
//!   to source color
//! - [`region`] - partitioning of the destination raster into disjoint
//!   rectangles of work
//! - [`scheduler`] - sequential and parallel drivers producing the
//!   downsized raster
//!
//! The sequential and parallel entry points are guaranteed to produce
//! pixel-identical results; parallelism only changes who computes a
//! pixel, never its value.
//!
//! # Example
//!
//! ```
//! use downsizer_core::Raster;
//! use downsizer_engine::{downsize_parallel, downsize_sequential};
//!
//! let src = Raster::new(64, 48).unwrap();
//! let a = downsize_sequential(&src, 0.5).unwrap();
//! let b = downsize_parallel(&src, 0.5).unwrap();
//! assert_eq!(a.width(), 32);
//! assert_eq!(a.height(), 24);
//! assert_eq!(a.data(), b.data());
//! ```

mod error;
pub mod region;
pub mod sampler;
pub mod scheduler;

pub use error::{EngineError, EngineResult};
pub use region::Region;
pub use sampler::sample_bilinear;
pub use scheduler::{
    dest_dimensions, downsize_parallel, downsize_sequential, downsize_with_workers,
};
