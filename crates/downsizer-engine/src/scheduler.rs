//! Downsize scheduling
//!
//! Drives the sampler over the destination raster, either on the caller's
//! thread (sequential) or across worker threads that each own a disjoint
//! region of the destination (parallel). Workers are spawned per
//! invocation and joined before returning; there is no persistent pool,
//! no work queue and no partial-result visibility. A failed worker never
//! produces a silently half-written result: all workers are joined first,
//! then the failure is surfaced as [`EngineError::Worker`].

use crate::error::{EngineError, EngineResult};
use crate::region::{self, Region, RegionRows};
use crate::sampler::sample_bilinear;
use downsizer_core::Raster;
use std::num::NonZeroUsize;
use std::thread;

/// Destination dimensions for downsizing `src_width x src_height` by
/// `factor`: `floor(src * factor)`, truncated toward zero.
///
/// A small enough factor yields 0 in either dimension; the resulting
/// zero-area raster is a legitimate output, not an error.
pub fn dest_dimensions(src_width: u32, src_height: u32, factor: f64) -> (u32, u32) {
    (
        (src_width as f64 * factor) as u32,
        (src_height as f64 * factor) as u32,
    )
}

/// Validate the scale factor and compute destination dimensions.
///
/// Rejecting the factor here keeps the fail-fast guarantee: nothing is
/// allocated for an invalid request.
fn checked_dimensions(src: &Raster, factor: f64) -> EngineResult<(u32, u32)> {
    if !factor.is_finite() || factor <= 0.0 {
        return Err(EngineError::InvalidScaleFactor(factor));
    }
    Ok(dest_dimensions(src.width(), src.height(), factor))
}

/// Downsize `src` by `factor` on the caller's thread.
///
/// One region covering the entire destination, traversed row-major.
///
/// # Errors
///
/// Returns [`EngineError::InvalidScaleFactor`] unless `factor` is a
/// finite positive number.
pub fn downsize_sequential(src: &Raster, factor: f64) -> EngineResult<Raster> {
    let (dest_width, dest_height) = checked_dimensions(src, factor)?;
    let dest = Raster::new(dest_width, dest_height)?;
    let mut dest = dest.try_into_mut().unwrap();

    for y in 0..dest_height {
        for x in 0..dest_width {
            let pixel = sample_bilinear(src, factor, x, y);
            unsafe { dest.set_pixel_unchecked(x, y, pixel) };
        }
    }

    Ok(dest.into())
}

/// Downsize `src` by `factor` across four quadrant workers.
///
/// The destination is bisected at its width/height midpoints into
/// top-left, top-right, bottom-left and bottom-right quadrants, each
/// filled by its own thread. The result is pixel-identical to
/// [`downsize_sequential`] for the same inputs.
///
/// # Errors
///
/// Returns [`EngineError::InvalidScaleFactor`] unless `factor` is a
/// finite positive number, and [`EngineError::Worker`] if any quadrant
/// worker fails (after all workers have been joined).
pub fn downsize_parallel(src: &Raster, factor: f64) -> EngineResult<Raster> {
    let (dest_width, dest_height) = checked_dimensions(src, factor)?;
    let regions = Region::quadrants(dest_width, dest_height);
    run_workers(src, factor, dest_width, dest_height, &regions)
}

/// Downsize `src` by `factor` across `workers` row-stripe workers.
///
/// Generalization of [`downsize_parallel`] to an arbitrary worker count:
/// the destination is split into full-width horizontal stripes of
/// near-equal height, one per worker. Output is identical to the other
/// two entry points.
///
/// # Errors
///
/// Same as [`downsize_parallel`].
pub fn downsize_with_workers(
    src: &Raster,
    factor: f64,
    workers: NonZeroUsize,
) -> EngineResult<Raster> {
    let (dest_width, dest_height) = checked_dimensions(src, factor)?;
    let regions = Region::row_stripes(dest_width, dest_height, workers.get());
    run_workers(src, factor, dest_width, dest_height, &regions)
}

/// Fill disjoint `regions` of a fresh destination raster concurrently.
fn run_workers(
    src: &Raster,
    factor: f64,
    dest_width: u32,
    dest_height: u32,
    regions: &[Region],
) -> EngineResult<Raster> {
    let dest = Raster::new(dest_width, dest_height)?;
    let mut dest = dest.try_into_mut().unwrap();

    let writers = region::carve(dest.data_mut(), dest_width, regions);
    let failures: Vec<String> = thread::scope(|scope| {
        let handles: Vec<_> = writers
            .into_iter()
            .filter(|writer| !writer.region.is_empty())
            .map(|mut writer| scope.spawn(move || fill_region(src, factor, &mut writer)))
            .collect();
        handles
            .into_iter()
            .filter_map(|handle| handle.join().err())
            .map(panic_message)
            .collect()
    });

    if let Some(message) = failures.into_iter().next() {
        return Err(EngineError::Worker(message));
    }
    Ok(dest.into())
}

/// Fill one region's row segments, row-major.
fn fill_region(src: &Raster, factor: f64, writer: &mut RegionRows<'_>) {
    let region = writer.region;
    for (i, row) in writer.rows.iter_mut().enumerate() {
        let y = region.start_y + i as u32;
        for x in region.start_x..region.end_x {
            row[(x - region.start_x) as usize] = sample_bilinear(src, factor, x, y);
        }
    }
}

/// Extract a readable message from a worker's panic payload.
fn panic_message(payload: Box<dyn std::any::Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "worker panicked".to_string()
    }
}
