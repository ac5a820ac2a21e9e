//! File-to-file downsizing pipeline
//!
//! Ties the collaborators together: decode the source file, downsize it
//! with the chosen execution mode, and persist the result as JPEG next to
//! the input under a timestamped name. Decoding happens before any
//! scheduling, so a decode failure propagates without spawning workers.

use crate::{engine, io};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Execution mode for a downsize run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Single-threaded, row-major over the whole destination
    #[default]
    Sequential,
    /// Four quadrant workers
    Parallel,
}

impl Mode {
    /// Tag appended to the output file name.
    fn tag(self) -> &'static str {
        match self {
            Mode::Sequential => "",
            Mode::Parallel => "parallel",
        }
    }
}

/// Errors from the file-to-file pipeline
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Image decode/encode or file-system error
    #[error("image I/O error: {0}")]
    Io(#[from] io::IoError),

    /// Downsizing error
    #[error("downsize error: {0}")]
    Engine(#[from] engine::EngineError),
}

/// Downsize an image file and write the result as JPEG.
///
/// Accepts files named `.png`, `.jpg` or `.jpeg` (any case). The output
/// lands next to the input with a timestamped name and a `.jpg`
/// extension; the path is returned.
///
/// # Errors
///
/// Fails fast with [`IoError::UnsupportedFormat`](io::IoError) for other
/// extensions, and otherwise propagates decode, downsize and encode
/// failures. On failure no output file is produced.
pub fn downsize_file<P: AsRef<Path>>(
    input: P,
    factor: f64,
    mode: Mode,
) -> Result<PathBuf, PipelineError> {
    let input = input.as_ref();
    if io::format_from_extension(input).is_none() {
        return Err(PipelineError::Io(io::IoError::UnsupportedFormat(format!(
            "expected a png, jpg or jpeg file: {}",
            input.display()
        ))));
    }

    let source = io::read_image(input)?;
    let result = match mode {
        Mode::Sequential => engine::downsize_sequential(&source, factor)?,
        Mode::Parallel => engine::downsize_parallel(&source, factor)?,
    };

    let output = io::output_path(input, mode.tag());
    io::write_jpeg(&result, &output)?;
    Ok(output)
}
