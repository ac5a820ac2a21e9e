//! downsizer-io - image file decode/encode
//!
//! The I/O collaborators of the downsizing pipeline: reading PNG and JPEG
//! files into an RGB [`Raster`](downsizer_core::Raster) and persisting a
//! raster as JPEG. Format dispatch is based on the file's magic number,
//! not its name; extension matching is provided separately for callers
//! that gate on file names.

mod error;
mod format;
pub mod jpeg;
pub mod png;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format, detect_format_from_bytes, format_from_extension};
pub use jpeg::{encode_jpeg, read_jpeg, write_jpeg};
pub use self::png::read_png;

use downsizer_core::Raster;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Read an image file into an RGB raster.
///
/// The format is detected from the file header and dispatched to the
/// matching decoder.
///
/// # Errors
///
/// Returns [`IoError::Io`] if the file cannot be read,
/// [`IoError::UnsupportedFormat`] if the header matches no supported
/// format, and the decoder's [`IoError::DecodeError`] for corrupt data.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Raster> {
    let path = path.as_ref();
    let format = detect_format(path)?;
    let reader = BufReader::new(File::open(path)?);
    match format {
        ImageFormat::Png => read_png(reader),
        ImageFormat::Jpeg => read_jpeg(reader),
    }
}

/// Derive the output path for a downsized copy of `input`.
///
/// The name is the input path with an epoch-millisecond timestamp and a
/// `tag` appended, always with a `.jpg` extension: `photo.png` becomes
/// `photo.png1700000000000parallel.jpg` for tag `"parallel"`.
pub fn output_path<P: AsRef<Path>>(input: P, tag: &str) -> PathBuf {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or(0);
    let mut name = input.as_ref().as_os_str().to_os_string();
    name.push(format!("{millis}{tag}.jpg"));
    PathBuf::from(name)
}
