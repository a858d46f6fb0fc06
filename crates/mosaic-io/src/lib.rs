//! mosaic-io - Image I/O for the mosaic library
//!
//! Reads and writes [`FImage`] buffers as PNG or JPEG files. Formats are
//! selected by file extension at the [`read_image`] / [`write_image`]
//! level; the per-format modules ([`png`], [`jpeg`]) accept arbitrary
//! readers and writers for in-memory use.

pub mod error;
pub mod format;
pub mod jpeg;
pub mod png;

pub use error::{IoError, IoResult};
pub use format::ImageFormat;
pub use jpeg::{read_jpeg, write_jpeg};
pub use png::{read_png, write_png};

use mosaic_core::FImage;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Default quality for JPEG output
const JPEG_QUALITY: u8 = 90;

/// Read an image from a file path, dispatching on its extension
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<FImage> {
    let path = path.as_ref();
    let format = ImageFormat::from_extension(path)
        .ok_or_else(|| IoError::UnsupportedFormat(path.display().to_string()))?;

    let file = File::open(path)?;
    match format {
        ImageFormat::Png => read_png(BufReader::new(file)),
        ImageFormat::Jpeg => read_jpeg(BufReader::new(file)),
    }
}

/// Write an image to a file path, dispatching on its extension
pub fn write_image<P: AsRef<Path>>(img: &FImage, path: P) -> IoResult<()> {
    let path = path.as_ref();
    let format = ImageFormat::from_extension(path)
        .ok_or_else(|| IoError::UnsupportedFormat(path.display().to_string()))?;

    let file = File::create(path)?;
    match format {
        ImageFormat::Png => write_png(BufWriter::new(file), img),
        ImageFormat::Jpeg => write_jpeg(BufWriter::new(file), img, JPEG_QUALITY),
    }
}
