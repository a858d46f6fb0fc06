//! JPEG image format support
//!
//! Reads JPEG images with the `jpeg-decoder` crate and writes them with
//! `jpeg-encoder`. Supports 8-bit grayscale and 24-bit RGB; CMYK and
//! 16-bit streams are rejected.

use crate::{IoError, IoResult};
use jpeg_decoder::{Decoder, PixelFormat};
use jpeg_encoder::{ColorType, Encoder};
use mosaic_core::FImage;
use std::io::{Read, Write};

/// Read a JPEG image from a reader
///
/// # Arguments
/// * `reader` - A reader positioned at the JPEG SOI marker (`FF D8`)
///
/// # Returns
/// An `FImage` with 1 (grayscale) or 3 (RGB) channels and intensities
/// in [0, 1].
pub fn read_jpeg<R: Read>(reader: R) -> IoResult<FImage> {
    let mut decoder = Decoder::new(reader);
    let pixels = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {}", e)))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("missing JPEG frame info".to_string()))?;

    let channels: u32 = match info.pixel_format {
        PixelFormat::L8 => 1,
        PixelFormat::RGB24 => 3,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported JPEG pixel format: {:?}",
                other
            )));
        }
    };

    let width = info.width as u32;
    let height = info.height as u32;
    let mut img = FImage::new(width, height, channels)?;

    for (dst, &src) in img.data_mut().iter_mut().zip(pixels.iter()) {
        *dst = src as f32 / 255.0;
    }

    Ok(img)
}

/// Write an image as JPEG
///
/// Intensities are clamped to [0, 1] and scaled to 8 bits. One-channel
/// images encode as grayscale, three-channel images as RGB.
///
/// # Arguments
/// * `writer` - Destination stream
/// * `img` - Image to encode (1 or 3 channels)
/// * `quality` - JPEG quality in 1..=100
pub fn write_jpeg<W: Write>(mut writer: W, img: &FImage, quality: u8) -> IoResult<()> {
    let color_type = match img.channels() {
        1 => ColorType::Luma,
        3 => ColorType::Rgb,
        n => {
            return Err(IoError::UnsupportedFormat(format!(
                "cannot encode {} channels as JPEG",
                n
            )));
        }
    };

    if img.width() > u16::MAX as u32 || img.height() > u16::MAX as u32 {
        return Err(IoError::EncodeError(format!(
            "image too large for JPEG: {}x{}",
            img.width(),
            img.height()
        )));
    }

    let bytes: Vec<u8> = img
        .data()
        .iter()
        .map(|&v| (v.clamp(0.0, 1.0) * 255.0 + 0.5) as u8)
        .collect();

    let mut encoded = Vec::new();
    let encoder = Encoder::new(&mut encoded, quality);
    encoder
        .encode(
            &bytes,
            img.width() as u16,
            img.height() as u16,
            color_type,
        )
        .map_err(|e| IoError::EncodeError(format!("JPEG encode error: {}", e)))?;

    writer.write_all(&encoded)?;
    Ok(())
}
