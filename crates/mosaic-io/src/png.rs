//! PNG image format support
//!
//! Decodes 8-bit and 16-bit grayscale and 8-bit Gray+Alpha / RGB / RGBA
//! PNGs into [`FImage`] buffers with intensities in [0, 1], and encodes
//! 1-4 channel images back to 8-bit PNG. Indexed-color PNGs are not
//! supported.

use crate::{IoError, IoResult};
use mosaic_core::FImage;
use png::{BitDepth, ColorType, Decoder, Encoder};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<FImage> {
    let decoder = Decoder::new(reader);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let info = reader.info();
    let width = info.width;
    let height = info.height;
    let color_type = info.color_type;
    let bit_depth = info.bit_depth;

    let channels: u32 = match (color_type, bit_depth) {
        (ColorType::Grayscale, BitDepth::Eight | BitDepth::Sixteen) => 1,
        (ColorType::GrayscaleAlpha, BitDepth::Eight) => 2,
        (ColorType::Rgb, BitDepth::Eight) => 3,
        (ColorType::Rgba, BitDepth::Eight) => 4,
        _ => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNG format: {:?} {:?}",
                color_type, bit_depth
            )));
        }
    };

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];

    let mut img = FImage::new(width, height, channels)?;

    if bit_depth == BitDepth::Sixteen {
        // 16-bit grayscale, big-endian sample pairs
        for y in 0..height {
            let row_start = y as usize * bytes_per_row;
            for x in 0..width {
                let idx = row_start + (x as usize * 2);
                let val = ((data[idx] as u32) << 8) | (data[idx + 1] as u32);
                img.set_pixel_unchecked(x, y, 0, val as f32 / 65535.0);
            }
        }
    } else {
        let spp = channels as usize;
        for y in 0..height {
            let row_start = y as usize * bytes_per_row;
            for x in 0..width {
                let idx = row_start + (x as usize * spp);
                for ch in 0..spp {
                    img.set_pixel_unchecked(x, y, ch as u32, data[idx + ch] as f32 / 255.0);
                }
            }
        }
    }

    Ok(img)
}

/// Write an image as an 8-bit PNG
///
/// Intensities are clamped to [0, 1] and scaled to 8 bits. The color
/// type follows the channel count: 1 = grayscale, 2 = gray+alpha,
/// 3 = RGB, 4 = RGBA.
pub fn write_png<W: Write>(writer: W, img: &FImage) -> IoResult<()> {
    let color_type = match img.channels() {
        1 => ColorType::Grayscale,
        2 => ColorType::GrayscaleAlpha,
        3 => ColorType::Rgb,
        4 => ColorType::Rgba,
        n => {
            return Err(IoError::UnsupportedFormat(format!(
                "cannot encode {} channels as PNG",
                n
            )));
        }
    };

    let bytes: Vec<u8> = img
        .data()
        .iter()
        .map(|&v| (v.clamp(0.0, 1.0) * 255.0 + 0.5) as u8)
        .collect();

    let mut encoder = Encoder::new(writer, img.width(), img.height());
    encoder.set_color(color_type);
    encoder.set_depth(BitDepth::Eight);

    let mut png_writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;
    png_writer
        .write_image_data(&bytes)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;

    Ok(())
}
