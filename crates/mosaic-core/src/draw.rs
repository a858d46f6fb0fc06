//! Box overlay drawing
//!
//! Paints rectangle outlines onto an image, for visual inspection of
//! predicted regions. Boxes are clipped to the image before drawing, so
//! partially (or fully) off-canvas boxes are safe.

use crate::bbox::BoundingBox;
use crate::error::{Error, Result};
use crate::fimage::FImage;

/// Clip a box to image bounds, returning inclusive integer corners
/// `(x1, y1, x2, y2)`, or `None` if the box lies entirely outside.
fn clip_to_image(bbox: &BoundingBox, img_w: u32, img_h: u32) -> Option<(u32, u32, u32, u32)> {
    let x1 = (bbox.x1.round() as i64).max(0);
    let y1 = (bbox.y1.round() as i64).max(0);
    let x2 = (bbox.x2.round() as i64).min(img_w as i64 - 1);
    let y2 = (bbox.y2.round() as i64).min(img_h as i64 - 1);
    if x1 > x2 || y1 > y2 {
        return None;
    }
    Some((x1 as u32, y1 as u32, x2 as u32, y2 as u32))
}

/// Draw the 1-pixel outline of a bounding box
///
/// `values` supplies the intensity written to each channel and must have
/// one entry per image channel.
///
/// # Errors
///
/// Returns `Error::IncompatibleChannels` if `values` doesn't match the
/// image's channel count.
pub fn draw_bounding_box(img: &mut FImage, bbox: &BoundingBox, values: &[f32]) -> Result<()> {
    if values.len() != img.channels() as usize {
        return Err(Error::IncompatibleChannels(
            img.channels(),
            values.len() as u32,
        ));
    }

    let Some((x1, y1, x2, y2)) = clip_to_image(bbox, img.width(), img.height()) else {
        return Ok(());
    };

    for x in x1..=x2 {
        for (ch, &v) in values.iter().enumerate() {
            img.set_pixel_unchecked(x, y1, ch as u32, v);
            img.set_pixel_unchecked(x, y2, ch as u32, v);
        }
    }
    for y in y1..=y2 {
        for (ch, &v) in values.iter().enumerate() {
            img.set_pixel_unchecked(x1, y, ch as u32, v);
            img.set_pixel_unchecked(x2, y, ch as u32, v);
        }
    }

    Ok(())
}
