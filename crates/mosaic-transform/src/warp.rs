//! Inverse-mapped image warping
//!
//! Resamples a source image into a destination canvas under a homography.
//! For every destination pixel the inverse transform gives fractional
//! source coordinates; pixels whose source location falls outside the
//! valid sampling region keep their prior value, which is how two warps
//! into the same canvas composite without a blend step.
//!
//! Two entry points share the algorithm and differ only in scan region:
//! [`warp_into`] visits every destination pixel (cost proportional to the
//! canvas area), while [`warp_into_box`] visits only the predicted
//! bounding box of the source extent under the transform (cost
//! proportional to the mapped area), preferable when the canvas is much
//! larger than the mapped region.

use crate::homography::{Homography, predict_bounding_box};
use crate::{TransformError, TransformResult};
use mosaic_core::sample::{self, SampleBorder};
use mosaic_core::{Error, FImage};
use nalgebra::Vector3;

/// Resampling operation used by a warp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WarpOperation {
    /// Sampled (nearest-neighbor)
    ///
    /// Fastest but lowest quality
    #[default]
    Sampled,
    /// Interpolated (bilinear)
    ///
    /// Higher quality but slower
    Interpolated,
}

/// Warp `source` into `out` over the full canvas
///
/// Inverse mapping: each destination pixel (x, y) is pulled from
/// `H⁻¹ · (x, y, 1)` after projective division. Destination pixels whose
/// source location has no full sampling neighborhood are left unchanged.
/// Mutates `out` in place; `source` is untouched.
///
/// # Errors
///
/// Returns an error if the channel counts differ or `h` is singular.
pub fn warp_into(
    source: &FImage,
    h: &Homography,
    out: &mut FImage,
    op: WarpOperation,
) -> TransformResult<()> {
    check_channels(source, out)?;
    let hinv = h.inverse()?;
    warp_region(source, &hinv, out, op, 0, out.width(), 0, out.height());
    Ok(())
}

/// Warp `source` into `out`, scanning only the predicted mapped region
///
/// Identical to [`warp_into`] except that the destination scan is
/// restricted to the bounding box of `h` applied to the source extent,
/// intersected with the canvas. Pixels outside that box are never read
/// or written.
///
/// # Errors
///
/// Returns an error if the channel counts differ or `h` is singular.
pub fn warp_into_box(
    source: &FImage,
    h: &Homography,
    out: &mut FImage,
    op: WarpOperation,
) -> TransformResult<()> {
    check_channels(source, out)?;
    let hinv = h.inverse()?;

    let bbox = predict_bounding_box(source.width(), source.height(), h);
    let x_begin = (bbox.x1.floor() as i64).clamp(0, out.width() as i64) as u32;
    let x_end = (bbox.x2.ceil() as i64).clamp(0, out.width() as i64) as u32;
    let y_begin = (bbox.y1.floor() as i64).clamp(0, out.height() as i64) as u32;
    let y_end = (bbox.y2.ceil() as i64).clamp(0, out.height() as i64) as u32;

    warp_region(source, &hinv, out, op, x_begin, x_end, y_begin, y_end);
    Ok(())
}

fn check_channels(source: &FImage, out: &FImage) -> TransformResult<()> {
    if source.channels() != out.channels() {
        return Err(TransformError::Core(Error::IncompatibleChannels(
            source.channels(),
            out.channels(),
        )));
    }
    Ok(())
}

/// Scan a destination rectangle, pulling samples through the inverse map.
///
/// The valid source region is half-open at `w - 1` and `h - 1` for both
/// operations: bilinear interpolation needs the full next-pixel neighbor,
/// and nearest-neighbor follows the same convention so the two variants
/// cover identical destination pixels.
#[allow(clippy::too_many_arguments)]
fn warp_region(
    source: &FImage,
    hinv: &Homography,
    out: &mut FImage,
    op: WarpOperation,
    x_begin: u32,
    x_end: u32,
    y_begin: u32,
    y_end: u32,
) {
    let m = *hinv.matrix();
    let sw = source.width() as f32;
    let sh = source.height() as f32;
    let channels = out.channels();

    for y in y_begin..y_end {
        for x in x_begin..x_end {
            let v = m * Vector3::new(x as f64, y as f64, 1.0);
            let sx = (v.x / v.z) as f32;
            let sy = (v.y / v.z) as f32;

            if sx >= 0.0 && sx < sw - 1.0 && sy >= 0.0 && sy < sh - 1.0 {
                for ch in 0..channels {
                    let val = match op {
                        WarpOperation::Interpolated => {
                            sample::bilinear(source, sx, sy, ch, SampleBorder::Zero)
                        }
                        WarpOperation::Sampled => {
                            sample::nearest(source, sx, sy, ch, SampleBorder::Clamp)
                        }
                    };
                    out.set_pixel_unchecked(x, y, ch, val);
                }
            }
        }
    }
}
