//! Two-image stitching
//!
//! Aligns a source image into a destination image's frame via an
//! estimated homography, then composites both onto a canvas sized so
//! that neither is clipped. The canvas frame is the union of the two
//! images' bounding boxes, translated so its top-left corner sits at
//! the origin.

use crate::homography::{Homography, predict_bounding_box};
use crate::warp::{WarpOperation, warp_into};
use crate::{TransformError, TransformResult};
use mosaic_core::{BoundingBox, Correspondence, Error, FImage};

/// Stitch two images into one canvas
///
/// The correspondences map points in `im1` onto their matches in `im2`'s
/// frame. Steps:
///
/// 1. Estimate the homography H from the four correspondences.
/// 2. Predict `im1`'s bounding box under H; take `im2`'s own extent at
///    its native origin.
/// 3. Union both boxes and translate the union's top-left corner to
///    (0, 0).
/// 4. Warp `im1` through the translated homography, then `im2` through
///    the translation alone, into a zero-initialized canvas.
///
/// Both passes use bilinear sampling and overwrite-if-mapped
/// compositing, so wherever the two images overlap the second pass wins.
/// The result is a freshly allocated image covering the full union
/// extent.
///
/// # Errors
///
/// Returns an error if the channel counts differ, fewer than four
/// correspondences are supplied, or the correspondences are degenerate.
pub fn stitch(
    im1: &FImage,
    im2: &FImage,
    correspondences: &[Correspondence],
) -> TransformResult<FImage> {
    if im1.channels() != im2.channels() {
        return Err(TransformError::Core(Error::IncompatibleChannels(
            im1.channels(),
            im2.channels(),
        )));
    }

    let h = Homography::estimate(correspondences)?;

    let b1 = predict_bounding_box(im1.width(), im1.height(), &h);
    let b2 = BoundingBox::new_unchecked(
        0.0,
        im2.width() as f32 - 1.0,
        0.0,
        im2.height() as f32 - 1.0,
    );
    let union = b1.union(&b2);

    let t = Homography::anchor_to_origin(&union);

    let out_w = (union.width().ceil() as u32).max(1);
    let out_h = (union.height().ceil() as u32).max(1);
    let mut canvas = FImage::new(out_w, out_h, im1.channels())?;

    warp_into(im1, &(t * h), &mut canvas, WarpOperation::Interpolated)?;
    warp_into(im2, &t, &mut canvas, WarpOperation::Interpolated)?;

    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stitch_channel_mismatch() {
        let im1 = FImage::new(10, 10, 3).unwrap();
        let im2 = FImage::new(10, 10, 1).unwrap();
        let pairs = [Correspondence::default(); 4];
        assert!(matches!(
            stitch(&im1, &im2, &pairs),
            Err(TransformError::Core(Error::IncompatibleChannels(3, 1)))
        ));
    }

    #[test]
    fn test_stitch_degenerate_correspondences() {
        let im1 = FImage::new(10, 10, 1).unwrap();
        let im2 = FImage::new(10, 10, 1).unwrap();
        let pairs = [Correspondence::from_coords(1.0, 1.0, 2.0, 2.0); 4];
        assert!(matches!(
            stitch(&im1, &im2, &pairs),
            Err(TransformError::SingularMatrix)
        ));
    }

    #[test]
    fn test_stitch_too_few_correspondences() {
        let im1 = FImage::new(10, 10, 1).unwrap();
        let im2 = FImage::new(10, 10, 1).unwrap();
        let pairs = [Correspondence::from_coords(1.0, 1.0, 2.0, 2.0); 2];
        assert!(matches!(
            stitch(&im1, &im2, &pairs),
            Err(TransformError::InvalidParameters(_))
        ));
    }
}
