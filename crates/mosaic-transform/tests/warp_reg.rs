//! Warp regression test
//!
//! Exercises the inverse-mapped warp on synthetic content:
//!   1. Identity invertibility: bilinear warping through the identity
//!      reproduces the source at every interior pixel.
//!   2. Full-canvas vs. box-restricted warp equivalence.
//!   3. Sampled vs. interpolated agreement on integer translations.

use mosaic_core::{Correspondence, FImage};
use mosaic_test::{max_abs_diff, noise_image};
use mosaic_transform::{Homography, WarpOperation, predict_bounding_box, warp_into, warp_into_box};

#[test]
fn warp_reg_identity_round_trip() {
    let src = noise_image(48, 36, 3, 1001);
    let mut out = src.create_template();
    warp_into(
        &src,
        &Homography::identity(),
        &mut out,
        WarpOperation::Interpolated,
    )
    .unwrap();

    // The last row and column have no interpolation neighborhood and
    // stay at the canvas fill; every interior pixel must match exactly
    // up to floating-point rounding.
    for y in 0..35u32 {
        for x in 0..47u32 {
            for ch in 0..3u32 {
                let a = src.get_pixel_unchecked(x, y, ch);
                let b = out.get_pixel_unchecked(x, y, ch);
                assert!(
                    (a - b).abs() < 1e-5,
                    "identity warp drifted at ({x}, {y}, {ch}): {a} vs {b}"
                );
            }
        }
    }
}

#[test]
fn warp_reg_box_restricted_matches_full() {
    let src = noise_image(25, 25, 1, 7);
    let pairs = [
        Correspondence::from_coords(0.0, 0.0, 40.0, 35.0),
        Correspondence::from_coords(25.0, 0.0, 68.0, 38.0),
        Correspondence::from_coords(0.0, 25.0, 38.0, 62.0),
        Correspondence::from_coords(25.0, 25.0, 66.0, 60.0),
    ];
    let h = Homography::estimate(&pairs).unwrap();

    for op in [WarpOperation::Sampled, WarpOperation::Interpolated] {
        let mut full = FImage::new_with_value(100, 100, 1, -3.0).unwrap();
        let mut boxed = FImage::new_with_value(100, 100, 1, -3.0).unwrap();
        warp_into(&src, &h, &mut full, op).unwrap();
        warp_into_box(&src, &h, &mut boxed, op).unwrap();

        assert_eq!(max_abs_diff(&full, &boxed), 0.0);
    }
}

#[test]
fn warp_reg_box_restricted_leaves_outside_untouched() {
    let src = noise_image(25, 25, 1, 8);
    let h = Homography::translation(30.0, 40.0);
    let bbox = predict_bounding_box(src.width(), src.height(), &h);

    let mut out = FImage::new_with_value(100, 100, 1, -3.0).unwrap();
    warp_into_box(&src, &h, &mut out, WarpOperation::Interpolated).unwrap();

    for y in 0..100u32 {
        for x in 0..100u32 {
            if !bbox.contains(x as f32, y as f32) {
                assert_eq!(
                    out.get_pixel_unchecked(x, y, 0),
                    -3.0,
                    "pixel ({x}, {y}) outside the predicted box was written"
                );
            }
        }
    }
}

#[test]
fn warp_reg_sampled_matches_interpolated_on_integer_shift() {
    let src = noise_image(30, 30, 2, 55);
    let h = Homography::translation(4.0, 9.0);

    let mut sampled = FImage::new(50, 50, 2).unwrap();
    let mut interp = FImage::new(50, 50, 2).unwrap();
    warp_into(&src, &h, &mut sampled, WarpOperation::Sampled).unwrap();
    warp_into(&src, &h, &mut interp, WarpOperation::Interpolated).unwrap();

    // On an integer shift both samplers land on pixel centers
    assert!(max_abs_diff(&sampled, &interp) < 1e-5);
}
