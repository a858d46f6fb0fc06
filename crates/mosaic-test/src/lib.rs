//! mosaic-test - Test support for the mosaic library
//!
//! Deterministic synthetic images and comparison helpers shared by the
//! regression tests. Synthetic content is either analytic (gradient,
//! checkerboard) or seeded-random, so tests never depend on image files
//! on disk.

use mosaic_core::FImage;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

/// A linear intensity ramp, distinct per channel
///
/// Sample value is `0.01*x + 0.02*y + 0.1*ch`, so neighboring pixels and
/// channels are all distinguishable.
pub fn gradient_image(width: u32, height: u32, channels: u32) -> FImage {
    let mut img = FImage::new(width, height, channels).expect("valid test dimensions");
    for y in 0..height {
        for x in 0..width {
            for ch in 0..channels {
                let val = 0.01 * x as f32 + 0.02 * y as f32 + 0.1 * ch as f32;
                img.set_pixel_unchecked(x, y, ch, val);
            }
        }
    }
    img
}

/// A checkerboard of `cell`-sized squares alternating between 0 and 1
pub fn checkerboard_image(width: u32, height: u32, channels: u32, cell: u32) -> FImage {
    let mut img = FImage::new(width, height, channels).expect("valid test dimensions");
    for y in 0..height {
        for x in 0..width {
            let val = if ((x / cell) + (y / cell)) % 2 == 0 {
                1.0
            } else {
                0.0
            };
            for ch in 0..channels {
                img.set_pixel_unchecked(x, y, ch, val);
            }
        }
    }
    img
}

/// Uniform random samples in [0, 1), reproducible from the seed
pub fn noise_image(width: u32, height: u32, channels: u32, seed: u64) -> FImage {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut img = FImage::new(width, height, channels).expect("valid test dimensions");
    for v in img.data_mut() {
        *v = rng.random_range(0.0..1.0);
    }
    img
}

/// Largest absolute sample difference between two same-shaped images
///
/// # Panics
///
/// Panics if the images differ in shape.
pub fn max_abs_diff(a: &FImage, b: &FImage) -> f32 {
    a.check_same_shape(b).expect("images must have equal shapes");
    a.data()
        .iter()
        .zip(b.data().iter())
        .map(|(&x, &y)| (x - y).abs())
        .fold(0.0, f32::max)
}

/// Assert that two images agree everywhere within `tol`
///
/// # Panics
///
/// Panics (failing the test) if shapes differ or any sample pair is
/// further apart than `tol`.
pub fn assert_images_close(a: &FImage, b: &FImage, tol: f32) {
    let diff = max_abs_diff(a, b);
    assert!(diff <= tol, "images differ by {diff}, tolerance {tol}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_image_values() {
        let img = gradient_image(10, 10, 2);
        assert_eq!(img.get_pixel(0, 0, 0).unwrap(), 0.0);
        assert!((img.get_pixel(3, 2, 1).unwrap() - 0.17).abs() < 1e-6);
    }

    #[test]
    fn test_checkerboard_alternates() {
        let img = checkerboard_image(8, 8, 1, 2);
        assert_eq!(img.get_pixel(0, 0, 0).unwrap(), 1.0);
        assert_eq!(img.get_pixel(2, 0, 0).unwrap(), 0.0);
        assert_eq!(img.get_pixel(2, 2, 0).unwrap(), 1.0);
    }

    #[test]
    fn test_noise_image_reproducible() {
        let a = noise_image(16, 16, 1, 42);
        let b = noise_image(16, 16, 1, 42);
        assert_eq!(max_abs_diff(&a, &b), 0.0);

        let c = noise_image(16, 16, 1, 43);
        assert!(max_abs_diff(&a, &c) > 0.0);
    }
}
