//! Planar projective transforms (homographies)
//!
//! A homography is a 3×3 matrix mapping one image plane to another in
//! homogeneous coordinates:
//!
//! ```text
//! | x' |   | h00 h01 h02 |   | x |
//! | y' | ~ | h10 h11 h12 | * | y |
//! | w' |   | h20 h21 h22 |   | 1 |
//! ```
//!
//! with the 2D result recovered as `(x'/w', y'/w')`. Four point
//! correspondences in general position determine a homography up to
//! scale; [`Homography::estimate`] fixes the scale by pinning the
//! bottom-right entry to 1.

use crate::{TransformError, TransformResult};
use mosaic_core::{BoundingBox, Correspondence, Point};
use nalgebra::{Matrix3, SMatrix, SVector, Vector3};
use std::ops::Mul;

/// A 3×3 projective transform between two image planes
///
/// Value type: produced whole by estimation or a constructor and never
/// mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Homography {
    m: Matrix3<f64>,
}

impl Default for Homography {
    fn default() -> Self {
        Self::identity()
    }
}

impl Homography {
    /// The identity transform
    pub fn identity() -> Self {
        Self {
            m: Matrix3::identity(),
        }
    }

    /// A pure translation by (tx, ty)
    pub fn translation(tx: f64, ty: f64) -> Self {
        Self {
            m: Matrix3::new(1.0, 0.0, tx, 0.0, 1.0, ty, 0.0, 0.0, 1.0),
        }
    }

    /// The translation that moves a box's top-left corner to the origin
    ///
    /// Applying the result to `(bbox.x1, bbox.y1)` yields exactly (0, 0).
    pub fn anchor_to_origin(bbox: &BoundingBox) -> Self {
        Self::translation(-bbox.x1 as f64, -bbox.y1 as f64)
    }

    /// Wrap an existing 3×3 matrix
    pub fn from_matrix(m: Matrix3<f64>) -> Self {
        Self { m }
    }

    /// Get the underlying 3×3 matrix
    pub fn matrix(&self) -> &Matrix3<f64> {
        &self.m
    }

    /// Estimate the homography mapping each source point onto its target
    ///
    /// Builds the 9×9 linear system `A·t = b` over the flattened matrix
    /// entries. Correspondence `i` contributes rows `2i` and `2i+1`:
    ///
    /// ```text
    /// | x  y  1  0  0  0  -x'x  -x'y  -x' |       | 0 |
    /// | 0  0  0  x  y  1  -y'x  -y'y  -y' | · t = | 0 |
    /// ```
    ///
    /// which ties the projective denominator `h20*x + h21*y + h22` into
    /// the otherwise rank-8 system. The ninth equation pins `h22 = 1`,
    /// removing the scale ambiguity. The system is solved by LU
    /// decomposition and reshaped row-major into the 3×3 matrix.
    ///
    /// Only the first four correspondences are used; extra pairs are
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns `TransformError::InvalidParameters` for fewer than four
    /// pairs, and `TransformError::SingularMatrix` when the pairs are
    /// degenerate (duplicate or collinear points).
    pub fn estimate(correspondences: &[Correspondence]) -> TransformResult<Self> {
        if correspondences.len() < 4 {
            return Err(TransformError::InvalidParameters(format!(
                "homography estimation needs 4 correspondences, got {}",
                correspondences.len()
            )));
        }

        let mut a = SMatrix::<f64, 9, 9>::zeros();
        let mut b = SVector::<f64, 9>::zeros();

        for (i, c) in correspondences.iter().take(4).enumerate() {
            let x = c.source.x as f64;
            let y = c.source.y as f64;
            let nx = c.target.x as f64;
            let ny = c.target.y as f64;
            let r = 2 * i;

            a[(r, 0)] = x;
            a[(r, 1)] = y;
            a[(r, 2)] = 1.0;
            a[(r, 6)] = -nx * x;
            a[(r, 7)] = -nx * y;
            a[(r, 8)] = -nx;

            a[(r + 1, 3)] = x;
            a[(r + 1, 4)] = y;
            a[(r + 1, 5)] = 1.0;
            a[(r + 1, 6)] = -ny * x;
            a[(r + 1, 7)] = -ny * y;
            a[(r + 1, 8)] = -ny;
        }

        // Ninth equation: h22 = 1
        a[(8, 8)] = 1.0;
        b[8] = 1.0;

        let t = a.lu().solve(&b).ok_or(TransformError::SingularMatrix)?;

        Ok(Self {
            m: Matrix3::new(t[0], t[1], t[2], t[3], t[4], t[5], t[6], t[7], t[8]),
        })
    }

    /// Compute the inverse transform
    ///
    /// # Errors
    ///
    /// Returns `TransformError::SingularMatrix` if the matrix is not
    /// invertible.
    pub fn inverse(&self) -> TransformResult<Self> {
        self.m
            .try_inverse()
            .map(|m| Self { m })
            .ok_or(TransformError::SingularMatrix)
    }

    /// Map a point through the transform, including projective division
    ///
    /// Division by a zero homogeneous component is not guarded; a point
    /// mapped to infinity yields IEEE infinities.
    pub fn apply(&self, p: Point) -> Point {
        let v = self.m * Vector3::new(p.x as f64, p.y as f64, 1.0);
        Point::new((v.x / v.z) as f32, (v.y / v.z) as f32)
    }
}

impl Mul for Homography {
    type Output = Homography;

    /// Compose two transforms: `(a * b).apply(p) == a.apply(b.apply(p))`
    fn mul(self, rhs: Homography) -> Homography {
        Homography { m: self.m * rhs.m }
    }
}

/// Predict the bounding box of an image's extent under a homography
///
/// Maps the four corners (0,0), (0,h), (w,0), (w,h) through `h` with
/// projective division and returns the axis-aligned box enclosing all
/// four projected corners. A corner mapped to infinity (zero homogeneous
/// component) is not guarded.
pub fn predict_bounding_box(width: u32, height: u32, h: &Homography) -> BoundingBox {
    let w = width as f32;
    let ht = height as f32;
    let corners = [
        h.apply(Point::new(0.0, 0.0)),
        h.apply(Point::new(0.0, ht)),
        h.apply(Point::new(w, 0.0)),
        h.apply(Point::new(w, ht)),
    ];
    // Non-empty input, so enclosing always succeeds
    BoundingBox::enclosing(&corners).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_point_close(a: Point, b: Point, tol: f32) {
        assert!(
            (a.x - b.x).abs() < tol && (a.y - b.y).abs() < tol,
            "points differ: ({}, {}) vs ({}, {})",
            a.x,
            a.y,
            b.x,
            b.y
        );
    }

    #[test]
    fn test_identity_apply() {
        let h = Homography::identity();
        let p = Point::new(3.5, -2.0);
        assert_eq!(h.apply(p), p);
    }

    #[test]
    fn test_translation_apply() {
        let h = Homography::translation(10.0, -5.0);
        assert_eq!(h.apply(Point::new(1.0, 2.0)), Point::new(11.0, -3.0));
    }

    #[test]
    fn test_anchor_to_origin() {
        let bbox = BoundingBox::new_unchecked(-12.5, 40.0, 7.25, 90.0);
        let t = Homography::anchor_to_origin(&bbox);
        let p = t.apply(Point::new(bbox.x1, bbox.y1));
        assert_eq!(p, Point::new(0.0, 0.0));
    }

    #[test]
    fn test_estimate_identity() {
        let pairs = [
            Correspondence::from_coords(0.0, 0.0, 0.0, 0.0),
            Correspondence::from_coords(100.0, 0.0, 100.0, 0.0),
            Correspondence::from_coords(0.0, 100.0, 0.0, 100.0),
            Correspondence::from_coords(100.0, 100.0, 100.0, 100.0),
        ];
        let h = Homography::estimate(&pairs).unwrap();
        for (i, &expected) in Matrix3::<f64>::identity().iter().enumerate() {
            assert!(
                (h.matrix()[i] - expected).abs() < 1e-9,
                "entry {} differs: {}",
                i,
                h.matrix()[i]
            );
        }
    }

    #[test]
    fn test_estimate_recovers_correspondences() {
        // General-position pairs with a genuinely projective mapping
        let pairs = [
            Correspondence::from_coords(10.0, 10.0, 15.0, 12.0),
            Correspondence::from_coords(90.0, 15.0, 110.0, 20.0),
            Correspondence::from_coords(20.0, 80.0, 18.0, 95.0),
            Correspondence::from_coords(85.0, 85.0, 100.0, 105.0),
        ];
        let h = Homography::estimate(&pairs).unwrap();
        for c in &pairs {
            assert_point_close(h.apply(c.source), c.target, 1e-3);
        }
    }

    #[test]
    fn test_estimate_pins_scale() {
        let pairs = [
            Correspondence::from_coords(10.0, 10.0, 15.0, 12.0),
            Correspondence::from_coords(90.0, 15.0, 110.0, 20.0),
            Correspondence::from_coords(20.0, 80.0, 18.0, 95.0),
            Correspondence::from_coords(85.0, 85.0, 100.0, 105.0),
        ];
        let h = Homography::estimate(&pairs).unwrap();
        assert!((h.matrix()[(2, 2)] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_estimate_uses_first_four() {
        let mut pairs = vec![
            Correspondence::from_coords(0.0, 0.0, 10.0, 0.0),
            Correspondence::from_coords(100.0, 0.0, 110.0, 0.0),
            Correspondence::from_coords(0.0, 100.0, 10.0, 100.0),
            Correspondence::from_coords(100.0, 100.0, 110.0, 100.0),
        ];
        // A fifth inconsistent pair must be ignored
        pairs.push(Correspondence::from_coords(50.0, 50.0, 0.0, 0.0));
        let h = Homography::estimate(&pairs).unwrap();
        assert_point_close(h.apply(Point::new(50.0, 50.0)), Point::new(60.0, 50.0), 1e-4);
    }

    #[test]
    fn test_estimate_too_few_pairs() {
        let pairs = [
            Correspondence::from_coords(0.0, 0.0, 1.0, 1.0),
            Correspondence::from_coords(1.0, 0.0, 2.0, 1.0),
        ];
        assert!(matches!(
            Homography::estimate(&pairs),
            Err(TransformError::InvalidParameters(_))
        ));
    }

    #[test]
    fn test_estimate_degenerate_pairs() {
        // Four copies of the same correspondence: rank-deficient system
        let c = Correspondence::from_coords(5.0, 5.0, 7.0, 9.0);
        let pairs = [c; 4];
        assert!(matches!(
            Homography::estimate(&pairs),
            Err(TransformError::SingularMatrix)
        ));
    }

    #[test]
    fn test_inverse_round_trip() {
        let pairs = [
            Correspondence::from_coords(10.0, 10.0, 15.0, 12.0),
            Correspondence::from_coords(90.0, 15.0, 110.0, 20.0),
            Correspondence::from_coords(20.0, 80.0, 18.0, 95.0),
            Correspondence::from_coords(85.0, 85.0, 100.0, 105.0),
        ];
        let h = Homography::estimate(&pairs).unwrap();
        let hinv = h.inverse().unwrap();
        let p = Point::new(42.0, 31.0);
        assert_point_close(hinv.apply(h.apply(p)), p, 1e-3);
    }

    #[test]
    fn test_compose() {
        let t1 = Homography::translation(5.0, 0.0);
        let t2 = Homography::translation(0.0, 7.0);
        let p = Point::new(1.0, 1.0);
        assert_eq!((t1 * t2).apply(p), Point::new(6.0, 8.0));
    }

    #[test]
    fn test_predict_bounding_box_identity() {
        let bbox = predict_bounding_box(320, 240, &Homography::identity());
        assert_eq!(bbox, BoundingBox::new_unchecked(0.0, 320.0, 0.0, 240.0));
    }

    #[test]
    fn test_predict_bounding_box_translation() {
        let bbox = predict_bounding_box(100, 50, &Homography::translation(-20.0, 10.0));
        assert_eq!(bbox, BoundingBox::new_unchecked(-20.0, 80.0, 10.0, 60.0));
    }
}
