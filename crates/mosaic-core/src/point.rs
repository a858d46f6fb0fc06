//! Point and correspondence types
//!
//! Control points for homography estimation. A `Correspondence` pairs a
//! feature location in the source image with its matched location in the
//! destination image.

/// A 2D point with floating-point coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
}

impl Point {
    /// Create a new point
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A matched pair of points across two images
///
/// `source` lives in the first image's pixel space, `target` in the
/// second image's. Estimation uses exactly four correspondences; extra
/// pairs are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Correspondence {
    /// Feature location in the source image
    pub source: Point,
    /// Matched location in the destination image
    pub target: Point,
}

impl Correspondence {
    /// Create a correspondence from source and target points
    pub fn new(source: Point, target: Point) -> Self {
        Self { source, target }
    }

    /// Create a correspondence from raw coordinates
    pub fn from_coords(sx: f32, sy: f32, tx: f32, ty: f32) -> Self {
        Self {
            source: Point::new(sx, sy),
            target: Point::new(tx, ty),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correspondence_from_coords() {
        let c = Correspondence::from_coords(1.0, 2.0, 3.0, 4.0);
        assert_eq!(c.source, Point::new(1.0, 2.0));
        assert_eq!(c.target, Point::new(3.0, 4.0));
    }
}
