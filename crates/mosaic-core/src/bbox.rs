//! BoundingBox - axis-aligned rectangle regions
//!
//! Rectangles in destination-image pixel space, stored as the corner
//! coordinates `(x1, x2, y1, y2)` with `x1 <= x2` and `y1 <= y2`.
//! Coordinates are floats because boxes typically come from projecting
//! image corners through a homography, and may be negative.

use crate::error::{Error, Result};
use crate::point::Point;

/// An axis-aligned rectangle with float corner coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    /// Left x coordinate
    pub x1: f32,
    /// Right x coordinate
    pub x2: f32,
    /// Top y coordinate
    pub y1: f32,
    /// Bottom y coordinate
    pub y2: f32,
}

impl BoundingBox {
    /// Create a new bounding box
    ///
    /// # Errors
    ///
    /// Returns an error unless `x1 <= x2` and `y1 <= y2`.
    pub fn new(x1: f32, x2: f32, y1: f32, y2: f32) -> Result<Self> {
        if x1 > x2 || y1 > y2 {
            return Err(Error::InvalidParameter(format!(
                "box corners must be ordered: x1={}, x2={}, y1={}, y2={}",
                x1, x2, y1, y2
            )));
        }
        Ok(Self { x1, x2, y1, y2 })
    }

    /// Create a bounding box without validation
    pub const fn new_unchecked(x1: f32, x2: f32, y1: f32, y2: f32) -> Self {
        Self { x1, x2, y1, y2 }
    }

    /// Create a bounding box from two corner points, in any order
    pub fn from_corners(xa: f32, ya: f32, xb: f32, yb: f32) -> Self {
        Self {
            x1: xa.min(xb),
            x2: xa.max(xb),
            y1: ya.min(yb),
            y2: ya.max(yb),
        }
    }

    /// Compute the smallest box enclosing a set of points
    ///
    /// Returns `None` for an empty set.
    pub fn enclosing(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let mut bbox = Self {
            x1: first.x,
            x2: first.x,
            y1: first.y,
            y2: first.y,
        };
        for p in &points[1..] {
            bbox.x1 = bbox.x1.min(p.x);
            bbox.x2 = bbox.x2.max(p.x);
            bbox.y1 = bbox.y1.min(p.y);
            bbox.y2 = bbox.y2.max(p.y);
        }
        Some(bbox)
    }

    /// Get the box width
    #[inline]
    pub fn width(&self) -> f32 {
        self.x2 - self.x1
    }

    /// Get the box height
    #[inline]
    pub fn height(&self) -> f32 {
        self.y2 - self.y1
    }

    /// Check if a point is inside the box (inclusive bounds)
    #[inline]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x1 && x <= self.x2 && y >= self.y1 && y <= self.y2
    }

    /// Compute the smallest box containing both boxes
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            x1: self.x1.min(other.x1),
            x2: self.x2.max(other.x2),
            y1: self.y1.min(other.y1),
            y2: self.y2.max(other.y2),
        }
    }

    /// Translate the box by (dx, dy)
    pub fn translate(&self, dx: f32, dy: f32) -> BoundingBox {
        BoundingBox {
            x1: self.x1 + dx,
            x2: self.x2 + dx,
            y1: self.y1 + dy,
            y2: self.y2 + dy,
        }
    }
}
