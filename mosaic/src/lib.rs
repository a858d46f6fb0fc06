//! Mosaic - Image stitching library for Rust
//!
//! Estimates planar projective transforms (homographies) from point
//! correspondences, warps image content through them, and composites
//! two images into a single aligned canvas.
//!
//! # Overview
//!
//! - Homography estimation from 4 point correspondences
//! - Bounding-box prediction for transformed image extents
//! - Inverse-mapped warping with nearest-neighbor or bilinear sampling
//! - Two-image stitching onto an unclipped union canvas
//! - PNG / JPEG input and output
//!
//! # Example
//!
//! ```
//! use mosaic::{Correspondence, FImage};
//! use mosaic::transform::stitch;
//!
//! let im1 = FImage::new_with_value(100, 100, 1, 0.25).unwrap();
//! let im2 = FImage::new_with_value(100, 100, 1, 0.75).unwrap();
//!
//! // Four matched points: im2 is im1 shifted right by 10 pixels
//! let pairs = [
//!     Correspondence::from_coords(10.0, 10.0, 20.0, 10.0),
//!     Correspondence::from_coords(80.0, 20.0, 90.0, 20.0),
//!     Correspondence::from_coords(30.0, 70.0, 40.0, 70.0),
//!     Correspondence::from_coords(70.0, 80.0, 80.0, 80.0),
//! ];
//!
//! let pano = stitch(&im1, &im2, &pairs).unwrap();
//! assert!(pano.width() >= 110);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use mosaic_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use mosaic_io as io;
pub use mosaic_transform as transform;
