//! mosaic-transform - Homography estimation, warping, and stitching
//!
//! This crate carries the geometric core of the mosaic library:
//!
//! - Homography estimation from 4 point correspondences (linear system
//!   solve with a pinned projective scale)
//! - Bounding-box prediction for an image's extent under a homography
//! - Inverse-mapped warping with selectable sampling (nearest-neighbor
//!   or bilinear), over the full canvas or only the mapped region
//! - Two-image stitching onto a union-extent canvas

pub mod error;
pub mod homography;
pub mod stitch;
pub mod warp;

pub use error::{TransformError, TransformResult};
pub use homography::{Homography, predict_bounding_box};
pub use stitch::stitch;
pub use warp::{WarpOperation, warp_into, warp_into_box};
