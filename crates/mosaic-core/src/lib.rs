//! Mosaic Core - Basic data structures for image stitching
//!
//! This crate provides the fundamental data structures used throughout
//! the mosaic image stitching library:
//!
//! - [`FImage`] - Dense floating-point multi-channel image buffer
//! - [`BoundingBox`] - Axis-aligned rectangle with float coordinates
//! - [`Point`] / [`Correspondence`] - Control points for estimation
//! - [`sample`] - Sub-pixel sampling primitives (bilinear, nearest)
//! - [`draw`] - Box overlay drawing for diagnostics

pub mod bbox;
pub mod draw;
pub mod error;
pub mod fimage;
pub mod point;
pub mod sample;

pub use bbox::BoundingBox;
pub use draw::draw_bounding_box;
pub use error::{Error, Result};
pub use fimage::FImage;
pub use point::{Correspondence, Point};
pub use sample::SampleBorder;
