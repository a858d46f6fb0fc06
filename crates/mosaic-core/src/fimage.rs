//! FImage - Floating-point multi-channel image
//!
//! `FImage` is a dense W×H×C array of `f32` values, the pixel container
//! used throughout the library. Intensities are unconstrained floats;
//! the I/O layer maps 8-bit samples into [0, 1] on read.
//!
//! # Examples
//!
//! ```
//! use mosaic_core::FImage;
//!
//! // Create a 100x100 three-channel image
//! let mut img = FImage::new(100, 100, 3).unwrap();
//!
//! // Set and get pixel values
//! img.set_pixel(10, 20, 0, 0.5).unwrap();
//! assert_eq!(img.get_pixel(10, 20, 0).unwrap(), 0.5);
//! ```

use crate::error::{Error, Result};

/// Floating-point multi-channel image
///
/// A dense 2D array of `f32` samples with one or more channels per pixel.
///
/// # Memory Layout
///
/// Data is stored channel-interleaved in row-major order with no padding.
/// The sample for channel `ch` of the pixel at (x, y) is at index
/// `(y * width + x) * channels + ch`.
#[derive(Debug, Clone, PartialEq)]
pub struct FImage {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Samples per pixel
    channels: u32,
    /// Sample data (row-major, channel-interleaved, no padding)
    data: Vec<f32>,
}

impl FImage {
    /// Create a new FImage with all samples set to zero
    ///
    /// # Arguments
    ///
    /// * `width` - Width in pixels (must be > 0)
    /// * `height` - Height in pixels (must be > 0)
    /// * `channels` - Samples per pixel (must be > 0)
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if any dimension is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use mosaic_core::FImage;
    ///
    /// let img = FImage::new(640, 480, 1).unwrap();
    /// assert_eq!(img.width(), 640);
    /// assert_eq!(img.height(), 480);
    /// assert_eq!(img.channels(), 1);
    /// ```
    pub fn new(width: u32, height: u32, channels: u32) -> Result<Self> {
        if width == 0 || height == 0 || channels == 0 {
            return Err(Error::InvalidDimension {
                width,
                height,
                channels,
            });
        }

        let size = (width as usize) * (height as usize) * (channels as usize);
        let data = vec![0.0f32; size];

        Ok(FImage {
            width,
            height,
            channels,
            data,
        })
    }

    /// Create a new FImage with all samples set to the specified value
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if any dimension is 0.
    pub fn new_with_value(width: u32, height: u32, channels: u32, value: f32) -> Result<Self> {
        let mut img = FImage::new(width, height, channels)?;
        img.data.fill(value);
        Ok(img)
    }

    /// Create an FImage from raw data
    ///
    /// # Arguments
    ///
    /// * `width` - Width in pixels
    /// * `height` - Height in pixels
    /// * `channels` - Samples per pixel
    /// * `data` - Sample data, row-major and channel-interleaved
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions are invalid or data length doesn't match.
    pub fn from_data(width: u32, height: u32, channels: u32, data: Vec<f32>) -> Result<Self> {
        if width == 0 || height == 0 || channels == 0 {
            return Err(Error::InvalidDimension {
                width,
                height,
                channels,
            });
        }

        let expected_size = (width as usize) * (height as usize) * (channels as usize);
        if data.len() != expected_size {
            return Err(Error::InvalidParameter(format!(
                "data length {} doesn't match {}x{}x{} = {}",
                data.len(),
                width,
                height,
                channels,
                expected_size
            )));
        }

        Ok(FImage {
            width,
            height,
            channels,
            data,
        })
    }

    /// Get the image width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of samples per pixel
    #[inline]
    pub fn channels(&self) -> u32 {
        self.channels
    }

    /// Get the image shape as (width, height, channels)
    #[inline]
    pub fn dimensions(&self) -> (u32, u32, u32) {
        (self.width, self.height, self.channels)
    }

    #[inline]
    fn index(&self, x: u32, y: u32, ch: u32) -> usize {
        ((y as usize) * (self.width as usize) + (x as usize)) * (self.channels as usize)
            + (ch as usize)
    }

    /// Get the sample value for channel `ch` at (x, y)
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if coordinates or channel are out
    /// of range.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32, ch: u32) -> Result<f32> {
        if x >= self.width || y >= self.height || ch >= self.channels {
            return Err(Error::IndexOutOfBounds {
                index: self.index(x.min(self.width), y.min(self.height), ch),
                len: self.data.len(),
            });
        }
        Ok(self.data[self.index(x, y, ch)])
    }

    /// Set the sample value for channel `ch` at (x, y)
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if coordinates or channel are out
    /// of range.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, ch: u32, value: f32) -> Result<()> {
        if x >= self.width || y >= self.height || ch >= self.channels {
            return Err(Error::IndexOutOfBounds {
                index: self.index(x.min(self.width), y.min(self.height), ch),
                len: self.data.len(),
            });
        }
        let idx = self.index(x, y, ch);
        self.data[idx] = value;
        Ok(())
    }

    /// Get the sample value at (x, y, ch) without bounds checking
    ///
    /// # Panics
    ///
    /// Panics if the coordinates or channel are out of range.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32, ch: u32) -> f32 {
        self.data[self.index(x, y, ch)]
    }

    /// Set the sample value at (x, y, ch) without bounds checking
    ///
    /// # Panics
    ///
    /// Panics if the coordinates or channel are out of range.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, ch: u32, value: f32) {
        let idx = self.index(x, y, ch);
        self.data[idx] = value;
    }

    /// Get raw access to the sample data
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Get mutable access to the sample data
    #[inline]
    pub fn data_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Set all samples to the specified value
    pub fn set_all(&mut self, value: f32) {
        self.data.fill(value);
    }

    /// Clear all samples to zero
    pub fn clear(&mut self) {
        self.data.fill(0.0);
    }

    /// Create an image with the same shape, zeroed data
    pub fn create_template(&self) -> FImage {
        FImage {
            width: self.width,
            height: self.height,
            channels: self.channels,
            data: vec![0.0; self.data.len()],
        }
    }

    /// Check that another image has the same shape
    ///
    /// # Errors
    ///
    /// Returns `Error::IncompatibleSizes` on a width/height mismatch and
    /// `Error::IncompatibleChannels` on a channel-count mismatch.
    pub fn check_same_shape(&self, other: &FImage) -> Result<()> {
        if self.width != other.width || self.height != other.height {
            return Err(Error::IncompatibleSizes(
                self.width,
                self.height,
                other.width,
                other.height,
            ));
        }
        if self.channels != other.channels {
            return Err(Error::IncompatibleChannels(self.channels, other.channels));
        }
        Ok(())
    }
}
