use crate::error::{PerceptronError, Result};

/// Number of pixels in a `width` x `height` grid.
///
/// # Errors
/// `InvalidDimensions` if either side is zero or the product overflows.
pub fn grid_area(width: usize, height: usize) -> Result<usize> {
    match width.checked_mul(height) {
        Some(area) if area > 0 => Ok(area),
        _ => Err(PerceptronError::InvalidDimensions { width, height }),
    }
}

/// A fixed-size black-and-white image stored row-major.
///
/// Pixel `(x, y)` is column `x` of row `y`. Every pixel is 0 or 1; this is
/// checked once at construction so the forward pass can read pixels without
/// re-validating them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryImage {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl BinaryImage {
    /// Builds an image from `[height][width]` nested rows.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<BinaryImage> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.len());
        if width == 0 || height == 0 {
            return Err(PerceptronError::InvalidDimensions { width, height });
        }

        let mut pixels = Vec::with_capacity(grid_area(width, height)?);
        for (y, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(PerceptronError::RaggedImage {
                    row: y,
                    expected: width,
                    found: row.len(),
                });
            }
            pixels.extend(row);
        }

        BinaryImage::from_pixels(width, height, pixels)
    }

    /// Builds an image from a flat row-major buffer of `width * height` pixels.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<u8>) -> Result<BinaryImage> {
        let area = grid_area(width, height)?;
        if pixels.len() != area {
            return Err(PerceptronError::BufferSize { expected: area, found: pixels.len() });
        }
        if let Some(i) = pixels.iter().position(|&p| p > 1) {
            return Err(PerceptronError::NonBinaryPixel {
                x: i % width,
                y: i / width,
                value: pixels[i],
            });
        }

        Ok(BinaryImage { width, height, pixels })
    }

    /// An all-zero image.
    pub fn blank(width: usize, height: usize) -> Result<BinaryImage> {
        let area = grid_area(width, height)?;
        BinaryImage::from_pixels(width, height, vec![0; area])
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Pixel value at column `x`, row `y`.
    ///
    /// # Panics
    /// Panics if `(x, y)` is outside the image.
    pub fn pixel(&self, x: usize, y: usize) -> u8 {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} image",
            self.width,
            self.height
        );
        self.pixels[y * self.width + x]
    }

    /// Turns one pixel on or off.
    ///
    /// # Panics
    /// Panics if `(x, y)` is outside the image.
    pub fn set(&mut self, x: usize, y: usize, on: bool) {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} image",
            self.width,
            self.height
        );
        self.pixels[y * self.width + x] = on as u8;
    }
}
