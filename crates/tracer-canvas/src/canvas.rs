//! Pixel grid. Stored row-major: pixel (x, y) = pixels[y * width + x].

use log::debug;
use tracer_math::Color;

use crate::error::{CanvasError, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl Canvas {
    /// Black `width`×`height` canvas.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(CanvasError::ZeroDimension { width, height });
        }
        debug!("allocating {width}x{height} canvas");
        Ok(Self { width, height, pixels: vec![Color::BLACK; width * height] })
    }

    #[inline] pub fn width(&self) -> usize { self.width }
    #[inline] pub fn height(&self) -> usize { self.height }

    /// Store `color` at column `x`, row `y`. Channels are kept as given;
    /// clamping happens only when the canvas is serialized.
    pub fn write_pixel(&mut self, x: usize, y: usize, color: Color) -> Result<()> {
        let idx = self.index(x, y)?;
        self.pixels[idx] = color;
        Ok(())
    }

    pub fn pixel_at(&self, x: usize, y: usize) -> Option<Color> {
        self.index(x, y).ok().map(|i| self.pixels[i])
    }

    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Rows top to bottom, each left to right.
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        self.pixels.chunks_exact(self.width)
    }

    fn index(&self, x: usize, y: usize) -> Result<usize> {
        if x >= self.width || y >= self.height {
            return Err(CanvasError::OutOfBounds { x, y, width: self.width, height: self.height });
        }
        Ok(y * self.width + x)
    }
}
