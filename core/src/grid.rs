use alloc::vec::Vec;
use embedded_graphics::{pixelcolor::BinaryColor, prelude::Size};

use crate::error::{ConversionError, Result};

/// Row-major 8-bit luma pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl PixelGrid {
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ConversionError::EmptyOutput);
        }
        if pixels.len() != width as usize * height as usize {
            return Err(ConversionError::DecodeFailure);
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Builds a grid by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> u8) -> Result<Self> {
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self::new(width, height, pixels)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    pub fn row(&self, y: u32) -> &[u8] {
        let start = y as usize * self.width as usize;
        &self.pixels[start..start + self.width as usize]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.pixels.chunks_exact(self.width as usize)
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

/// Thresholded grid, `On` is a set bit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitGrid {
    width: u32,
    height: u32,
    bits: Vec<BinaryColor>,
}

impl BitGrid {
    pub(crate) fn new(width: u32, height: u32, bits: Vec<BinaryColor>) -> Self {
        debug_assert_eq!(bits.len(), width as usize * height as usize);
        Self {
            width,
            height,
            bits,
        }
    }

    /// Wraps an already binarized row-major grid, `true` is `On`.
    pub fn from_bits(width: u32, height: u32, bits: &[bool]) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ConversionError::EmptyOutput);
        }
        if bits.len() != width as usize * height as usize {
            return Err(ConversionError::DecodeFailure);
        }
        let bits = bits.iter().map(|&on| BinaryColor::from(on)).collect();
        Ok(Self::new(width, height, bits))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn get(&self, x: u32, y: u32) -> BinaryColor {
        self.bits[y as usize * self.width as usize + x as usize]
    }

    pub fn row(&self, y: u32) -> &[BinaryColor] {
        let start = y as usize * self.width as usize;
        &self.bits[start..start + self.width as usize]
    }
}
