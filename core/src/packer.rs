use alloc::vec::Vec;
use embedded_graphics::{image::ImageRaw, pixelcolor::BinaryColor, prelude::Size};
use log::{debug, trace};

use crate::{
    error::Result,
    grid::{BitGrid, PixelGrid},
    resize::{DisplayLimits, NearestNeighbour, Resample, resize_if_oversized},
    threshold::Threshold,
};

/// Settings for a single conversion.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    pub threshold: Threshold,
    pub limits: DisplayLimits,
}

impl Options {
    pub fn with_threshold(threshold: Threshold) -> Self {
        Self {
            threshold,
            ..Self::default()
        }
    }
}

/// 1bpp bitmap, rows top to bottom, 8 pixels per byte MSB first.
/// Every row starts on a byte boundary; unused low bits of a row's last byte are 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedBitmap {
    pub width: u32,
    pub height: u32,
    pub bytes: Vec<u8>,
}

impl PackedBitmap {
    pub fn bytes_per_row(&self) -> usize {
        self.width.div_ceil(8) as usize
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn pixel(&self, x: u32, y: u32) -> BinaryColor {
        let byte = self.bytes[y as usize * self.bytes_per_row() + x as usize / 8];
        let bit_index = 7 - (x % 8);
        BinaryColor::from((byte >> bit_index) & 1 == 1)
    }

    /// The packed layout matches embedded-graphics' raw 1bpp format,
    /// so the result can be drawn onto any `DrawTarget<Color = BinaryColor>`.
    pub fn as_image_raw(&self) -> ImageRaw<'_, BinaryColor> {
        ImageRaw::new(&self.bytes, self.width)
    }
}

pub fn threshold(grid: &PixelGrid, threshold: Threshold) -> BitGrid {
    let bits = grid
        .pixels()
        .iter()
        .map(|&luma| threshold.apply(luma))
        .collect();
    BitGrid::new(grid.width(), grid.height(), bits)
}

pub fn pack(bits: &BitGrid) -> PackedBitmap {
    let (width, height) = (bits.width(), bits.height());
    let mut bytes = Vec::with_capacity(height as usize * width.div_ceil(8) as usize);
    for y in 0..height {
        let row = bits.row(y);
        for chunk in row.chunks(8) {
            let mut byte = 0u8;
            for (bit, &color) in chunk.iter().enumerate() {
                if color.is_on() {
                    byte |= 1 << (7 - bit);
                }
            }
            bytes.push(byte);
        }
    }
    trace!("Packed {}x{} into {} bytes", width, height, bytes.len());
    PackedBitmap {
        width,
        height,
        bytes,
    }
}

/// Converts with the default 128x64 limits and nearest neighbour resampling.
pub fn convert(grid: PixelGrid, threshold: Threshold) -> Result<PackedBitmap> {
    convert_with(grid, &Options::with_threshold(threshold), &NearestNeighbour)
}

pub fn convert_with(
    grid: PixelGrid,
    options: &Options,
    resampler: &impl Resample,
) -> Result<PackedBitmap> {
    debug!(
        "Converting {}x{} image at threshold {}",
        grid.width(),
        grid.height(),
        options.threshold.value()
    );
    let grid = resize_if_oversized(grid, options.limits, resampler)?;
    Ok(pack(&threshold(&grid, options.threshold)))
}
