use log::debug;

use crate::{
    error::{ConversionError, Result},
    grid::PixelGrid,
};

pub const DEFAULT_WIDTH: u32 = 128;
pub const DEFAULT_HEIGHT: u32 = 64;

/// Largest size an image may have in both axes before it gets scaled down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayLimits {
    pub width: u32,
    pub height: u32,
}

impl DisplayLimits {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Only a grid exceeding the limits in *both* dimensions is oversized.
    pub fn is_exceeded_by(&self, width: u32, height: u32) -> bool {
        width > self.width && height > self.height
    }

    /// A zero sized display cannot hold a bitmap.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ConversionError::EmptyOutput);
        }
        Ok(())
    }
}

impl Default for DisplayLimits {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

pub trait Resample {
    /// Returns a grid of exactly `width` x `height`, or an error if it cannot be built.
    fn resample(&self, grid: &PixelGrid, width: u32, height: u32) -> Result<PixelGrid>;
}

/// Picks the source pixel under the center of each target pixel.
#[derive(Debug, Default, Clone, Copy)]
pub struct NearestNeighbour;

impl Resample for NearestNeighbour {
    fn resample(&self, grid: &PixelGrid, width: u32, height: u32) -> Result<PixelGrid> {
        if width == 0 || height == 0 {
            return Err(ConversionError::EmptyOutput);
        }
        let (src_w, src_h) = (grid.width() as u64, grid.height() as u64);
        let sample = |dst: u32, dst_len: u32, src_len: u64| -> u32 {
            let pos = (2 * dst as u64 + 1) * src_len / (2 * dst_len as u64);
            pos.min(src_len - 1) as u32
        };
        PixelGrid::from_fn(width, height, |x, y| {
            grid.get(sample(x, width, src_w), sample(y, height, src_h))
        })
    }
}

pub fn resize_if_oversized(
    grid: PixelGrid,
    limits: DisplayLimits,
    resampler: &impl Resample,
) -> Result<PixelGrid> {
    limits.validate()?;
    if !limits.is_exceeded_by(grid.width(), grid.height()) {
        return Ok(grid);
    }
    debug!(
        "Resizing {}x{} down to {}x{}",
        grid.width(),
        grid.height(),
        limits.width,
        limits.height
    );
    let resized = resampler.resample(&grid, limits.width, limits.height)?;
    if resized.width() != limits.width || resized.height() != limits.height {
        return Err(ConversionError::DecodeFailure);
    }
    Ok(resized)
}
