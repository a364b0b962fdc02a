use std::path::Path;

use ardubmp_core::{ConversionError, PixelGrid, Resample};
use image::{GrayImage, imageops::FilterType};
use log::{error, info};

/// Decodes an image file once and converts it to 8-bit luma.
pub fn load_grid(path: &Path) -> Result<PixelGrid, ConversionError> {
    let image = image::open(path).map_err(|e| {
        error!("Failed to decode {}: {}", path.display(), e);
        ConversionError::DecodeFailure
    })?;
    info!(
        "Loaded {} ({}x{}, {:?})",
        path.display(),
        image.width(),
        image.height(),
        image.color()
    );
    grid_from_luma(image.into_luma8())
}

pub fn grid_from_luma(image: GrayImage) -> Result<PixelGrid, ConversionError> {
    let (width, height) = image.dimensions();
    PixelGrid::new(width, height, image.into_raw())
}

/// Resamples through `image::imageops`.
#[derive(Debug, Clone, Copy)]
pub struct ImageResampler {
    pub filter: FilterType,
}

impl Default for ImageResampler {
    fn default() -> Self {
        Self {
            filter: FilterType::Triangle,
        }
    }
}

impl Resample for ImageResampler {
    fn resample(
        &self,
        grid: &PixelGrid,
        width: u32,
        height: u32,
    ) -> Result<PixelGrid, ConversionError> {
        if width == 0 || height == 0 {
            return Err(ConversionError::EmptyOutput);
        }
        let source = GrayImage::from_raw(grid.width(), grid.height(), grid.pixels().to_vec())
            .ok_or(ConversionError::DecodeFailure)?;
        grid_from_luma(image::imageops::resize(&source, width, height, self.filter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ardubmp_core::{DisplayLimits, Options, Threshold, convert_with, resize_if_oversized};
    use image::{ImageFormat, Luma, Rgb, RgbImage};

    #[test]
    fn resampler_hits_target_size() {
        let grid = PixelGrid::from_fn(256, 128, |x, _| x as u8).unwrap();
        let out = resize_if_oversized(grid, DisplayLimits::default(), &ImageResampler::default())
            .unwrap();
        assert_eq!((out.width(), out.height()), (128, 64));
    }

    #[test]
    fn zero_sized_target_is_an_error() {
        let grid = PixelGrid::from_fn(300, 200, |_, _| 128).unwrap();
        assert_eq!(
            ImageResampler::default().resample(&grid, 0, 64),
            Err(ConversionError::EmptyOutput)
        );
        let options = Options {
            threshold: Threshold::DEFAULT,
            limits: DisplayLimits::new(0, 0),
        };
        assert_eq!(
            convert_with(grid, &options, &ImageResampler::default()),
            Err(ConversionError::EmptyOutput)
        );
    }

    #[test]
    fn uniform_image_stays_uniform() {
        let grid = PixelGrid::from_fn(300, 100, |_, _| 200).unwrap();
        let options = Options::default();
        let bitmap = convert_with(grid, &options, &ImageResampler::default()).unwrap();
        assert_eq!((bitmap.width, bitmap.height), (128, 64));
        assert!(bitmap.bytes.iter().all(|&b| b == 0xFF));
    }

    #[test]
    fn loads_color_png_as_luma() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.png");
        let mut image = RgbImage::new(10, 4);
        image.put_pixel(0, 0, Rgb([255, 255, 255]));
        image.save_with_format(&path, ImageFormat::Png).unwrap();

        let grid = load_grid(&path).unwrap();
        assert_eq!((grid.width(), grid.height()), (10, 4));
        assert_eq!(grid.get(0, 0), 255);
        assert_eq!(grid.get(1, 0), 0);

        let bitmap = ardubmp_core::convert(grid, Threshold::DEFAULT).unwrap();
        assert_eq!(bitmap.bytes, [0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn undecodable_file_is_decode_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"definitely not a png").unwrap();
        assert_eq!(load_grid(&path), Err(ConversionError::DecodeFailure));
        assert_eq!(
            load_grid(&dir.path().join("missing.png")),
            Err(ConversionError::DecodeFailure)
        );
    }

    #[test]
    fn luma_buffer_maps_directly() {
        let mut image = GrayImage::new(2, 1);
        image.put_pixel(1, 0, Luma([77]));
        let grid = grid_from_luma(image).unwrap();
        assert_eq!(grid.row(0), &[0, 77]);
    }
}
