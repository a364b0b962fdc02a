use ardubmp_core::PackedBitmap;
use embedded_graphics::{
    Pixel,
    image::Image,
    pixelcolor::BinaryColor,
    prelude::{DrawTarget, Drawable, OriginDimensions, Point, Size},
};
use log::info;

const LIT: u32 = 0x00FF_FFFF;
const DARK: u32 = 0x0000_0000;

/// Simulated OLED panel: lit pixels are white on black.
pub struct PreviewBuffer {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

impl PreviewBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![DARK; width * height],
        }
    }

    pub fn from_bitmap(bitmap: &PackedBitmap) -> Self {
        let mut buffer = Self::new(bitmap.width as usize, bitmap.height as usize);
        let raw = bitmap.as_image_raw();
        let Ok(()) = Image::new(&raw, Point::zero()).draw(&mut buffer);
        buffer
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }
}

impl OriginDimensions for PreviewBuffer {
    fn size(&self) -> Size {
        Size::new(self.width as u32, self.height as u32)
    }
}

impl DrawTarget for PreviewBuffer {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            if coord.x < 0 || coord.y < 0 {
                continue;
            }
            let (x, y) = (coord.x as usize, coord.y as usize);
            if x < self.width && y < self.height {
                self.pixels[y * self.width + x] = match color {
                    BinaryColor::On => LIT,
                    BinaryColor::Off => DARK,
                };
            }
        }
        Ok(())
    }
}

fn scale_for(width: usize, height: usize) -> minifb::Scale {
    match width.max(height * 2) {
        0..=160 => minifb::Scale::X4,
        161..=320 => minifb::Scale::X2,
        _ => minifb::Scale::X1,
    }
}

/// Shows the bitmap until the window is closed or Escape is pressed.
pub fn show(bitmap: &PackedBitmap) -> Result<(), minifb::Error> {
    let buffer = PreviewBuffer::from_bitmap(bitmap);
    let options = minifb::WindowOptions {
        borderless: false,
        title: true,
        resize: true,
        scale: scale_for(buffer.width, buffer.height),
        ..minifb::WindowOptions::default()
    };
    let title = format!("ArduBMP preview {}x{}", bitmap.width, bitmap.height);
    let mut window = minifb::Window::new(&title, buffer.width, buffer.height, options)?;
    window.set_target_fps(30);
    info!("Showing preview, press Escape to close");

    while window.is_open() && !window.is_key_down(minifb::Key::Escape) {
        window.update_with_buffer(buffer.pixels(), buffer.width, buffer.height)?;
    }
    Ok(())
}
