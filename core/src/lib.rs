#![no_std]

pub mod error;
pub mod grid;
pub mod packer;
pub mod render;
pub mod resize;
pub mod threshold;


pub use error::ConversionError;
pub use grid::{BitGrid, PixelGrid};
pub use packer::{Options, PackedBitmap, convert, convert_with, pack, threshold};
pub use render::render_literal;
pub use resize::{DisplayLimits, NearestNeighbour, Resample, resize_if_oversized};
pub use threshold::Threshold;

extern crate alloc;
