use std::{path::PathBuf, process::ExitCode};

use ardubmp_core::{
    ConversionError, DisplayLimits, Options, PackedBitmap, Threshold, convert_with, render_literal,
    resize::{DEFAULT_HEIGHT, DEFAULT_WIDTH},
};
use argh::FromArgs;
use log::{error, info};

use crate::{
    actions::{Delivery, deliver},
    clipboard::{Clipboard, SystemClipboard},
    source::{ImageResampler, load_grid},
};

mod actions;
mod clipboard;
mod preview;
mod sink;
mod source;

#[derive(FromArgs)]
/// Convert an image into a monochrome PROGMEM bitmap for small displays
struct Args {
    /// input image (png, jpg, bmp, gif, webp)
    #[argh(option, short = 'i')]
    input: Option<PathBuf>,

    /// binarization threshold 0-255, out of range values are clamped
    #[argh(option, short = 't', default = "Threshold::DEFAULT")]
    threshold: Threshold,

    /// images larger than this width and height are scaled down to it
    #[argh(option, default = "DEFAULT_WIDTH")]
    width: u32,

    /// see --width
    #[argh(option, default = "DEFAULT_HEIGHT")]
    height: u32,

    /// save the bitmap to this file, `.h` is appended when there is no extension
    #[argh(option, short = 'o')]
    output: Option<PathBuf>,

    /// copy the bitmap to the clipboard
    #[argh(switch, short = 'c')]
    copy: bool,

    /// show the bitmap in a window
    #[argh(switch, short = 'p')]
    preview: bool,

    /// don't print the bitmap to stdout
    #[argh(switch, short = 'q')]
    quiet: bool,
}

impl Args {
    fn options(&self) -> Options {
        Options {
            threshold: self.threshold,
            limits: DisplayLimits::new(self.width, self.height),
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();
    let mut clipboard = SystemClipboard::detect();

    let bitmap = match convert_image(&args) {
        Ok(bitmap) => bitmap,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    let literal = render_literal(&bitmap);

    let delivery = Delivery {
        print: !args.quiet,
        save_to: args.output.as_deref(),
        copy: args.copy,
    };
    if !args.copy && !clipboard.available() {
        info!("Clipboard not available, --copy is disabled");
    }
    let mut failed = !deliver(&literal, &delivery, &mut std::io::stdout().lock(), &mut clipboard)
        .is_empty();
    if args.preview {
        if let Err(e) = preview::show(&bitmap) {
            error!("Preview failed: {}", e);
            failed = true;
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn convert_image(args: &Args) -> Result<PackedBitmap, ConversionError> {
    let path = args.input.as_ref().ok_or(ConversionError::NoImageSelected)?;
    let grid = load_grid(path)?;
    let bitmap = convert_with(grid, &args.options(), &ImageResampler::default())?;
    info!(
        "Converted to {}x{} ({} bytes)",
        bitmap.width,
        bitmap.height,
        bitmap.bytes.len()
    );
    Ok(bitmap)
}
