use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use ardubmp_core::ConversionError;
use log::{error, info};

pub const HEADER_EXTENSION: &str = "h";

/// Rejects text with nothing to output, returns the trimmed literal otherwise.
pub fn non_empty(text: &str) -> Result<&str, ConversionError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ConversionError::EmptyOutput);
    }
    Ok(text)
}

/// Appends `.h` to paths without an extension.
pub fn header_path(path: &Path) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(HEADER_EXTENSION)
    }
}

/// Writes the literal to disk, truncating any existing file.
pub fn save_literal(path: &Path, text: &str) -> Result<PathBuf, ConversionError> {
    let text = non_empty(text)?;
    let path = header_path(path);
    let result = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&path)
        .and_then(|mut file| {
            file.write_all(text.as_bytes())?;
            file.flush()
        });
    match result {
        Ok(()) => {
            info!("File saved: {}", path.display());
            Ok(path)
        }
        Err(e) => {
            error!("Failed to write {}: {}", path.display(), e);
            Err(ConversionError::IoFailure)
        }
    }
}

/// Prints the literal to stdout.
pub fn print_literal(out: &mut impl Write, text: &str) -> Result<(), ConversionError> {
    let text = non_empty(text)?;
    writeln!(out, "{}", text).map_err(|e| {
        error!("Failed to print bitmap: {}", e);
        ConversionError::IoFailure
    })
}
