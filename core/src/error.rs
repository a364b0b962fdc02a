use core::fmt;

/// Failure kinds of a conversion and of the actions around it.
///
/// The core only ever produces `DecodeFailure` and `EmptyOutput`; the other
/// variants belong to the host actions (convert, save, copy) so a caller can
/// report every failure through one type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionError {
    /// Conversion requested without an image source.
    NoImageSelected,
    /// Image data could not be interpreted as a raster.
    DecodeFailure,
    /// Nothing to encode, save or copy.
    EmptyOutput,
    /// Copy requested but the runtime has no clipboard.
    ClipboardUnavailable,
    /// Writing the rendered literal failed.
    IoFailure,
}

impl ConversionError {
    pub fn repr(self) -> &'static str {
        match self {
            ConversionError::NoImageSelected => "Choose image to convert.",
            ConversionError::DecodeFailure => "Image could not be converted to bitmap.",
            ConversionError::EmptyOutput => "No data/bitmap to save or copy.",
            ConversionError::ClipboardUnavailable => {
                "No clipboard available, bitmap was not copied."
            }
            ConversionError::IoFailure => "Bitmap could not be written.",
        }
    }
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.repr())
    }
}

impl core::error::Error for ConversionError {}

pub type Result<T> = core::result::Result<T, ConversionError>;
