use alloc::string::String;
use core::fmt::{self, Write};

use crate::packer::PackedBitmap;

pub const VALUES_PER_LINE: usize = 16;

/// Renders the bitmap as an Adafruit-GFX style `PROGMEM` array.
///
/// Every line of values ends with a comma, including the last one, and the
/// closing `};` has no trailing newline:
///
/// ```text
/// // Size: 16x1
/// static const unsigned char PROGMEM bitmap[2] = {
///   0xAA, 0xAA,
/// };
/// ```
pub fn render_literal(bitmap: &PackedBitmap) -> String {
    let mut out = String::with_capacity(64 + bitmap.bytes.len() * 6);
    // Writing into a String cannot fail
    let _ = write_literal(&mut out, bitmap);
    out
}

fn write_literal(out: &mut impl Write, bitmap: &PackedBitmap) -> fmt::Result {
    writeln!(out, "// Size: {}x{}", bitmap.width, bitmap.height)?;
    writeln!(
        out,
        "static const unsigned char PROGMEM bitmap[{}] = {{",
        bitmap.bytes.len()
    )?;
    for line in bitmap.bytes.chunks(VALUES_PER_LINE) {
        out.write_str("  ")?;
        for (i, byte) in line.iter().enumerate() {
            if i > 0 {
                out.write_str(", ")?;
            }
            write!(out, "0x{:02X}", byte)?;
        }
        out.write_str(",\n")?;
    }
    out.write_str("};")
}

impl fmt::Display for PackedBitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_literal(f, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::{format, vec};

    #[test]
    fn single_line() {
        let bitmap = PackedBitmap {
            width: 16,
            height: 1,
            bytes: vec![0xAA, 0xAA],
        };
        assert_eq!(
            render_literal(&bitmap),
            "// Size: 16x1\nstatic const unsigned char PROGMEM bitmap[2] = {\n  0xAA, 0xAA,\n};"
        );
    }

    #[test]
    fn wraps_every_sixteen_values() {
        let bitmap = PackedBitmap {
            width: 8,
            height: 17,
            bytes: (0u8..17).collect(),
        };
        let text = render_literal(&bitmap);
        let lines: alloc::vec::Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "// Size: 8x17");
        assert_eq!(lines[1], "static const unsigned char PROGMEM bitmap[17] = {");
        assert_eq!(
            lines[2],
            "  0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A, 0x0B, 0x0C, 0x0D, 0x0E, 0x0F,"
        );
        assert_eq!(lines[3], "  0x10,");
        assert_eq!(lines[4], "};");
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn uppercase_hex() {
        let bitmap = PackedBitmap {
            width: 8,
            height: 1,
            bytes: vec![0xfe],
        };
        assert!(render_literal(&bitmap).contains("  0xFE,\n"));
    }

    #[test]
    fn display_matches_render() {
        let bitmap = PackedBitmap {
            width: 3,
            height: 2,
            bytes: vec![0xE0, 0x00],
        };
        assert_eq!(format!("{bitmap}"), render_literal(&bitmap));
    }
}
