use core::{
    num::{IntErrorKind, ParseIntError},
    str::FromStr,
};

use embedded_graphics::pixelcolor::BinaryColor;
use log::warn;

/// Binarization threshold. A pixel is `On` when its luma is strictly greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Threshold(pub u8);

impl Threshold {
    pub const DEFAULT: Threshold = Threshold(128);

    /// Values outside 0..=255 are clamped to the nearest bound.
    pub fn clamped(value: i64) -> Self {
        let clamped = value.clamp(u8::MIN as i64, u8::MAX as i64);
        if clamped != value {
            warn!("Threshold {} out of range, clamped to {}", value, clamped);
        }
        Threshold(clamped as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_on(self, intensity: u8) -> bool {
        intensity > self.0
    }

    pub fn apply(self, intensity: u8) -> BinaryColor {
        BinaryColor::from(self.is_on(intensity))
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<u8> for Threshold {
    fn from(value: u8) -> Self {
        Threshold(value)
    }
}

impl FromStr for Threshold {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<i64>() {
            Ok(value) => Ok(Threshold::clamped(value)),
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow => Ok(Threshold::clamped(i64::MAX)),
                IntErrorKind::NegOverflow => Ok(Threshold::clamped(i64::MIN)),
                _ => Err(e),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_comparison() {
        let t = Threshold(100);
        assert!(!t.is_on(100));
        assert!(t.is_on(101));
        assert_eq!(t.apply(99), BinaryColor::Off);
    }

    #[test]
    fn extremes() {
        assert!(!Threshold(255).is_on(255));
        assert!(Threshold(0).is_on(1));
        assert!(!Threshold(0).is_on(0));
    }

    #[test]
    fn clamps_out_of_range() {
        assert_eq!(Threshold::clamped(-5), Threshold(0));
        assert_eq!(Threshold::clamped(300), Threshold(255));
        assert_eq!(Threshold::clamped(42), Threshold(42));
    }

    #[test]
    fn parses_and_clamps() {
        assert_eq!("128".parse::<Threshold>(), Ok(Threshold(128)));
        assert_eq!(" 999 ".parse::<Threshold>(), Ok(Threshold(255)));
        assert_eq!("-1".parse::<Threshold>(), Ok(Threshold(0)));
        assert!("half".parse::<Threshold>().is_err());
        assert!("".parse::<Threshold>().is_err());
    }

    #[test]
    fn clamps_values_beyond_i64() {
        assert_eq!("99999999999999999999".parse::<Threshold>(), Ok(Threshold(255)));
        assert_eq!("-99999999999999999999".parse::<Threshold>(), Ok(Threshold(0)));
    }

    #[test]
    fn default_is_mid_gray() {
        assert_eq!(Threshold::default().value(), 128);
    }
}
