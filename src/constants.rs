//! Channel ranges and reference values shared by the converters
//!
//! Component scales follow the common "human" conventions rather than
//! normalized floats: sRGB channels in 0-255, percentages in 0-100 and
//! hue in degrees.

/// Numeric ranges of the color channels
pub mod channel {
    /// Upper bound of an sRGB channel
    pub const SRGB_MAX: f64 = 255.0;

    /// Upper bound of saturation, value and the CMYK channels
    pub const PERCENT_MAX: f64 = 100.0;

    /// Hue wraps at this many degrees
    pub const HUE_MAX: f64 = 360.0;

    /// Width of one hue sector in the HSV hexcone
    pub const HUE_SECTOR: f64 = 60.0;

    /// Number of hue sectors in the hexcone
    pub const HUE_SECTORS: f64 = 6.0;
}

/// Hexadecimal color strings
pub mod hex {
    /// Digits in a normalized hex color (two per sRGB channel)
    pub const DIGITS: usize = 6;

    /// Filler used when a hex string is too short
    pub const PAD: char = '0';
}

/// Defaults applied when the caller leaves something out
pub mod defaults {
    /// Alpha used when none is given (fully opaque)
    pub const ALPHA: f64 = 1.0;

    /// Value appended to component lists that are too short
    pub const PAD_COMPONENT: &str = "0.0";
}

/// Comparison tolerances
pub mod tolerance {
    /// Maximum drift allowed when a color is converted away and back
    pub const ROUND_TRIP: f64 = 0.01;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hue_sectors_cover_circle() {
        assert!((channel::HUE_SECTOR * channel::HUE_SECTORS - channel::HUE_MAX).abs() < 1e-12);
    }

    #[test]
    fn test_hex_digits_cover_channels() {
        assert_eq!(hex::DIGITS, 3 * 2);
        assert_eq!(format!("{:x}", u8::MAX).len() * 3, hex::DIGITS);
        assert_eq!(f64::from(u8::MAX), channel::SRGB_MAX);
    }

    #[test]
    fn test_defaults() {
        assert!((0.0..=1.0).contains(&defaults::ALPHA));
        assert!(defaults::PAD_COMPONENT.parse::<f64>().is_ok());
    }
}
