//! Supported color spaces

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ConversionError;

/// A color representation understood by the converter.
///
/// The space fixes how many components a value carries and what range
/// each of them lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorSpace {
    /// Red, green, blue in 0-255
    Srgb,
    /// Hue in degrees, saturation and value in 0-100
    Hsv,
    /// Cyan, magenta, yellow, key in 0-100
    Cmyk,
    /// Six hexadecimal digits
    Hex,
}

impl ColorSpace {
    /// Every supported space
    pub const ALL: [ColorSpace; 4] = [
        ColorSpace::Srgb,
        ColorSpace::Hsv,
        ColorSpace::Cmyk,
        ColorSpace::Hex,
    ];

    /// Number of components a value in this space carries
    pub fn arity(self) -> usize {
        self.channel_names().len()
    }

    /// Channel names, in component order
    pub fn channel_names(self) -> &'static [&'static str] {
        match self {
            ColorSpace::Srgb => &["red", "green", "blue"],
            ColorSpace::Hsv => &["hue", "saturation", "value"],
            ColorSpace::Cmyk => &["cyan", "magenta", "yellow", "key"],
            ColorSpace::Hex => &["hex"],
        }
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColorSpace::Srgb => "sRGB",
            ColorSpace::Hsv => "HSV",
            ColorSpace::Cmyk => "CMYK",
            ColorSpace::Hex => "HEX",
        };
        f.write_str(name)
    }
}

impl FromStr for ColorSpace {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "srgb" | "rgb" => Ok(ColorSpace::Srgb),
            "hsv" | "hsl" | "hsb" => Ok(ColorSpace::Hsv),
            "cmyk" => Ok(ColorSpace::Cmyk),
            "hex" => Ok(ColorSpace::Hex),
            _ => Err(ConversionError::UnknownColorSpace { name: s.to_string() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arity() {
        assert_eq!(ColorSpace::Srgb.arity(), 3);
        assert_eq!(ColorSpace::Hsv.arity(), 3);
        assert_eq!(ColorSpace::Cmyk.arity(), 4);
        assert_eq!(ColorSpace::Hex.arity(), 1);
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("sRGB".parse::<ColorSpace>().unwrap(), ColorSpace::Srgb);
        assert_eq!("HSL".parse::<ColorSpace>().unwrap(), ColorSpace::Hsv);
        assert_eq!(" cmyk ".parse::<ColorSpace>().unwrap(), ColorSpace::Cmyk);
        assert_eq!("Hex".parse::<ColorSpace>().unwrap(), ColorSpace::Hex);
    }

    #[test]
    fn test_from_str_unknown() {
        let err = "lab".parse::<ColorSpace>().unwrap_err();
        assert!(matches!(err, ConversionError::UnknownColorSpace { ref name } if name == "lab"));
    }

    #[test]
    fn test_display_parses_back() {
        for space in ColorSpace::ALL {
            assert_eq!(space.to_string().parse::<ColorSpace>().unwrap(), space);
        }
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&ColorSpace::Cmyk).unwrap(), "\"cmyk\"");
        let space: ColorSpace = serde_json::from_str("\"srgb\"").unwrap();
        assert_eq!(space, ColorSpace::Srgb);
    }
}
