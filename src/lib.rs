//! # zcolor
//!
//! Conversion between the color representations people type into forms
//! and config files.
//!
//! This library provides:
//! - sRGB (0-255), HSV (degrees and percentages), CMYK (percentages) and
//!   six-digit hexadecimal representations
//! - Direct formulas for every pair involving sRGB, and two-hop conversion
//!   through sRGB for the rest
//! - A [`Color`] value that stores all four representations plus alpha
//!   and always keeps them consistent
//!
//! ## Example
//!
//! ```rust
//! use zcolor::{convert, Color, ColorSpace};
//!
//! let hsv = convert(&["255", "191", "0"], ColorSpace::Srgb, ColorSpace::Hsv)?;
//! assert_eq!(hsv[1], "100");
//!
//! let amber = Color::from_hex("FFBF00");
//! println!("{} = rgb({}, {}, {})", amber, amber.r(), amber.g(), amber.b());
//! # Ok::<(), zcolor::ConversionError>(())
//! ```

pub mod color;
pub mod config;
pub mod constants;
pub mod error;

pub use color::{Color, ColorConverter, ColorSpace, ColorValue};
pub use config::{AlphaPolicy, ConverterConfig, HexRounding};
pub use error::{ConversionError, Result};

/// Convert string-encoded components between color spaces
///
/// Uses the default [`ColorConverter`]. Component lists that are too short
/// are padded with `"0.0"`, longer ones are truncated, and hex strings are
/// sanitized.
///
/// # Errors
///
/// Returns `ConversionError` if a numeric component is malformed or not
/// finite.
pub fn convert<S: AsRef<str>>(values: &[S], from: ColorSpace, to: ColorSpace) -> Result<Vec<String>> {
    ColorConverter::new().convert(values, from, to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_white() {
        let white = ["255", "255", "255"];
        assert_eq!(convert(&white, ColorSpace::Srgb, ColorSpace::Hex).unwrap(), ["ffffff"]);
        assert_eq!(convert(&white, ColorSpace::Srgb, ColorSpace::Hsv).unwrap(), ["0", "0", "100"]);
        assert_eq!(
            convert(&white, ColorSpace::Srgb, ColorSpace::Cmyk).unwrap(),
            ["0", "0", "0", "0"]
        );
    }

    #[test]
    fn test_convert_black() {
        let black = ["0", "0", "0"];
        assert_eq!(convert(&black, ColorSpace::Srgb, ColorSpace::Hex).unwrap(), ["000000"]);
        assert_eq!(convert(&black, ColorSpace::Srgb, ColorSpace::Hsv).unwrap(), ["0", "0", "0"]);
        assert_eq!(
            convert(&black, ColorSpace::Srgb, ColorSpace::Cmyk).unwrap(),
            ["0", "0", "0", "100"]
        );
    }
}
