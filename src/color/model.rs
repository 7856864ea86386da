//! Color value holding every supported representation at once
//!
//! A [`Color`] is built from one representation and derives the others
//! immediately, so reading any of them is a field access. Changing a color
//! always re-derives everything; there is no way to edit a single channel
//! and leave the other spaces stale.
//!
//! A color remembers the converter settings it was built with, and every
//! later change goes through the same settings.

use palette::Srgba;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::color::{ColorConverter, ColorSpace, ColorValue};
use crate::config::{AlphaPolicy, ConverterConfig, HexRounding};
use crate::constants::{channel, defaults};
use crate::{ConversionError, Result};

/// A color in sRGB, HSV, CMYK and hex, plus alpha.
///
/// Equality compares every stored component exactly; the converter
/// settings are not part of it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "StoredColor")]
pub struct Color {
    r: f64,
    g: f64,
    b: f64,
    h: f64,
    s: f64,
    v: f64,
    c: f64,
    m: f64,
    y: f64,
    k: f64,
    hex: String,
    alpha: f64,
    #[serde(skip)]
    config: ConverterConfig,
}

/// Serialized form of a [`Color`], checked before it becomes one
#[derive(Deserialize)]
struct StoredColor {
    r: f64,
    g: f64,
    b: f64,
    h: f64,
    s: f64,
    v: f64,
    c: f64,
    m: f64,
    y: f64,
    k: f64,
    hex: String,
    alpha: f64,
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.srgb() == other.srgb()
            && self.hsv() == other.hsv()
            && self.cmyk() == other.cmyk()
            && self.hex == other.hex
            && self.alpha == other.alpha
    }
}

impl Default for Color {
    /// Opaque black
    fn default() -> Self {
        Self::derive(&ColorValue::Srgb([0.0; 3]), defaults::ALPHA, &ColorConverter::new())
    }
}

impl Color {
    /// Build a color from any representation.
    ///
    /// The given representation is stored as is (hue wrapped into
    /// [0, 360), hex normalized); the others are derived from it. Alpha
    /// defaults to 1.0 when `None`.
    ///
    /// # Errors
    ///
    /// Returns `ConversionError` if a component or the alpha is NaN or
    /// infinite, or if a derived representation overflows.
    pub fn new(value: ColorValue, alpha: Option<f64>) -> Result<Self> {
        Self::with_converter(value, alpha, &ColorConverter::new())
    }

    /// Build a color using a specific converter's configuration
    ///
    /// The configuration sticks to the color: setters and
    /// [`Color::with_alpha`] apply the same alpha policy and hex rounding.
    pub fn with_converter(
        value: ColorValue,
        alpha: Option<f64>,
        converter: &ColorConverter,
    ) -> Result<Self> {
        value.validate()?;
        let config = converter.config();
        let alpha = config
            .alpha_policy
            .apply(alpha.unwrap_or(config.default_alpha))?;
        let color = Self::derive(&value, alpha, converter);
        for space in ColorSpace::ALL {
            color.value(space).validate()?;
        }
        Ok(color)
    }

    fn derive(value: &ColorValue, alpha: f64, converter: &ColorConverter) -> Self {
        let source = value.normalized();
        let [r, g, b] = converter.to_srgb(&source);
        let [h, s, v] = converter.to_hsv(&source);
        let [c, m, y, k] = converter.to_cmyk(&source);
        let hex = converter.to_hex(&source);
        tracing::trace!(space = %source.space(), %hex, "derived color");
        Self {
            r,
            g,
            b,
            h,
            s,
            v,
            c,
            m,
            y,
            k,
            hex,
            alpha,
            config: *converter.config(),
        }
    }

    /// Opaque color from sRGB components (0-255)
    pub fn from_srgb(r: f64, g: f64, b: f64) -> Result<Self> {
        Self::new(ColorValue::Srgb([r, g, b]), None)
    }

    /// Opaque color from HSV components (hue in degrees, 0-100, 0-100)
    pub fn from_hsv(h: f64, s: f64, v: f64) -> Result<Self> {
        Self::new(ColorValue::Hsv([h, s, v]), None)
    }

    /// Opaque color from CMYK components (0-100)
    pub fn from_cmyk(c: f64, m: f64, y: f64, k: f64) -> Result<Self> {
        Self::new(ColorValue::Cmyk([c, m, y, k]), None)
    }

    /// Opaque color from a hex string
    ///
    /// Never fails: the string is sanitized, then padded or truncated to
    /// six digits.
    ///
    /// ```
    /// let amber = zcolor::Color::from_hex("#FFBF00");
    /// assert_eq!(amber.hex_string(), "ffbf00");
    /// ```
    pub fn from_hex(hex: &str) -> Self {
        Self::derive(
            &ColorValue::Hex(hex.to_string()),
            defaults::ALPHA,
            &ColorConverter::new(),
        )
    }

    /// Display color for any representation, without keeping a `Color`
    ///
    /// Same as building the color and calling [`Color::to_srgba`].
    pub fn srgba_from(value: ColorValue, alpha: Option<f64>) -> Result<Srgba<f64>> {
        Ok(Self::new(value, alpha)?.to_srgba())
    }

    /// The same color with a different alpha, under this color's alpha policy
    pub fn with_alpha(mut self, alpha: f64) -> Result<Self> {
        self.alpha = self.config.alpha_policy.apply(alpha)?;
        Ok(self)
    }

    /// Replace this color with one built from sRGB components
    ///
    /// On error the color is left untouched.
    pub fn set_srgb(&mut self, r: f64, g: f64, b: f64, alpha: Option<f64>) -> Result<()> {
        self.replace(ColorValue::Srgb([r, g, b]), alpha)
    }

    /// Replace this color with one built from HSV components
    pub fn set_hsv(&mut self, h: f64, s: f64, v: f64, alpha: Option<f64>) -> Result<()> {
        self.replace(ColorValue::Hsv([h, s, v]), alpha)
    }

    /// Replace this color with one built from CMYK components
    pub fn set_cmyk(&mut self, c: f64, m: f64, y: f64, k: f64, alpha: Option<f64>) -> Result<()> {
        self.replace(ColorValue::Cmyk([c, m, y, k]), alpha)
    }

    /// Replace this color with one built from a hex string
    pub fn set_hex(&mut self, hex: &str, alpha: Option<f64>) -> Result<()> {
        self.replace(ColorValue::Hex(hex.to_string()), alpha)
    }

    fn replace(&mut self, value: ColorValue, alpha: Option<f64>) -> Result<()> {
        *self = Self::with_converter(value, alpha, &ColorConverter::with_config(self.config))?;
        Ok(())
    }

    /// Red (0-255)
    pub fn r(&self) -> f64 {
        self.r
    }

    /// Green (0-255)
    pub fn g(&self) -> f64 {
        self.g
    }

    /// Blue (0-255)
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Hue in degrees, [0, 360)
    pub fn h(&self) -> f64 {
        self.h
    }

    /// Saturation (0-100)
    pub fn s(&self) -> f64 {
        self.s
    }

    /// Value or lightness (0-100)
    pub fn v(&self) -> f64 {
        self.v
    }

    /// Cyan (0-100)
    pub fn c(&self) -> f64 {
        self.c
    }

    /// Magenta (0-100)
    pub fn m(&self) -> f64 {
        self.m
    }

    /// Yellow (0-100)
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Key, i.e. black (0-100)
    pub fn k(&self) -> f64 {
        self.k
    }

    /// Six lowercase hex digits, without `#`
    pub fn hex_string(&self) -> &str {
        &self.hex
    }

    /// Opacity, 0.0 transparent to 1.0 opaque
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Converter settings this color was built with
    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// sRGB components (0-255)
    pub fn srgb(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// HSV components (degrees, 0-100, 0-100)
    pub fn hsv(&self) -> [f64; 3] {
        [self.h, self.s, self.v]
    }

    /// CMYK components (0-100)
    pub fn cmyk(&self) -> [f64; 4] {
        [self.c, self.m, self.y, self.k]
    }

    /// The stored representation for `space`
    pub fn value(&self, space: ColorSpace) -> ColorValue {
        match space {
            ColorSpace::Srgb => ColorValue::Srgb(self.srgb()),
            ColorSpace::Hsv => ColorValue::Hsv(self.hsv()),
            ColorSpace::Cmyk => ColorValue::Cmyk(self.cmyk()),
            ColorSpace::Hex => ColorValue::Hex(self.hex.clone()),
        }
    }

    /// Display projection: sRGB and alpha in 0.0-1.0, clamped
    pub fn to_srgba(&self) -> Srgba<f64> {
        let unit = |x: f64| (x / channel::SRGB_MAX).clamp(0.0, 1.0);
        Srgba::new(unit(self.r), unit(self.g), unit(self.b), self.alpha.clamp(0.0, 1.0))
    }
}

impl TryFrom<StoredColor> for Color {
    type Error = ConversionError;

    /// Accept a stored color only if one of its representations, taken as
    /// the source, reproduces all the others.
    fn try_from(stored: StoredColor) -> Result<Self> {
        let sources = [
            ColorValue::Srgb([stored.r, stored.g, stored.b]),
            ColorValue::Hsv([stored.h, stored.s, stored.v]),
            ColorValue::Cmyk([stored.c, stored.m, stored.y, stored.k]),
            ColorValue::Hex(stored.hex.clone()),
        ];
        let expected = Color {
            r: stored.r,
            g: stored.g,
            b: stored.b,
            h: stored.h,
            s: stored.s,
            v: stored.v,
            c: stored.c,
            m: stored.m,
            y: stored.y,
            k: stored.k,
            hex: stored.hex,
            alpha: stored.alpha,
            config: ConverterConfig::default(),
        };

        for hex_rounding in [HexRounding::Round, HexRounding::Truncate] {
            let converter = ColorConverter::with_config(ConverterConfig {
                alpha_policy: AlphaPolicy::Preserve,
                hex_rounding,
                ..ConverterConfig::default()
            });
            for source in &sources {
                let candidate =
                    Color::with_converter(source.clone(), Some(expected.alpha), &converter);
                if let Some(candidate) = candidate.ok().filter(|c| *c == expected) {
                    return Ok(candidate);
                }
            }
        }

        tracing::warn!(hex = %expected.hex, "rejected inconsistent stored color");
        Err(ConversionError::InconsistentColor { hex: expected.hex })
    }
}

impl From<&Color> for Srgba<f64> {
    fn from(color: &Color) -> Self {
        color.to_srgba()
    }
}

impl TryFrom<Srgba<f64>> for Color {
    type Error = ConversionError;

    fn try_from(srgba: Srgba<f64>) -> Result<Self> {
        let scale = |x: f64| x * channel::SRGB_MAX;
        Color::new(
            ColorValue::Srgb([scale(srgba.red), scale(srgba.green), scale(srgba.blue)]),
            Some(srgba.alpha),
        )
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.hex)
    }
}
