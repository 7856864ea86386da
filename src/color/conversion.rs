//! Color space conversion
//!
//! Provides conversions between the four supported representations:
//! - sRGB <-> HSV (hexcone model)
//! - sRGB <-> CMYK (naive, no ICC profile)
//! - sRGB <-> hexadecimal
//!
//! Pairs without a direct formula go through sRGB, so HSV -> CMYK is
//! HSV -> sRGB -> CMYK.

use serde::{Deserialize, Serialize};

use crate::color::{hex, ColorSpace};
use crate::config::{ConverterConfig, HexRounding};
use crate::constants::{channel, defaults};
use crate::{Color, ConversionError, Result};

/// A color expressed in one specific space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "space", content = "components", rename_all = "lowercase")]
pub enum ColorValue {
    /// Red, green, blue (0-255)
    Srgb([f64; 3]),
    /// Hue (degrees), saturation (0-100), value (0-100)
    Hsv([f64; 3]),
    /// Cyan, magenta, yellow, key (0-100)
    Cmyk([f64; 4]),
    /// Hex digits; normalized to six lowercase digits on use
    Hex(String),
}

impl ColorValue {
    /// The space this value is expressed in
    pub fn space(&self) -> ColorSpace {
        match self {
            ColorValue::Srgb(_) => ColorSpace::Srgb,
            ColorValue::Hsv(_) => ColorSpace::Hsv,
            ColorValue::Cmyk(_) => ColorSpace::Cmyk,
            ColorValue::Hex(_) => ColorSpace::Hex,
        }
    }

    /// Parse string components into a value.
    ///
    /// Missing components are filled with `"0.0"` and surplus ones are
    /// ignored. The hex string is normalized.
    ///
    /// # Errors
    ///
    /// Returns `ConversionError` naming the first component that is not a
    /// finite number.
    pub fn parse<S: AsRef<str>>(values: &[S], space: ColorSpace) -> Result<Self> {
        let inputs = normalize_arity(values, space);
        Self::parse_exact(&inputs, space)
    }

    fn parse_exact(inputs: &[String], space: ColorSpace) -> Result<Self> {
        Ok(match space {
            ColorSpace::Srgb => ColorValue::Srgb(parse_components(inputs, space)?),
            ColorSpace::Hsv => ColorValue::Hsv(parse_components(inputs, space)?),
            ColorSpace::Cmyk => ColorValue::Cmyk(parse_components(inputs, space)?),
            ColorSpace::Hex => ColorValue::Hex(hex::normalize(&inputs[0])),
        })
    }

    /// Check that every numeric component is finite
    pub fn validate(&self) -> Result<()> {
        let space = self.space();
        let components: &[f64] = match self {
            ColorValue::Srgb(v) | ColorValue::Hsv(v) => v.as_slice(),
            ColorValue::Cmyk(v) => v.as_slice(),
            ColorValue::Hex(_) => return Ok(()),
        };
        for (&value, &field) in components.iter().zip(space.channel_names()) {
            if !value.is_finite() {
                return Err(ConversionError::NonFiniteComponent { space, field, value });
            }
        }
        Ok(())
    }

    /// Canonical form of this value: hue wrapped into [0, 360), hex normalized
    pub fn normalized(&self) -> Self {
        match self {
            ColorValue::Hsv([h, s, v]) => ColorValue::Hsv([normalize_hue(*h), *s, *v]),
            ColorValue::Hex(digits) => ColorValue::Hex(hex::normalize(digits)),
            other => other.clone(),
        }
    }

    /// Render the components as strings
    pub fn to_strings(&self) -> Vec<String> {
        match self {
            ColorValue::Srgb(v) | ColorValue::Hsv(v) => {
                v.iter().copied().map(format_component).collect()
            }
            ColorValue::Cmyk(v) => v.iter().copied().map(format_component).collect(),
            ColorValue::Hex(digits) => vec![hex::normalize(digits)],
        }
    }
}

/// Copy the inputs, padding or truncating to the arity of `space`
fn normalize_arity<S: AsRef<str>>(values: &[S], space: ColorSpace) -> Vec<String> {
    let arity = space.arity();
    if values.len() != arity {
        tracing::trace!(%space, given = values.len(), expected = arity, "component count normalized");
    }
    let mut inputs: Vec<String> = values
        .iter()
        .take(arity)
        .map(|v| v.as_ref().to_string())
        .collect();
    inputs.resize(arity, defaults::PAD_COMPONENT.to_string());
    inputs
}

fn parse_components<const N: usize>(inputs: &[String], space: ColorSpace) -> Result<[f64; N]> {
    let mut out = [0.0; N];
    for ((slot, raw), &field) in out.iter_mut().zip(inputs).zip(space.channel_names()) {
        *slot = parse_component(raw, space, field)?;
    }
    Ok(out)
}

fn parse_component(raw: &str, space: ColorSpace, field: &'static str) -> Result<f64> {
    let value: f64 = raw.trim().parse().map_err(|_| {
        tracing::warn!(%space, field, raw, "rejected malformed color component");
        ConversionError::MalformedComponent {
            space,
            field,
            value: raw.to_string(),
        }
    })?;
    if !value.is_finite() {
        tracing::warn!(%space, field, raw, "rejected non-finite color component");
        return Err(ConversionError::NonFiniteComponent { space, field, value });
    }
    Ok(value)
}

fn format_component(value: f64) -> String {
    // -0 would print as "-0"
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

/// Wrap a hue in degrees into [0, 360)
pub fn normalize_hue(hue: f64) -> f64 {
    let wrapped = hue.rem_euclid(channel::HUE_MAX);
    // rem_euclid can round up to the modulus for tiny negative inputs
    if wrapped >= channel::HUE_MAX {
        0.0
    } else {
        wrapped
    }
}

/// Convert sRGB (0-255) to HSV (degrees, 0-100, 0-100)
pub fn srgb_to_hsv([r, g, b]: [f64; 3]) -> [f64; 3] {
    let r = r / channel::SRGB_MAX;
    let g = g / channel::SRGB_MAX;
    let b = b / channel::SRGB_MAX;

    let c_max = r.max(g).max(b);
    let c_min = r.min(g).min(b);
    let delta = c_max - c_min;

    let hue = if delta == 0.0 {
        0.0
    } else if c_max == r {
        channel::HUE_SECTOR * ((g - b) / delta).rem_euclid(channel::HUE_SECTORS)
    } else if c_max == g {
        channel::HUE_SECTOR * ((b - r) / delta + 2.0)
    } else {
        channel::HUE_SECTOR * ((r - g) / delta + 4.0)
    };

    let saturation = if c_max == 0.0 { 0.0 } else { delta / c_max };

    [
        normalize_hue(hue),
        saturation * channel::PERCENT_MAX,
        c_max * channel::PERCENT_MAX,
    ]
}

/// Convert HSV (degrees, 0-100, 0-100) to sRGB (0-255)
pub fn hsv_to_srgb([h, s, v]: [f64; 3]) -> [f64; 3] {
    let h = normalize_hue(h);
    let v = v / channel::PERCENT_MAX;
    let s = s / channel::PERCENT_MAX;

    let chroma = v * s;
    let x = chroma * (1.0 - ((h / channel::HUE_SECTOR).rem_euclid(2.0) - 1.0).abs());
    let m = v - chroma;

    // h is in [0, 360), so the sector index is 0..=5
    let (r, g, b) = match (h / channel::HUE_SECTOR) as u8 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    [
        (r + m) * channel::SRGB_MAX,
        (g + m) * channel::SRGB_MAX,
        (b + m) * channel::SRGB_MAX,
    ]
}

/// Convert sRGB (0-255) to CMYK (0-100)
///
/// Pure black has no defined ink ratios; it maps to `(0, 0, 0, 100)`.
pub fn srgb_to_cmyk([r, g, b]: [f64; 3]) -> [f64; 4] {
    let r = r / channel::SRGB_MAX;
    let g = g / channel::SRGB_MAX;
    let b = b / channel::SRGB_MAX;

    let k = 1.0 - r.max(g).max(b);
    let remaining = 1.0 - k;
    if remaining.abs() < f64::EPSILON {
        return [0.0, 0.0, 0.0, channel::PERCENT_MAX];
    }

    let c = (1.0 - r - k) / remaining;
    let m = (1.0 - g - k) / remaining;
    let y = (1.0 - b - k) / remaining;

    [
        c * channel::PERCENT_MAX,
        m * channel::PERCENT_MAX,
        y * channel::PERCENT_MAX,
        k * channel::PERCENT_MAX,
    ]
}

/// Convert CMYK (0-100) to sRGB (0-255)
pub fn cmyk_to_srgb([c, m, y, k]: [f64; 4]) -> [f64; 3] {
    let key = 1.0 - k / channel::PERCENT_MAX;
    let ink = |x: f64| channel::SRGB_MAX * (1.0 - x / channel::PERCENT_MAX) * key;
    [ink(c), ink(m), ink(y)]
}

/// Convert sRGB (0-255) to six lowercase hex digits.
///
/// Channels are reduced to integers with `rounding` and clamped to 0-255
/// so that each one fits in two digits.
pub fn srgb_to_hex(rgb: [f64; 3], rounding: HexRounding) -> String {
    let byte = |x: f64| rounding.apply(x).clamp(0.0, channel::SRGB_MAX) as u8;
    hex::format_channels(rgb.map(byte))
}

/// Convert a hex string to sRGB (0-255), sanitizing it first
pub fn hex_to_srgb(digits: &str) -> [f64; 3] {
    hex::split_channels(digits).map(f64::from)
}

/// Converter between color spaces
///
/// Stateless apart from its configuration, so one instance can be shared
/// freely between threads.
#[derive(Debug, Clone, Default)]
pub struct ColorConverter {
    config: ConverterConfig,
}

impl ColorConverter {
    /// Create a converter with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a converter with a custom configuration
    pub fn with_config(config: ConverterConfig) -> Self {
        Self { config }
    }

    /// The active configuration
    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Convert string-encoded components from one space to another.
    ///
    /// # Arguments
    ///
    /// * `values` - Components in `from` order; a single string for hex
    /// * `from`, `to` - Source and target spaces
    ///
    /// # Returns
    ///
    /// Components of the target space. When `from == to` the input comes
    /// back unchanged apart from arity normalization (and hex cleanup).
    ///
    /// # Errors
    ///
    /// Returns `ConversionError` if a numeric component is malformed or
    /// not finite, or if a finite input overflows during conversion.
    pub fn convert<S: AsRef<str>>(
        &self,
        values: &[S],
        from: ColorSpace,
        to: ColorSpace,
    ) -> Result<Vec<String>> {
        let inputs = normalize_arity(values, from);
        let value = ColorValue::parse_exact(&inputs, from)?;

        if from == to {
            return Ok(match value {
                ColorValue::Hex(digits) => vec![digits],
                _ => inputs,
            });
        }

        let output = self.convert_checked(&value, to)?;
        tracing::debug!(%from, %to, input = ?inputs, output = ?output, "converted color");
        Ok(output.to_strings())
    }

    /// Convert a typed value, failing if any stage leaves finite range.
    ///
    /// Huge but finite inputs (a CMYK key of `-1e308`, say) overflow to
    /// infinity in sRGB and turn into NaN further down the chain. The
    /// error names the channel that stopped being finite.
    pub fn convert_checked(&self, value: &ColorValue, to: ColorSpace) -> Result<ColorValue> {
        value.validate()?;
        if value.space() != ColorSpace::Srgb && to != ColorSpace::Srgb {
            ColorValue::Srgb(self.to_srgb(value)).validate()?;
        }
        let output = self.convert_value(value, to);
        output.validate().inspect_err(|e| {
            tracing::warn!(from = %value.space(), %to, error = %e, "conversion overflowed");
        })?;
        Ok(output)
    }

    /// Convert a typed value into another space
    ///
    /// No range checks; see [`ColorConverter::convert_checked`].
    pub fn convert_value(&self, value: &ColorValue, to: ColorSpace) -> ColorValue {
        match to {
            ColorSpace::Srgb => ColorValue::Srgb(self.to_srgb(value)),
            ColorSpace::Hsv => ColorValue::Hsv(self.to_hsv(value)),
            ColorSpace::Cmyk => ColorValue::Cmyk(self.to_cmyk(value)),
            ColorSpace::Hex => ColorValue::Hex(self.to_hex(value)),
        }
    }

    /// sRGB components of any value
    pub fn to_srgb(&self, value: &ColorValue) -> [f64; 3] {
        match value {
            ColorValue::Srgb(rgb) => *rgb,
            ColorValue::Hsv(hsv) => hsv_to_srgb(*hsv),
            ColorValue::Cmyk(cmyk) => cmyk_to_srgb(*cmyk),
            ColorValue::Hex(digits) => hex_to_srgb(digits),
        }
    }

    /// HSV components of any value
    pub fn to_hsv(&self, value: &ColorValue) -> [f64; 3] {
        match value {
            ColorValue::Hsv([h, s, v]) => [normalize_hue(*h), *s, *v],
            other => srgb_to_hsv(self.to_srgb(other)),
        }
    }

    /// CMYK components of any value
    pub fn to_cmyk(&self, value: &ColorValue) -> [f64; 4] {
        match value {
            ColorValue::Cmyk(cmyk) => *cmyk,
            other => srgb_to_cmyk(self.to_srgb(other)),
        }
    }

    /// Normalized hex string of any value
    pub fn to_hex(&self, value: &ColorValue) -> String {
        match value {
            ColorValue::Hex(digits) => hex::normalize(digits),
            other => srgb_to_hex(self.to_srgb(other), self.config.hex_rounding),
        }
    }

    /// Build a [`Color`] using this converter's configuration
    ///
    /// # Errors
    ///
    /// Returns `ConversionError` if a component or the alpha is not usable.
    pub fn color(&self, value: ColorValue, alpha: Option<f64>) -> Result<Color> {
        Color::with_converter(value, alpha, self)
    }
}
