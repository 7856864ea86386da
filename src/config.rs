//! Configuration for the color converter.
//!
//! Controls the few behaviors that are a matter of taste rather than
//! arithmetic: which alpha to assume, what to do with alpha values outside
//! [0, 1], and how fractional sRGB channels become hex digits.
//!
//! # Configuration Loading
//!
//! Configuration can be loaded from JSON files or constructed programmatically:
//!
//! ```no_run
//! use zcolor::ConverterConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = ConverterConfig::from_json_file(Path::new("zcolor.json"))?;
//!
//! // Or use defaults
//! let config = ConverterConfig::default();
//! # Ok::<(), zcolor::ConversionError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::defaults;
use crate::{ConversionError, Result};

/// Converter settings.
///
/// Every field has a default, so a JSON file only needs to name the
/// settings it changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Alpha assumed when a color is built without one
    pub default_alpha: f64,

    /// Handling of alpha values outside [0, 1]
    pub alpha_policy: AlphaPolicy,

    /// How fractional sRGB channels are turned into hex digits
    pub hex_rounding: HexRounding,
}

/// What to do with an alpha outside [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlphaPolicy {
    /// Store alpha exactly as given
    #[default]
    Preserve,
    /// Clamp alpha into [0, 1]
    Clamp,
    /// Fail with `ConversionError::InvalidAlpha`
    Reject,
}

/// Rounding applied to sRGB channels before hex formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HexRounding {
    /// Round to nearest, halves away from zero
    #[default]
    Round,
    /// Drop the fractional part
    Truncate,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            default_alpha: defaults::ALPHA,
            alpha_policy: AlphaPolicy::Preserve,
            hex_rounding: HexRounding::Round,
        }
    }
}

impl AlphaPolicy {
    /// Apply the policy to an alpha value.
    ///
    /// Non-finite alpha is rejected under every policy.
    pub fn apply(self, alpha: f64) -> Result<f64> {
        if !alpha.is_finite() {
            return Err(ConversionError::InvalidAlpha { value: alpha });
        }
        match self {
            AlphaPolicy::Preserve => Ok(alpha),
            AlphaPolicy::Clamp => Ok(alpha.clamp(0.0, 1.0)),
            AlphaPolicy::Reject if (0.0..=1.0).contains(&alpha) => Ok(alpha),
            AlphaPolicy::Reject => Err(ConversionError::InvalidAlpha { value: alpha }),
        }
    }
}

impl HexRounding {
    /// Reduce a channel to the integer that gets hex-encoded
    pub fn apply(self, channel: f64) -> f64 {
        match self {
            HexRounding::Round => channel.round(),
            HexRounding::Truncate => channel.trunc(),
        }
    }
}

impl ConverterConfig {
    /// Parse configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| ConversionError::config("Invalid converter configuration JSON", e))
    }

    /// Load configuration from JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConversionError::config(format!("Cannot read {}", path.display()), e)
        })?;
        Self::from_json_str(&content)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ConversionError::config("Cannot serialize converter configuration", e))?;
        std::fs::write(path, json).map_err(|e| {
            ConversionError::config(format!("Cannot write {}", path.display()), e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ConverterConfig::default();
        assert_eq!(config.default_alpha, 1.0);
        assert_eq!(config.alpha_policy, AlphaPolicy::Preserve);
        assert_eq!(config.hex_rounding, HexRounding::Round);
    }

    #[test]
    fn test_partial_json_takes_defaults() {
        let config = ConverterConfig::from_json_str(r#"{ "hex_rounding": "truncate" }"#).unwrap();
        assert_eq!(config.hex_rounding, HexRounding::Truncate);
        assert_eq!(config.default_alpha, 1.0);
        assert_eq!(config.alpha_policy, AlphaPolicy::Preserve);
    }

    #[test]
    fn test_invalid_json() {
        let err = ConverterConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConversionError::Config { .. }));
    }

    #[test]
    fn test_json_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zcolor.json");

        let config = ConverterConfig {
            default_alpha: 0.5,
            alpha_policy: AlphaPolicy::Clamp,
            hex_rounding: HexRounding::Truncate,
        };
        config.to_json_file(&path).unwrap();

        let loaded = ConverterConfig::from_json_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = ConverterConfig::from_json_file(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(ConversionError::Config { .. })));
    }

    #[test]
    fn test_alpha_policies() {
        assert_eq!(AlphaPolicy::Preserve.apply(1.5).unwrap(), 1.5);
        assert_eq!(AlphaPolicy::Clamp.apply(1.5).unwrap(), 1.0);
        assert_eq!(AlphaPolicy::Clamp.apply(-0.2).unwrap(), 0.0);
        assert_eq!(AlphaPolicy::Reject.apply(0.25).unwrap(), 0.25);
        assert!(AlphaPolicy::Reject.apply(1.01).is_err());
        assert!(AlphaPolicy::Preserve.apply(f64::NAN).is_err());
    }

    #[test]
    fn test_hex_rounding() {
        assert_eq!(HexRounding::Round.apply(190.6), 191.0);
        assert_eq!(HexRounding::Truncate.apply(190.6), 190.0);
        assert_eq!(HexRounding::Round.apply(127.5), 128.0);
    }
}
