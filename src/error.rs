//! Error types for the zcolor library

use thiserror::Error;

use crate::color::ColorSpace;

/// Result type alias for zcolor operations
pub type Result<T> = std::result::Result<T, ConversionError>;

/// Errors raised while converting or constructing colors
///
/// Short component lists and malformed hex strings are normalized rather
/// than reported; only input that cannot be interpreted at all ends up here.
#[derive(Error, Debug)]
pub enum ConversionError {
    /// A component string could not be parsed as a number
    #[error("Malformed {space} component '{field}': {value:?} is not a number")]
    MalformedComponent {
        space: ColorSpace,
        field: &'static str,
        value: String,
    },

    /// A component parsed, but to NaN or infinity
    #[error("Non-finite {space} component '{field}': {value}")]
    NonFiniteComponent {
        space: ColorSpace,
        field: &'static str,
        value: f64,
    },

    /// Stored representations of a color do not derive from one another
    #[error("Inconsistent color #{hex}: no stored representation reproduces the others")]
    InconsistentColor { hex: String },

    /// Color space name not recognized
    #[error("Unknown color space: {name:?}")]
    UnknownColorSpace { name: String },

    /// Alpha is not finite, or outside [0, 1] under a rejecting policy
    #[error("Invalid alpha value: {value}")]
    InvalidAlpha { value: f64 },

    /// Configuration could not be read, written or parsed
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ConversionError {
    /// Create a configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Name of the offending channel, for component errors
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ConversionError::MalformedComponent { field, .. }
            | ConversionError::NonFiniteComponent { field, .. } => Some(field),
            _ => None,
        }
    }

    /// Check if the caller can fix this error by changing its input
    pub fn is_input_error(&self) -> bool {
        !matches!(self, ConversionError::Config { .. })
    }
}
