//! Color spaces, conversion and the color value type
//!
//! This module handles conversion between sRGB, HSV, CMYK and hex
//! representations, and a [`Color`] type that keeps all of them in sync.

pub mod conversion;
pub mod hex;
pub mod model;
pub mod space;

pub use conversion::{ColorConverter, ColorValue};
pub use model::Color;
pub use space::ColorSpace;
