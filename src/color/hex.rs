//! Hexadecimal color strings
//!
//! Hex input is never rejected. Anything that is not a hex digit is
//! dropped, the remainder is lowercased and then padded with zeros or cut
//! down to exactly six digits.

use crate::constants::hex::{DIGITS, PAD};

/// Keep only hex digits, lowercased.
///
/// The result can be any length, including empty.
pub fn sanitize(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_hexdigit)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Sanitize and force the result to exactly six digits.
pub fn normalize(raw: &str) -> String {
    let mut clean = sanitize(raw);
    if clean.len() != DIGITS {
        tracing::trace!(raw, clean = %clean, "hex string padded or truncated");
    }
    clean.truncate(DIGITS);
    while clean.len() < DIGITS {
        clean.push(PAD);
    }
    clean
}

/// Split a normalized hex string into its three channel bytes.
///
/// Input that is not already normalized goes through [`normalize`] first.
pub fn split_channels(hex: &str) -> [u8; 3] {
    let hex = normalize(hex);
    let pair = |i: usize| {
        // normalize() guarantees six ASCII hex digits
        u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16).unwrap_or_default()
    };
    [pair(0), pair(1), pair(2)]
}

/// Render three channel bytes as six lowercase hex digits
pub fn format_channels([r, g, b]: [u8; 3]) -> String {
    format!("{r:02x}{g:02x}{b:02x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_strips_and_lowercases() {
        assert_eq!(sanitize("#FFbf00"), "ffbf00");
        assert_eq!(sanitize("0x12-zz-AB"), "012ab");
        assert_eq!(sanitize("ghijk"), "");
    }

    #[test]
    fn test_sanitize_ignores_non_ascii_digits() {
        assert_eq!(sanitize("١٢٣abc"), "abc");
    }

    #[test]
    fn test_normalize_pads_short_input() {
        assert_eq!(normalize("f"), "f00000");
        assert_eq!(normalize(""), "000000");
        assert_eq!(normalize("0.0"), "000000");
    }

    #[test]
    fn test_normalize_truncates_long_input() {
        assert_eq!(normalize("FFBF00AA"), "ffbf00");
        assert_eq!(normalize("#12345678"), "123456");
    }

    #[test]
    fn test_split_channels() {
        assert_eq!(split_channels("ffbf00"), [255, 191, 0]);
        assert_eq!(split_channels("#0A0B0C"), [10, 11, 12]);
        assert_eq!(split_channels("abc"), [171, 192, 0]);
    }

    #[test]
    fn test_format_channels() {
        assert_eq!(format_channels([255, 191, 0]), "ffbf00");
        assert_eq!(format_channels([0, 0, 0]), "000000");
        assert_eq!(format_channels([1, 2, 3]), "010203");
    }
}
