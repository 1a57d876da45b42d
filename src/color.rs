//! Hex color parsing for the fade overlays.
//!
//! ## Usage
//!
//! Convert a host-supplied hex string plus an opacity into a [`Color`].
use tessera_ui::Color;
use thiserror::Error;

/// Failure to interpret a hex color string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexColorError {
    /// The string is not 3 or 6 hex digits long (ignoring a leading `#`).
    #[error("hex color must have 3 or 6 digits, got {0:?}")]
    BadLength(String),
    /// A character outside `0-9a-fA-F` appeared in the string.
    #[error("invalid hex digit in color {0:?}")]
    BadDigit(String),
}

/// Parses a 3- or 6-digit hex color and applies the given opacity.
///
/// A leading `#` is optional. Each nibble of the 3-digit form is replicated,
/// so `"#abc"` equals `"#aabbcc"`. The returned color's alpha is exactly
/// `alpha`; the red/green/blue components are the decoded channels divided by
/// 255.
pub fn hex_color(hex: &str, alpha: f32) -> Result<Color, HexColorError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    let (r, g, b) = match digits.len() {
        3 => {
            let mut nibbles = digits.chars().map(|c| nibble(c, hex));
            let r = nibbles.next().transpose()?.unwrap_or_default();
            let g = nibbles.next().transpose()?.unwrap_or_default();
            let b = nibbles.next().transpose()?.unwrap_or_default();
            (r * 17, g * 17, b * 17)
        }
        6 => {
            let channel = |range: std::ops::Range<usize>| -> Result<u8, HexColorError> {
                let mut value = 0u8;
                for c in digits[range].chars() {
                    value = value * 16 + nibble(c, hex)?;
                }
                Ok(value)
            };
            (channel(0..2)?, channel(2..4)?, channel(4..6)?)
        }
        _ => return Err(HexColorError::BadLength(hex.to_string())),
    };

    Ok(Color::new(
        f32::from(r) / 255.0,
        f32::from(g) / 255.0,
        f32::from(b) / 255.0,
        alpha,
    ))
}

fn nibble(c: char, original: &str) -> Result<u8, HexColorError> {
    c.to_digit(16)
        .map(|digit| digit as u8)
        .ok_or_else(|| HexColorError::BadDigit(original.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_digit_channels_decode_exactly() {
        let color = hex_color("#336699", 0.5).expect("valid color");
        assert_eq!(color, Color::new(0x33 as f32 / 255.0, 0x66 as f32 / 255.0, 0x99 as f32 / 255.0, 0.5));
    }

    #[test]
    fn three_digit_nibbles_replicate() {
        let short = hex_color("#369", 1.0).expect("valid color");
        let long = hex_color("#336699", 1.0).expect("valid color");
        assert_eq!(short, long);
    }

    #[test]
    fn leading_hash_is_optional() {
        assert_eq!(hex_color("ffffff", 1.0), hex_color("#ffffff", 1.0));
    }

    #[test]
    fn alpha_passes_through_exactly() {
        for alpha in [0.0, 0.25, 0.5, 1.0] {
            let color = hex_color("#000000", alpha).expect("valid color");
            assert_eq!(color, Color::new(0.0, 0.0, 0.0, alpha));
        }
    }

    #[test]
    fn wrong_length_is_rejected() {
        assert!(matches!(
            hex_color("#ffff", 1.0),
            Err(HexColorError::BadLength(_))
        ));
        assert!(matches!(hex_color("", 1.0), Err(HexColorError::BadLength(_))));
    }

    #[test]
    fn non_hex_digits_are_rejected() {
        assert!(matches!(
            hex_color("#gg0000", 1.0),
            Err(HexColorError::BadDigit(_))
        ));
    }
}
