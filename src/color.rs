//! Hex color conversion for style values.
//!
//! Style fields keep colors as the raw strings they were set with; these
//! helpers interpret them for a rendering layer.

use egui::Color32;

/// Converts a hex color string (`#rrggbb` or `#rgb`) to Color32.
///
/// Returns `None` when the string is not a hex color.
pub fn hex_to_color32(hex: &str) -> Option<Color32> {
    let hex = hex.trim().strip_prefix('#')?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    match hex.len() {
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color32::from_rgb(r, g, b))
        }
        3 => {
            // #abc expands to #aabbcc
            let mut channels = [0u8; 3];
            for (channel, digit) in channels.iter_mut().zip(hex.chars()) {
                let value = digit.to_digit(16)? as u8;
                *channel = value * 17;
            }
            Some(Color32::from_rgb(channels[0], channels[1], channels[2]))
        }
        _ => None,
    }
}

/// Returns true if the string parses as a hex color
pub fn is_hex_color(value: &str) -> bool {
    hex_to_color32(value).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_digit_hex() {
        assert_eq!(hex_to_color32("#1f2937"), Some(Color32::from_rgb(0x1f, 0x29, 0x37)));
        assert_eq!(hex_to_color32("#FDE68A"), Some(Color32::from_rgb(0xfd, 0xe6, 0x8a)));
    }

    #[test]
    fn test_short_hex() {
        assert_eq!(hex_to_color32("#fff"), Some(Color32::from_rgb(255, 255, 255)));
        assert_eq!(hex_to_color32("#1a2"), Some(Color32::from_rgb(0x11, 0xaa, 0x22)));
    }

    #[test]
    fn test_rejects_malformed() {
        assert_eq!(hex_to_color32("1f2937"), None);
        assert_eq!(hex_to_color32("#12345"), None);
        assert_eq!(hex_to_color32("#gggggg"), None);
        assert_eq!(hex_to_color32("#ééé"), None);
        assert_eq!(hex_to_color32("#+f+f+f"), None);
        assert_eq!(hex_to_color32("#+ff+ff"), None);
        assert!(!is_hex_color("#+f+f+f"));
        assert!(!is_hex_color("red"));
    }
}
