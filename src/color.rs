//! Coarse filament color naming.
//!
//! Slicer metadata carries colors as `#RRGGBB` tokens; the inventory UI wants
//! a short human name. This is a fixed decision table over the decoded
//! channels, not a perceptual color-space match — the thresholds are tuned
//! for common filament swatches.

/// Map a `#RRGGBB` hex token (case-insensitive) to a canonical color name.
///
/// Returns `None` when the input is not a valid 6-digit hex token; callers
/// treat a non-hex token as the display name itself.
pub fn color_name_from_hex(hex: &str) -> Option<&'static str> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some(classify(r, g, b))
}

/// The decision table. First matching rule wins.
fn classify(r: u8, g: u8, b: u8) -> &'static str {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);

    if r > 240 && g > 240 && b > 240 {
        return "White";
    }
    if r < 15 && g < 15 && b < 15 {
        return "Black";
    }
    // Near-neutral but not bright enough for white.
    if max - min < 40 && max < 200 {
        return "Gray";
    }
    if r > 200 && g < 100 && b < 100 {
        return "Red";
    }
    if g > 200 && r < 100 && b < 100 {
        return "Green";
    }
    if b > 200 && r < 100 && g < 100 {
        return "Blue";
    }
    if r > 200 && g > 200 && b < 100 {
        return "Yellow";
    }
    if r > 200 && b > 200 && g < 100 {
        return "Magenta";
    }
    if g > 200 && b > 200 && r < 100 {
        return "Cyan";
    }
    if r > 180 && g > 100 && g < 160 && b < 80 {
        return "Orange";
    }
    if r > 200 && b > 100 && g < 150 {
        return "Pink";
    }
    if max == r && min == b && g < 150 {
        return "Brown";
    }
    "Other"
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== color_name_from_hex tests ====================

    #[test]
    fn test_white_and_black() {
        assert_eq!(color_name_from_hex("#FFFFFF"), Some("White"));
        assert_eq!(color_name_from_hex("#000000"), Some("Black"));
        assert_eq!(color_name_from_hex("#0a0a0a"), Some("Black"));
    }

    #[test]
    fn test_gray_band() {
        // Spread 0, max 128 < 200.
        assert_eq!(color_name_from_hex("#808080"), Some("Gray"));
        assert_eq!(color_name_from_hex("#C0C0C0"), Some("Gray"));
    }

    #[test]
    fn test_primaries() {
        assert_eq!(color_name_from_hex("#FF0000"), Some("Red"));
        assert_eq!(color_name_from_hex("#00E000"), Some("Green"));
        assert_eq!(color_name_from_hex("#0000FF"), Some("Blue"));
    }

    #[test]
    fn test_secondaries() {
        assert_eq!(color_name_from_hex("#FFFF00"), Some("Yellow"));
        assert_eq!(color_name_from_hex("#FF00FF"), Some("Magenta"));
        assert_eq!(color_name_from_hex("#00FFFF"), Some("Cyan"));
    }

    #[test]
    fn test_mixed_bands() {
        assert_eq!(color_name_from_hex("#FF8000"), Some("Orange"));
        assert_eq!(color_name_from_hex("#FF69B4"), Some("Pink"));
        assert_eq!(color_name_from_hex("#8B4513"), Some("Brown"));
    }

    #[test]
    fn test_unmatched_falls_through_to_other() {
        // Saturated violet: outside every band.
        assert_eq!(color_name_from_hex("#7F00FF"), Some("Other"));
    }

    #[test]
    fn test_invalid_tokens() {
        assert_eq!(color_name_from_hex("FFFFFF"), None);
        assert_eq!(color_name_from_hex("#FFF"), None);
        assert_eq!(color_name_from_hex("#GGGGGG"), None);
        assert_eq!(color_name_from_hex("Galaxy Black"), None);
        assert_eq!(color_name_from_hex(""), None);
    }
}
