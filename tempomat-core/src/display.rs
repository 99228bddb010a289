//! Display encodings
//!
//! Pure render helpers for the 24-LED position bar and the four-digit
//! seven-segment readout. The display task feeds these straight into the
//! shift-register drivers.

use core::fmt::Write;

use heapless::String;

/// Number of LEDs in the position bar (one per 100 m of track).
pub const LED_COUNT: u32 = 24;

/// Capacity of the seven-segment readout string.
pub const READOUT_LEN: usize = 8;

/// One-hot LED word for a track position: LED `position/1000` lit.
///
/// Positions past the last LED (the 24000 wrap edge) stay on the last LED.
pub fn position_led_bits(position: u16) -> u32 {
    let index = (position as u32 / 1000).min(LED_COUNT - 1);
    1 << index
}

/// Four-digit readout: throttle in the left pair, velocity in whole m/s in
/// the right pair.
pub fn readout(throttle: u16, velocity: i16) -> String<READOUT_LEN> {
    let mut text = String::new();
    let _ = write!(text, "{:02}{:02}", throttle, velocity / 10);
    text
}

// Segment bits, LSB = segment a through bit 6 = segment g.
const GLYPHS: &[(char, u8)] = &[
    ('0', 0x3F),
    ('1', 0x06),
    ('2', 0x5B),
    ('3', 0x4F),
    ('4', 0x66),
    ('5', 0x6D),
    ('6', 0x7D),
    ('7', 0x07),
    ('8', 0x7F),
    ('9', 0x6F),
    ('-', 0x40),
    (' ', 0x00),
];

/// Seven-segment glyph for a readout character; unknown characters render
/// blank.
pub fn segment_glyph(c: char) -> u8 {
    GLYPHS
        .iter()
        .find(|(glyph, _)| *glyph == c)
        .map(|(_, bits)| *bits)
        .unwrap_or(0x00)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_led_is_one_hot() {
        assert_eq!(position_led_bits(0), 1);
        assert_eq!(position_led_bits(999), 1);
        assert_eq!(position_led_bits(1000), 1 << 1);
        assert_eq!(position_led_bits(12500), 1 << 12);
        assert_eq!(position_led_bits(23999), 1 << 23);
    }

    #[test]
    fn test_position_wrap_edge_stays_on_last_led() {
        assert_eq!(position_led_bits(24000), 1 << 23);
    }

    #[test]
    fn test_readout_pairs_throttle_and_velocity() {
        assert_eq!(readout(80, 700).as_str(), "8070");
        assert_eq!(readout(4, 265).as_str(), "0426");
        assert_eq!(readout(0, 0).as_str(), "0000");
    }

    #[test]
    fn test_readout_truncates_velocity_to_whole_units() {
        assert_eq!(readout(12, 259).as_str(), "1225");
    }

    #[test]
    fn test_segment_glyphs() {
        assert_eq!(segment_glyph('0'), 0x3F);
        assert_eq!(segment_glyph('8'), 0x7F);
        assert_eq!(segment_glyph('-'), 0x40);
        assert_eq!(segment_glyph(' '), 0x00);
        // Unknown characters blank rather than glitch
        assert_eq!(segment_glyph('x'), 0x00);
    }
}
