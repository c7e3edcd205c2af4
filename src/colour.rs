//! Player colours and their packed neopixel codes.
//!
//! A neopixel code is a `u32` with red in bits 16..24, green in bits 8..16
//! and blue in bits 0..8. Only the low 24 bits are ever set.

use smart_leds::RGB8;

/// Packed code for a red piece.
pub const RED: u32 = 0xFF0000;
/// Packed code for a yellow piece.
pub const YELLOW: u32 = 0xFFFF00;
/// Packed code for an empty cell (LED off).
pub const OFF: u32 = 0x000000;

/// Occupancy of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PlayerColour {
    Red = 0,
    Yellow = 1,
    Empty = 2,
}

impl PlayerColour {
    /// Decode a raw discriminant. Returns `None` for values outside the enum.
    pub const fn from_raw(raw: u8) -> Option<PlayerColour> {
        match raw {
            0 => Some(PlayerColour::Red),
            1 => Some(PlayerColour::Yellow),
            2 => Some(PlayerColour::Empty),
            _ => None,
        }
    }

    /// Packed neopixel code for this colour.
    pub const fn neopixel_colour(self) -> u32 {
        player_colour_to_neopixel_colour(self)
    }

    pub fn name(self) -> &'static str {
        match self {
            PlayerColour::Red => "Red",
            PlayerColour::Yellow => "Yellow",
            PlayerColour::Empty => "Empty",
        }
    }

    /// Glyph used when printing the board as plain text
    pub fn symbol(self) -> &'static str {
        match self {
            PlayerColour::Red => "🔴",
            PlayerColour::Yellow => "🟡",
            PlayerColour::Empty => "⚪",
        }
    }
}

/// Map a player colour to the packed code written to the LED.
///
/// Everything that is neither red nor yellow is drawn as off.
pub const fn player_colour_to_neopixel_colour(colour: PlayerColour) -> u32 {
    match colour {
        PlayerColour::Red => RED,
        PlayerColour::Yellow => YELLOW,
        _ => OFF,
    }
}

/// Map a raw discriminant, as it may arrive from a byte buffer or a C
/// caller, to a packed code. Unknown values fall back to off and never fail.
pub const fn neopixel_colour_from_raw(raw: u8) -> u32 {
    match PlayerColour::from_raw(raw) {
        Some(colour) => player_colour_to_neopixel_colour(colour),
        None => OFF,
    }
}

/// Split a packed code into channels. Bits above 23 are ignored.
pub fn unpack_rgb(packed: u32) -> RGB8 {
    RGB8::new(
        ((packed >> 16) & 0xFF) as u8,
        ((packed >> 8) & 0xFF) as u8,
        (packed & 0xFF) as u8,
    )
}

pub fn pack_rgb(colour: RGB8) -> u32 {
    (u32::from(colour.r) << 16) | (u32::from(colour.g) << 8) | u32::from(colour.b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defined_colours() {
        assert_eq!(player_colour_to_neopixel_colour(PlayerColour::Red), 0xFF0000);
        assert_eq!(player_colour_to_neopixel_colour(PlayerColour::Yellow), 0xFFFF00);
        assert_eq!(player_colour_to_neopixel_colour(PlayerColour::Empty), 0x000000);
    }

    #[test]
    fn test_method_matches_free_function() {
        for colour in [PlayerColour::Red, PlayerColour::Yellow, PlayerColour::Empty] {
            assert_eq!(colour.neopixel_colour(), player_colour_to_neopixel_colour(colour));
        }
    }

    #[test]
    fn test_unknown_raw_values_are_off() {
        for raw in 2..=u8::MAX {
            assert_eq!(neopixel_colour_from_raw(raw), 0x000000, "raw value {raw}");
        }
    }

    #[test]
    fn test_known_raw_values() {
        assert_eq!(neopixel_colour_from_raw(PlayerColour::Red as u8), RED);
        assert_eq!(neopixel_colour_from_raw(PlayerColour::Yellow as u8), YELLOW);
        assert_eq!(neopixel_colour_from_raw(PlayerColour::Empty as u8), OFF);
    }

    #[test]
    fn test_from_raw() {
        assert_eq!(PlayerColour::from_raw(0), Some(PlayerColour::Red));
        assert_eq!(PlayerColour::from_raw(1), Some(PlayerColour::Yellow));
        assert_eq!(PlayerColour::from_raw(2), Some(PlayerColour::Empty));
        assert_eq!(PlayerColour::from_raw(3), None);
    }

    #[test]
    fn test_mapping_is_deterministic() {
        for colour in [PlayerColour::Red, PlayerColour::Yellow, PlayerColour::Empty] {
            let first = player_colour_to_neopixel_colour(colour);
            for _ in 0..16 {
                assert_eq!(player_colour_to_neopixel_colour(colour), first);
            }
        }
    }

    #[test]
    fn test_codes_fit_in_24_bits() {
        for raw in 0..=u8::MAX {
            assert_eq!(neopixel_colour_from_raw(raw) & 0xFF00_0000, 0);
        }
    }

    #[test]
    fn test_unpack_channels() {
        assert_eq!(unpack_rgb(RED), RGB8::new(255, 0, 0));
        assert_eq!(unpack_rgb(YELLOW), RGB8::new(255, 255, 0));
        assert_eq!(unpack_rgb(OFF), RGB8::new(0, 0, 0));
        assert_eq!(unpack_rgb(0xAB12_3456), RGB8::new(0x12, 0x34, 0x56));
    }

    #[test]
    fn test_pack_inverts_unpack() {
        assert_eq!(pack_rgb(RGB8::new(0x12, 0x34, 0x56)), 0x123456);
        assert_eq!(pack_rgb(unpack_rgb(YELLOW)), YELLOW);
    }

    #[test]
    fn test_names_and_symbols() {
        assert_eq!(PlayerColour::Red.name(), "Red");
        assert_eq!(PlayerColour::Empty.name(), "Empty");
        assert_eq!(PlayerColour::Yellow.symbol(), "🟡");
        assert_eq!(PlayerColour::Empty.symbol(), "⚪");
    }
}
