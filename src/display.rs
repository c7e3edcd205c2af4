//! Neopixel frame for the 8x8 board.
//!
//! The board is drawn onto a single chain of LEDs. [`NeopixelFrame`] holds the
//! packed code of every LED in chain order; pushing the bits out to the strip
//! is left to the hardware driver.

use smart_leds::{brightness, RGB8};

use crate::colour::{pack_rgb, player_colour_to_neopixel_colour, unpack_rgb, OFF};
use crate::game::{Board, COLS, ROWS};

pub const LED_COUNT: usize = ROWS * COLS;

/// How the LED chain snakes through the matrix.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum LedLayout {
    /// Every row runs left to right
    #[default]
    RowMajor,
    /// Odd rows run right to left
    Serpentine,
}

impl LedLayout {
    /// Chain index of the LED under board cell (row, col).
    pub fn index(self, row: usize, col: usize) -> usize {
        match self {
            LedLayout::RowMajor => row * COLS + col,
            LedLayout::Serpentine if row % 2 == 1 => row * COLS + (COLS - 1 - col),
            LedLayout::Serpentine => row * COLS + col,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NeopixelFrame {
    pixels: [u32; LED_COUNT],
    layout: LedLayout,
}

impl NeopixelFrame {
    pub fn blank(layout: LedLayout) -> Self {
        NeopixelFrame {
            pixels: [OFF; LED_COUNT],
            layout,
        }
    }

    /// Render every board cell through the colour map.
    pub fn from_board(board: &Board, layout: LedLayout) -> Self {
        let mut frame = Self::blank(layout);
        for (row, col, colour) in board.cells() {
            frame.pixels[layout.index(row, col)] = player_colour_to_neopixel_colour(colour);
        }
        frame
    }

    pub fn layout(&self) -> LedLayout {
        self.layout
    }

    /// Packed code at chain position `index`, `None` past the end.
    pub fn pixel(&self, index: usize) -> Option<u32> {
        self.pixels.get(index).copied()
    }

    /// Packed code under board cell (row, col).
    pub fn at(&self, row: usize, col: usize) -> u32 {
        self.pixels[self.layout.index(row, col)]
    }

    pub fn packed(&self) -> &[u32; LED_COUNT] {
        &self.pixels
    }

    /// Number of LEDs that are not off
    pub fn lit_count(&self) -> usize {
        self.pixels.iter().filter(|&&p| p != OFF).count()
    }

    /// Show a dim preview of `colour` on the top LED of `col`, if that LED is
    /// off. Columns off the board are ignored.
    pub fn highlight_column(&mut self, col: usize, colour: u32) {
        if col >= COLS {
            return;
        }
        let index = self.layout.index(0, col);
        if self.pixels[index] == OFF {
            let c = unpack_rgb(colour);
            self.pixels[index] = pack_rgb(RGB8::new(c.r / 4, c.g / 4, c.b / 4));
        }
    }

    /// Channel values in chain order, scaled by `level` (255 = full).
    pub fn to_rgb8(&self, level: u8) -> Vec<RGB8> {
        brightness(self.pixels.iter().map(|&p| unpack_rgb(p)), level).collect()
    }

    /// `#rrggbb` per LED after scaling, eight to a line in chain order.
    pub fn hex_dump(&self, level: u8) -> String {
        self.to_rgb8(level)
            .chunks(COLS)
            .map(|chunk| {
                chunk
                    .iter()
                    .map(|c| format!("#{:06x}", pack_rgb(*c)))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
