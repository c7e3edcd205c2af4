//! Core Connect Four game logic on the 8x8 LED board: board representation,
//! player types, and game state with immutable transitions.

mod board;
mod player;
mod state;

pub use board::{Board, BOARD_SIZE, COLS, ROWS};
pub use player::Player;
pub use state::{GameOutcome, GameState};
