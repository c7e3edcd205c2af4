//! # Neopixel Connect Four
//!
//! Connect Four on an 8x8 matrix of addressable LEDs. Each board cell holds a
//! [`colour::PlayerColour`], which maps to the packed RGB code the LED is
//! driven with. A terminal UI built with Ratatui previews the matrix.
//!
//! ## Modules
//!
//! - [`colour`]: Player colours and their packed neopixel codes
//! - [`game`]: Core game logic: board, player, state machine
//! - [`ai`]: Agent trait, random and win/block opponents
//! - [`display`]: LED chain layout and frame buffer
//! - [`ui`]: Terminal UI and line-based console game
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod ai;
pub mod colour;
pub mod config;
pub mod display;
pub mod error;
pub mod game;
pub mod ui;

pub use colour::{neopixel_colour_from_raw, player_colour_to_neopixel_colour, PlayerColour};
