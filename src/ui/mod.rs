//! Terminal front ends: a Ratatui game view that previews the LED matrix in
//! true colour, and a line-based console game.

mod app;
pub mod board_widget;
pub mod console;
mod game_view;

pub use app::App;
pub use console::ConsoleGame;
