//! Line-based game for plain terminals and pipes.
//!
//! Red is always typed in; Yellow is either typed in or played by an agent.

use std::io::{self, BufRead, Write};

use crate::ai::Agent;
use crate::game::{Board, GameOutcome, GameState, Player, COLS, ROWS};

/// Board as text, one row per line, using the colour glyphs.
pub fn render_text(board: &Board) -> String {
    (0..ROWS)
        .map(|row| {
            (0..COLS)
                .map(|col| board.get(row, col).symbol())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub struct ConsoleGame<R, W> {
    input: R,
    output: W,
    state: GameState,
    opponent: Option<Box<dyn Agent>>,
}

impl<R: BufRead, W: Write> ConsoleGame<R, W> {
    pub fn new(input: R, output: W, opponent: Option<Box<dyn Agent>>) -> Self {
        ConsoleGame {
            input,
            output,
            state: GameState::initial(),
            opponent,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Play until someone wins or the board fills up.
    pub fn play(&mut self) -> io::Result<GameOutcome> {
        loop {
            writeln!(self.output, "{}", render_text(self.state.board()))?;

            let player = self.state.current_player();
            let column = self.next_column(player)?;
            self.state
                .apply_move_mut(column)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

            if let Some(outcome) = self.state.outcome() {
                writeln!(self.output, "{}", render_text(self.state.board()))?;
                match outcome {
                    GameOutcome::Winner(winner) => writeln!(self.output, "{} wins!", winner.name())?,
                    GameOutcome::Draw => writeln!(self.output, "It's a draw!")?,
                }
                return Ok(outcome);
            }
        }
    }

    fn next_column(&mut self, player: Player) -> io::Result<usize> {
        if player == Player::Yellow {
            if let Some(agent) = self.opponent.as_mut() {
                let column = agent
                    .select_action(&self.state)
                    .ok_or_else(|| io::Error::other("no legal move left"))?;
                writeln!(self.output, "{} ({}) plays {}", player.name(), agent.name(), column + 1)?;
                return Ok(column);
            }
        }
        self.ask_column(player)
    }

    /// Prompt until the player names a column with room in it.
    fn ask_column(&mut self, player: Player) -> io::Result<usize> {
        let mut line = String::new();
        loop {
            write!(self.output, "{} move: ", player.name())?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input closed before the game ended",
                ));
            }

            let column = match parse_column(&line) {
                Some(column) => column,
                None => {
                    writeln!(self.output, "Please enter a column number between 1 and {COLS}.")?;
                    continue;
                }
            };
            if self.state.board().is_column_full(column) {
                writeln!(self.output, "Please choose a column that is not full.")?;
                continue;
            }
            return Ok(column);
        }
    }
}

/// Parse a 1-based column number into a 0-based index.
fn parse_column(text: &str) -> Option<usize> {
    let text = text.trim();
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match text.parse::<usize>() {
        Ok(n) if (1..=COLS).contains(&n) => Some(n - 1),
        _ => None,
    }
}
