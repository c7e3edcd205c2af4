use crate::ai::{Agent, OpponentKind};
use crate::config::AppConfig;
use crate::display::LedLayout;
use crate::error::MoveError;
use crate::game::{GameOutcome, GameState, Player, COLS};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;

pub struct App {
    game_state: GameState,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
    opponent_kind: OpponentKind,
    opponent: Option<Box<dyn Agent>>,
    layout: LedLayout,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        App {
            game_state: GameState::initial(),
            selected_column: COLS / 2,
            should_quit: false,
            message: None,
            opponent_kind: config.game.opponent,
            opponent: config.game.opponent.build(config.game.seed),
            layout: config.display.layout,
        }
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < COLS {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                self.game_state = GameState::initial();
                self.selected_column = COLS / 2;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Drop piece in selected column, then let the opponent reply
    fn drop_piece(&mut self) {
        if self.game_state.is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        if self.try_move(self.selected_column) {
            self.opponent_move();
        }
    }

    fn opponent_move(&mut self) {
        if self.game_state.is_terminal() || self.game_state.current_player() != Player::Yellow {
            return;
        }
        let Some(agent) = self.opponent.as_mut() else {
            return;
        };
        if let Some(col) = agent.select_action(&self.game_state) {
            self.try_move(col);
        }
    }

    /// Returns true if the move was played
    fn try_move(&mut self, column: usize) -> bool {
        match self.game_state.apply_move_mut(column) {
            Ok(()) => {
                if let Some(outcome) = self.game_state.outcome() {
                    self.message = Some(match outcome {
                        GameOutcome::Winner(player) => format!("{} wins!", player.name()),
                        GameOutcome::Draw => "It's a draw!".to_string(),
                    });
                }
                true
            }
            Err(MoveError::ColumnFull(_)) => {
                self.message = Some("Column is full!".to_string());
                false
            }
            Err(err) => {
                self.message = Some(format!("Illegal move: {err}"));
                false
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        let opponent = match &self.opponent {
            Some(agent) => agent.name(),
            None if self.opponent_kind == OpponentKind::Human => "Human",
            None => "-",
        };
        super::game_view::render(
            frame,
            &self.game_state,
            self.selected_column,
            &self.message,
            opponent,
            self.layout,
        );
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}
