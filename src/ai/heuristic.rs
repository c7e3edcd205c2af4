use crate::colour::PlayerColour;
use crate::game::GameState;

use super::agent::Agent;
use super::random::RandomAgent;

/// One-ply opponent: take a winning column if there is one, otherwise block
/// the opponent's winning column, otherwise play at random.
pub struct HeuristicAgent {
    fallback: RandomAgent,
}

impl HeuristicAgent {
    pub fn new() -> Self {
        HeuristicAgent {
            fallback: RandomAgent::new(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        HeuristicAgent {
            fallback: RandomAgent::with_seed(seed),
        }
    }

    /// First legal column where a `colour` piece would complete four.
    fn winning_column(state: &GameState, colour: PlayerColour) -> Option<usize> {
        state.legal_actions().into_iter().find(|&col| {
            let mut board = *state.board();
            board
                .drop_piece(col, colour)
                .is_ok_and(|row| board.check_win(row, col))
        })
    }
}

impl Default for HeuristicAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for HeuristicAgent {
    fn select_action(&mut self, state: &GameState) -> Option<usize> {
        let me = state.current_player();

        if let Some(col) = Self::winning_column(state, me.colour()) {
            log::debug!("{}: winning move in column {col}", me.name());
            return Some(col);
        }
        if let Some(col) = Self::winning_column(state, me.other().colour()) {
            log::debug!("{}: blocking column {col}", me.name());
            return Some(col);
        }
        self.fallback.select_action(state)
    }

    fn name(&self) -> &str {
        "Heuristic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(columns: &[usize]) -> GameState {
        let mut state = GameState::initial();
        for &col in columns {
            state.apply_move_mut(col).unwrap();
        }
        state
    }

    #[test]
    fn test_takes_winning_move() {
        // Red has three in column 2; Red to move.
        let state = play(&[2, 5, 2, 5, 2, 6]);
        let mut agent = HeuristicAgent::with_seed(0);
        assert_eq!(agent.select_action(&state), Some(2));
    }

    #[test]
    fn test_blocks_opponent() {
        // Red has 0,1,2 on the bottom row; Yellow to move.
        let state = play(&[0, 7, 1, 7, 2]);
        let mut agent = HeuristicAgent::with_seed(0);
        assert_eq!(agent.select_action(&state), Some(3));
    }

    #[test]
    fn test_prefers_win_over_block() {
        // Yellow has three stacked in column 6, Red threatens column 3.
        let state = play(&[0, 6, 1, 6, 2, 6]);
        assert_eq!(state.current_player(), crate::game::Player::Red);
        let mut agent = HeuristicAgent::with_seed(0);
        assert_eq!(agent.select_action(&state), Some(3));

        // Same position one move later from Yellow's side.
        let state = play(&[0, 6, 1, 6, 2, 6, 7]);
        assert_eq!(agent.select_action(&state), Some(6));
    }

    #[test]
    fn test_falls_back_to_legal_column() {
        let mut state = GameState::initial();
        for _ in 0..8 {
            state.apply_move_mut(4).unwrap();
        }
        let mut agent = HeuristicAgent::with_seed(3);
        for _ in 0..50 {
            let col = agent.select_action(&state).unwrap();
            assert_ne!(col, 4);
        }
    }
}
