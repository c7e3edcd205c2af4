use crate::colour::PlayerColour;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Red,
    Yellow,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::Red => Player::Yellow,
            Player::Yellow => Player::Red,
        }
    }

    /// Colour of this player's pieces
    pub fn colour(self) -> PlayerColour {
        match self {
            Player::Red => PlayerColour::Red,
            Player::Yellow => PlayerColour::Yellow,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        self.colour().name()
    }
}
