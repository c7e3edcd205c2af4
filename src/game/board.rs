use crate::colour::PlayerColour;
use crate::error::MoveError;

/// Rows and columns on the board; one LED per cell.
pub const BOARD_SIZE: usize = 8;
pub const ROWS: usize = BOARD_SIZE;
pub const COLS: usize = BOARD_SIZE;

const WIN_LENGTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[PlayerColour; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[PlayerColour::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 7 is the bottom
    pub fn get(&self, row: usize, col: usize) -> PlayerColour {
        self.cells[row][col]
    }

    /// Iterate over `(row, col, colour)` in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, PlayerColour)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .flat_map(|(row, line)| line.iter().enumerate().map(move |(col, &c)| (row, col, c)))
    }

    /// Check if a column is full. Columns off the board count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != PlayerColour::Empty
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, colour: PlayerColour) -> Result<usize, MoveError> {
        if colour == PlayerColour::Empty {
            return Err(MoveError::EmptyPiece);
        }
        if col >= COLS {
            return Err(MoveError::InvalidColumn(col));
        }

        // Lowest empty row wins
        let row = (0..ROWS)
            .rev()
            .find(|&row| self.cells[row][col] == PlayerColour::Empty)
            .ok_or(MoveError::ColumnFull(col))?;
        self.cells[row][col] = colour;
        Ok(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Check if the last move at (row, col) resulted in a win
    pub fn check_win(&self, row: usize, col: usize) -> bool {
        let colour = self.get(row, col);
        if colour == PlayerColour::Empty {
            return false;
        }

        [(0, 1), (1, 0), (1, 1), (1, -1)]
            .iter()
            .any(|&(dr, dc)| self.line_length(row, col, dr, dc, colour) >= WIN_LENGTH)
    }

    /// Scan the whole board for four in a line of `colour`.
    pub fn has_four(&self, colour: PlayerColour) -> bool {
        if colour == PlayerColour::Empty {
            return false;
        }
        self.cells()
            .any(|(row, col, c)| c == colour && self.check_win(row, col))
    }

    /// Count the run through (row, col) along direction (dr, dc), both ways.
    fn line_length(&self, row: usize, col: usize, dr: i32, dc: i32, colour: PlayerColour) -> usize {
        let mut count = 1; // Count the current piece
        for sign in [1, -1] {
            let mut r = row as i32 + dr * sign;
            let mut c = col as i32 + dc * sign;
            while Self::on_board(r, c) && self.cells[r as usize][c as usize] == colour {
                count += 1;
                r += dr * sign;
                c += dc * sign;
            }
        }
        count
    }

    fn on_board(r: i32, c: i32) -> bool {
        r >= 0 && c >= 0 && (r as usize) < ROWS && (c as usize) < COLS
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
