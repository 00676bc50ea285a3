use std::fmt;

use thiserror::Error;

use crate::game::Game;

pub const BOARD_CELLS: usize = 9;

/// Rows, columns, then the two diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn other(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Filled(Player),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    Win(Player),
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidMoveError {
    #[error("Cell {0} is off the board, pick 0-8")]
    OutOfRange(usize),

    #[error("Cell {0} is already filled")]
    Occupied(usize),
}

/// The 3x3 grid, indexed 0-8 in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; BOARD_CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_CELLS],
        }
    }

    #[cfg(test)]
    pub fn from_cells(cells: [Cell; BOARD_CELLS]) -> Self {
        Self { cells }
    }

    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; BOARD_CELLS];
    }

    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Empty cell indices, ascending.
    pub fn empty_cells(&self) -> Vec<usize> {
        (0..BOARD_CELLS)
            .filter(|&index| self.cells[index] == Cell::Empty)
            .collect()
    }

    /// Put `player`'s mark on `index`. The board is left untouched on error.
    pub fn apply_move(&mut self, index: usize, player: Player) -> Result<(), InvalidMoveError> {
        match self.cell(index) {
            None => Err(InvalidMoveError::OutOfRange(index)),
            Some(Cell::Filled(_)) => Err(InvalidMoveError::Occupied(index)),
            Some(Cell::Empty) => {
                self.cells[index] = Cell::Filled(player);
                Ok(())
            }
        }
    }

    pub fn check_winner(&self, player: Player) -> bool {
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&index| self.cells[index] == Cell::Filled(player)))
    }

    /// True once every cell is filled. Winners are not considered here, so
    /// check them first.
    pub fn is_draw(&self) -> bool {
        self.cells.iter().all(|cell| *cell != Cell::Empty)
    }

    pub fn evaluate_outcome(&self) -> GameOutcome {
        for player in [Player::X, Player::O] {
            if self.check_winner(player) {
                return GameOutcome::Win(player);
            }
        }
        if self.is_draw() {
            GameOutcome::Draw
        } else {
            GameOutcome::InProgress
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for Board {
    type Action = usize;
    type Player = Player;

    fn get_available_moves(&self) -> Vec<usize> {
        self.empty_cells()
    }

    fn place(&mut self, action: usize, player: Player) {
        self.cells[action] = Cell::Filled(player);
    }

    fn undo(&mut self, action: usize) {
        self.cells[action] = Cell::Empty;
    }

    fn opponent(player: Player) -> Player {
        player.other()
    }

    fn is_winner(&self, player: Player) -> bool {
        self.check_winner(player)
    }

    fn done(&self) -> bool {
        self.is_draw()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(3) {
            for cell in row {
                let symbol = match cell {
                    Cell::Empty => ".",
                    Cell::Filled(Player::X) => "X",
                    Cell::Filled(Player::O) => "O",
                };
                write!(f, "{} ", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
