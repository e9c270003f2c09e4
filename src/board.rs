//! Grid representation of the board and the gravity-drop placement rule

use crate::{EngineError, HEIGHT, WIDTH, WINDOW_LENGTH};

/// A single board cell, holding one of the two players' pieces or nothing
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Cell {
    PlayerOne,
    PlayerTwo,
    Empty,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            _ => false,
        }
    }

    /// The other player's piece; `Empty` has no opponent and maps to itself
    pub fn opponent(&self) -> Cell {
        match self {
            Cell::PlayerOne => Cell::PlayerTwo,
            Cell::PlayerTwo => Cell::PlayerOne,
            Cell::Empty => Cell::Empty,
        }
    }
}

/// A full board snapshot
///
/// Row 0 is the row that fills first under gravity (the physical
/// bottom). The board is cheap to copy, so the search engine works on
/// independent copies and never mutates the caller's snapshot.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Board {
    cells: [Cell; WIDTH * HEIGHT], // cells are stored left-to-right, bottom-to-top
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; WIDTH * HEIGHT],
        }
    }

    /// Builds a board from a grid of rows given bottom-up
    ///
    /// This is the boundary constructor for externally captured
    /// snapshots; anything other than `HEIGHT` rows of `WIDTH` cells is
    /// rejected before any computation.
    pub fn from_grid(rows: &[Vec<Cell>]) -> Result<Self, EngineError> {
        if rows.len() != HEIGHT || rows.iter().any(|row| row.len() != WIDTH) {
            return Err(EngineError::InvalidShape);
        }
        let mut board = Self::new();
        for (row, cells) in rows.iter().enumerate() {
            for (column, &cell) in cells.iter().enumerate() {
                board.cells[column + WIDTH * row] = cell;
            }
        }
        Ok(board)
    }

    /// Replays a string of 1-indexed column digits, alternating players
    /// starting with `PlayerOne`
    ///
    /// Returns the resulting board and the side to move next.
    pub fn from_moves(moves: &str) -> Result<(Self, Cell), EngineError> {
        let mut board = Self::new();
        let mut to_move = Cell::PlayerOne;

        for column_char in moves.chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column @ 1..=WIDTH) => {
                    let row = board
                        .open_row(column - 1)
                        .ok_or(EngineError::ColumnFull(column))?;
                    board.drop(row, column - 1, to_move);
                    to_move = to_move.opponent();
                }
                _ => return Err(EngineError::ParseMove(column_char)),
            }
        }
        Ok((board, to_move))
    }

    pub fn get(&self, row: usize, column: usize) -> Cell {
        self.cells[column + WIDTH * row]
    }

    /// Places `piece` at the given cell
    ///
    /// The caller must have validated the coordinates beforehand,
    /// normally via [`open_row`](Board::open_row).
    pub fn drop(&mut self, row: usize, column: usize, piece: Cell) {
        debug_assert!(self.cells[column + WIDTH * row].is_empty());
        self.cells[column + WIDTH * row] = piece;
    }

    /// Whether a piece can still be dropped into `column`
    pub fn is_valid_column(&self, column: usize) -> bool {
        column < WIDTH && self.get(HEIGHT - 1, column).is_empty()
    }

    /// The row a dropped piece would land in, or `None` if the column
    /// is full
    pub fn open_row(&self, column: usize) -> Option<usize> {
        (0..HEIGHT).find(|&row| self.get(row, column).is_empty())
    }

    /// All columns still open to play, in ascending order
    pub fn valid_columns(&self) -> Vec<usize> {
        (0..WIDTH)
            .filter(|&column| self.is_valid_column(column))
            .collect()
    }

    /// The window of `WINDOW_LENGTH` cells starting at `(row, column)`
    /// and stepping by `(row_step, column_step)`
    ///
    /// The caller must ensure the whole window lies on the board.
    pub fn window(
        &self,
        row: usize,
        column: usize,
        row_step: isize,
        column_step: isize,
    ) -> [Cell; WINDOW_LENGTH] {
        let mut window = [Cell::Empty; WINDOW_LENGTH];
        for (i, cell) in window.iter_mut().enumerate() {
            let r = (row as isize + row_step * i as isize) as usize;
            let c = (column as isize + column_step * i as isize) as usize;
            *cell = self.get(r, c);
        }
        window
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
