//! Best-first ranking of candidate columns by a one-ply lookahead

use crate::board::{Board, Cell};
use crate::heuristic::{evaluate_position, CENTER_COLUMN};
use crate::WIDTH;

/// Ranking score for a column that turns out not to be droppable
const UNPLAYABLE_SCORE: i32 = -9999;

struct MoveSorter {
    size: usize,
    // column and ranking score
    moves: [(usize, i32); WIDTH],
}

impl MoveSorter {
    pub fn new() -> Self {
        Self {
            size: 0,
            moves: [(0, 0); WIDTH],
        }
    }
    pub fn push(&mut self, column: usize, score: i32) {
        let mut pos = self.size;
        self.size += 1;
        while pos != 0 && self.moves[pos - 1].1 > score {
            self.moves[pos] = self.moves[pos - 1];
            pos -= 1;
        }
        self.moves[pos] = (column, score);
    }
}

impl Iterator for MoveSorter {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        match self.size {
            0 => None,
            _ => {
                self.size -= 1;
                Some(self.moves[self.size].0)
            }
        }
    }
}

/// Ranks `valid_columns` best-first for `piece`
///
/// Each candidate is scored by simulating the drop on a copy and
/// evaluating the resulting position, minus the column's distance from
/// the center. Equal scores keep the enumeration order of
/// `valid_columns`, so the ranking is fully deterministic.
pub fn order_moves(board: &Board, valid_columns: &[usize], piece: Cell) -> Vec<usize> {
    let mut sorter = MoveSorter::new();
    // pushing in reverse makes equal scores pop back out in the
    // original enumeration order
    for &column in valid_columns.iter().rev() {
        let score = match board.open_row(column) {
            Some(row) => {
                let mut copy = *board;
                copy.drop(row, column, piece);
                evaluate_position(&copy, piece)
                    - (column as i32 - CENTER_COLUMN as i32).abs()
            }
            None => UNPLAYABLE_SCORE,
        };
        sorter.push(column, score);
    }
    sorter.collect()
}
