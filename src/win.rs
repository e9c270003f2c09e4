//! Four-in-a-row detection over every board orientation

use crate::board::{Board, Cell};
use crate::{HEIGHT, WIDTH, WINDOW_LENGTH};

/// True iff `piece` has four in a row anywhere on the board
pub fn winning_move(board: &Board, piece: Cell) -> bool {
    check_windows(board, |window| window.iter().all(|&cell| cell == piece))
}

/// The piece owning the first fully-aligned window in the fixed scan
/// order, or `None` if no four-in-a-row exists
///
/// Scan order: horizontal windows row-major, vertical windows
/// column-major, down-right diagonals, up-right diagonals. A legal game
/// only ever contains one winner, but scanning in a fixed order keeps
/// the answer deterministic even for boards that somehow hold more.
pub fn check_winner(board: &Board) -> Option<Cell> {
    let mut winner = None;
    check_windows(board, |window| {
        let first = window[0];
        if !first.is_empty() && window.iter().all(|&cell| cell == first) {
            winner = Some(first);
            true
        } else {
            false
        }
    });
    winner
}

/// True iff dropping `piece` into `column` wins the game on the spot
///
/// The probe simulates the drop on a copy; the caller's board is left
/// untouched. Full or out-of-range columns simply can't win.
pub fn wins_at(board: &Board, column: usize, piece: Cell) -> bool {
    if !board.is_valid_column(column) {
        return false;
    }
    let row = match board.open_row(column) {
        Some(row) => row,
        None => return false,
    };
    let mut copy = *board;
    copy.drop(row, column, piece);
    winning_move(&copy, piece)
}

/// Feeds every window to `hit` in the fixed scan order, stopping at the
/// first window for which `hit` returns true
fn check_windows<F>(board: &Board, mut hit: F) -> bool
where
    F: FnMut([Cell; WINDOW_LENGTH]) -> bool,
{
    // horizontal
    for row in 0..HEIGHT {
        for column in 0..=WIDTH - WINDOW_LENGTH {
            if hit(board.window(row, column, 0, 1)) {
                return true;
            }
        }
    }
    // vertical
    for column in 0..WIDTH {
        for row in 0..=HEIGHT - WINDOW_LENGTH {
            if hit(board.window(row, column, 1, 0)) {
                return true;
            }
        }
    }
    // down-right diagonals
    for row in 0..=HEIGHT - WINDOW_LENGTH {
        for column in 0..=WIDTH - WINDOW_LENGTH {
            if hit(board.window(row, column, 1, 1)) {
                return true;
            }
        }
    }
    // up-right diagonals
    for row in WINDOW_LENGTH - 1..HEIGHT {
        for column in 0..=WIDTH - WINDOW_LENGTH {
            if hit(board.window(row, column, -1, 1)) {
                return true;
            }
        }
    }
    false
}
