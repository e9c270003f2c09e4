//! Positional scoring from weighted 4-cell window counts

use crate::board::{Board, Cell};
use crate::{HEIGHT, WIDTH, WINDOW_LENGTH};

/// The middle column of the board
pub const CENTER_COLUMN: usize = WIDTH / 2;

// window scores for the scoring player's piece counts
const FOUR: i32 = 10_000;
const OPEN_THREE: i32 = 150;
const OPEN_TWO: i32 = 10;

// penalties for windows the opponent is close to completing
const OPPONENT_OPEN_THREE: i32 = -300;
const OPPONENT_OPEN_TWO: i32 = -10;

/// Bonus per own piece sitting in the center column
const CENTER_BONUS: i32 = 6;

/// Scores a single window from `piece`'s point of view
///
/// Only the first matching branch applies; the own-piece and
/// opponent-piece conditions are mutually exclusive within a 4-cell
/// window.
pub fn evaluate_window(window: &[Cell; WINDOW_LENGTH], piece: Cell) -> i32 {
    let opponent = piece.opponent();
    let own = window.iter().filter(|&&cell| cell == piece).count();
    let theirs = window.iter().filter(|&&cell| cell == opponent).count();
    let empty = window.iter().filter(|&&cell| cell.is_empty()).count();

    if own == 4 {
        FOUR
    } else if own == 3 && empty == 1 {
        OPEN_THREE
    } else if own == 2 && empty == 2 {
        OPEN_TWO
    } else if theirs == 3 && empty == 1 {
        OPPONENT_OPEN_THREE
    } else if theirs == 2 && empty == 2 {
        OPPONENT_OPEN_TWO
    } else {
        0
    }
}

/// Scores a whole position for `piece` by summing every window on the
/// board and adding the center-column bias
///
/// This is the leaf score of the search; terminal positions are scored
/// by the search engine itself, not here.
pub fn evaluate_position(board: &Board, piece: Cell) -> i32 {
    let mut score = 0;

    // prioritise holding the center column
    for row in 0..HEIGHT {
        if board.get(row, CENTER_COLUMN) == piece {
            score += CENTER_BONUS;
        }
    }

    // horizontal
    for row in 0..HEIGHT {
        for column in 0..=WIDTH - WINDOW_LENGTH {
            score += evaluate_window(&board.window(row, column, 0, 1), piece);
        }
    }
    // vertical
    for column in 0..WIDTH {
        for row in 0..=HEIGHT - WINDOW_LENGTH {
            score += evaluate_window(&board.window(row, column, 1, 0), piece);
        }
    }
    // down-right diagonals
    for row in 0..=HEIGHT - WINDOW_LENGTH {
        for column in 0..=WIDTH - WINDOW_LENGTH {
            score += evaluate_window(&board.window(row, column, 1, 1), piece);
        }
    }
    // up-right diagonals
    for row in WINDOW_LENGTH - 1..HEIGHT {
        for column in 0..=WIDTH - WINDOW_LENGTH {
            score += evaluate_window(&board.window(row, column, -1, 1), piece);
        }
    }

    score
}
