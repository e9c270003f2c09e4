//! The decision entry point: tactical overrides, then full search

use crate::board::{Board, Cell};
use crate::ordering::order_moves;
use crate::search::{Searcher, DEFAULT_DEPTH};
use crate::win::wins_at;
use crate::EngineError;

/// Picks the column the AI should play, searching `DEFAULT_DEPTH` plies
pub fn best_move_default(
    board: &Board,
    ai_piece: Cell,
    opponent_piece: Cell,
) -> Result<Option<usize>, EngineError> {
    best_move(board, ai_piece, opponent_piece, DEFAULT_DEPTH)
}

/// Picks the column the AI should play
///
/// Three tiers, cheapest first: take a win available this move, block
/// a win the opponent has available next move, otherwise run the full
/// search. The two tactical tiers scan columns in ascending order and
/// only look one ply ahead; they are always correct and cannot be
/// missed or delayed by the heuristic.
///
/// `Ok(None)` means the board is full and no move exists; it is a
/// normal outcome, not an error.
pub fn best_move(
    board: &Board,
    ai_piece: Cell,
    opponent_piece: Cell,
    depth: u32,
) -> Result<Option<usize>, EngineError> {
    if ai_piece.is_empty() || opponent_piece.is_empty() || ai_piece == opponent_piece {
        return Err(EngineError::InvalidPieces);
    }

    let valid_columns = board.valid_columns();
    if valid_columns.is_empty() {
        return Ok(None);
    }

    // take an immediate win
    for &column in &valid_columns {
        if wins_at(board, column, ai_piece) {
            return Ok(Some(column));
        }
    }

    // block an immediate opponent win
    for &column in &valid_columns {
        if wins_at(board, column, opponent_piece) {
            return Ok(Some(column));
        }
    }

    let mut searcher = Searcher::new(ai_piece, opponent_piece);
    let (column, _score) = searcher.search(board, depth);

    match column {
        Some(column) if valid_columns.contains(&column) => Ok(Some(column)),
        // the search produced nothing usable; fall back to the same
        // deterministic ordering the search itself would have used
        _ => Ok(order_moves(board, &valid_columns, ai_piece)
            .first()
            .copied()
            .or_else(|| valid_columns.first().copied())),
    }
}
