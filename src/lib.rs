//! A heuristic agent for playing the board game 'Connect 4'
//!
//! Given a snapshot of the board and the piece colours of the two
//! players, the agent picks the column to play using a depth-limited
//! minimax search with alpha-beta pruning, backed by a weighted
//! window-counting heuristic.
//!
//! # Basic Usage
//!
//! ```
//! use dropfour_ai::{best_move_default, Board};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let (board, to_move) = Board::from_moves("112233")?;
//! let column = best_move_default(&board, to_move, to_move.opponent())?;
//!
//! // player one completes the bottom row
//! assert_eq!(column, Some(3));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
use thiserror::Error;

pub mod board;

pub mod win;

pub mod heuristic;

pub mod ordering;

pub mod search;

pub mod engine;

mod test;

pub use board::{Board, Cell};
pub use engine::{best_move, best_move_default};
pub use search::{Searcher, DEFAULT_DEPTH, WIN_SCORE};
pub use win::{check_winner, winning_move, wins_at};

/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The number of cells in a win-detection/scoring window
pub const WINDOW_LENGTH: usize = 4;

// a window must fit along every orientation of the board
const_assert!(WINDOW_LENGTH <= WIDTH);
const_assert!(WINDOW_LENGTH <= HEIGHT);

/// Errors surfaced to the caller for malformed input
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid board shape, expected {} rows of {} columns", HEIGHT, WIDTH)]
    InvalidShape,
    #[error("invalid piece codes, expected two distinct non-empty cells")]
    InvalidPieces,
    #[error("could not parse '{0}' as a valid move")]
    ParseMove(char),
    #[error("invalid move, column {0} full")]
    ColumnFull(usize),
}
