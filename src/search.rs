//! Depth-limited minimax with alpha-beta pruning

use crate::board::{Board, Cell};
use crate::heuristic::evaluate_position;
use crate::ordering::order_moves;
use crate::win::winning_move;

/// Score of a guaranteed win, dwarfing any heuristic value
pub const WIN_SCORE: i32 = 1_000_000_000;

/// Default search depth in plies
pub const DEFAULT_DEPTH: u32 = 6;

/// Initial width of the alpha-beta window
const INFINITY: i32 = i32::MAX;

/// A depth-limited game tree search for one decision
///
/// # Notes
/// The search simulates moves on independent board copies, orders each
/// node's candidate columns best-first for the side to move, and prunes
/// branches that cannot influence the decision. The two sides share a
/// single sign-flipped recursion: every node scores the position from
/// the current mover's perspective, so the root (where the AI moves)
/// reports the score from the AI's point of view.
///
/// # Position Scoring
/// A position won by either side scores `WIN_SCORE` plus the remaining
/// search depth, the depth term breaking ties in favour of branches
/// discovered with more budget left. A full board with no winner scores
/// 0, and exhausting the depth budget falls back to the positional
/// heuristic.
pub struct Searcher {
    ai_piece: Cell,
    opponent_piece: Cell,

    /// The number of nodes searched by this `Searcher` so far (for diagnostics only)
    pub node_count: usize,
}

impl Searcher {
    /// Creates a new `Searcher` playing `ai_piece` against `opponent_piece`
    pub fn new(ai_piece: Cell, opponent_piece: Cell) -> Self {
        Self {
            ai_piece,
            opponent_piece,
            node_count: 0,
        }
    }

    /// Performs the full search from the root, where the AI is to move
    ///
    /// Returns the chosen column (`None` when no move exists or the
    /// depth is 0) and the score of the position from the AI's
    /// perspective.
    pub fn search(&mut self, board: &Board, depth: u32) -> (Option<usize>, i32) {
        self.negamax(board, depth, -INFINITY, INFINITY, self.ai_piece)
    }

    /// Performs game tree search, scoring from `mover`'s perspective
    fn negamax(
        &mut self,
        board: &Board,
        depth: u32,
        mut alpha: i32,
        beta: i32,
        mover: Cell,
    ) -> (Option<usize>, i32) {
        self.node_count += 1;

        let valid_columns = board.valid_columns();
        let ai_won = winning_move(board, self.ai_piece);
        let opponent_won = winning_move(board, self.opponent_piece);
        // mover-relative sign of an AI-perspective score
        let sign = if mover == self.ai_piece { 1 } else { -1 };

        if ai_won || opponent_won || valid_columns.is_empty() || depth == 0 {
            let score = if ai_won {
                WIN_SCORE + depth as i32
            } else if opponent_won {
                -WIN_SCORE - depth as i32
            } else if valid_columns.is_empty() {
                // board full, no winner
                0
            } else {
                evaluate_position(board, self.ai_piece)
            };
            return (None, sign * score);
        }

        let mut best_column = None;
        let mut best_score = -INFINITY;

        // best-first ordering for the side to move improves pruning
        for column in order_moves(board, &valid_columns, mover) {
            let row = match board.open_row(column) {
                Some(row) => row,
                // valid_columns only lists open columns
                None => unreachable!("column {} reported open but has no open row", column),
            };
            let mut next = *board;
            next.drop(row, column, mover);

            // a move that wins on the spot ends this branch, no need to recurse
            if winning_move(&next, mover) {
                return (Some(column), WIN_SCORE + depth as i32);
            }

            // the search window is flipped for the other player
            let (_, opponent_score) =
                self.negamax(&next, depth - 1, -beta, -alpha, mover.opponent());
            let score = -opponent_score;

            // strict improvement only: the first column to reach the
            // best score keeps it
            if score > best_score {
                best_score = score;
                best_column = Some(column);
            }
            if best_score > alpha {
                alpha = best_score;
            }
            // a perfect opponent will not let the game reach this branch
            if alpha >= beta {
                break;
            }
        }

        (best_column, best_score)
    }
}
