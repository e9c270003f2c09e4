#[cfg(test)]
pub mod test {
    use anyhow::Result;

    use crate::board::{Board, Cell};
    use crate::engine::{best_move, best_move_default};
    use crate::heuristic::evaluate_position;
    use crate::ordering::order_moves;
    use crate::search::{Searcher, WIN_SCORE};
    use crate::win::{check_winner, winning_move};
    use crate::{EngineError, HEIGHT, WIDTH, WINDOW_LENGTH};

    /// Unpruned minimax with explicit maximizing/minimizing branches,
    /// following the same ordering, short-circuit and tie-break rules
    /// as the pruned search. Pruning must never change its answer, only
    /// the number of nodes visited, so `nodes` counts every call the
    /// same way `Searcher::node_count` does.
    fn reference_minimax(
        board: &Board,
        depth: u32,
        maximizing: bool,
        ai_piece: Cell,
        opponent_piece: Cell,
        nodes: &mut usize,
    ) -> (Option<usize>, i32) {
        *nodes += 1;

        let valid_columns = board.valid_columns();
        let ai_won = winning_move(board, ai_piece);
        let opponent_won = winning_move(board, opponent_piece);

        if ai_won || opponent_won || valid_columns.is_empty() || depth == 0 {
            let score = if ai_won {
                WIN_SCORE + depth as i32
            } else if opponent_won {
                -WIN_SCORE - depth as i32
            } else if valid_columns.is_empty() {
                0
            } else {
                evaluate_position(board, ai_piece)
            };
            return (None, score);
        }

        let mover = if maximizing { ai_piece } else { opponent_piece };
        let mut best_column = None;
        let mut best_score = if maximizing { i32::MIN + 1 } else { i32::MAX };

        for column in order_moves(board, &valid_columns, mover) {
            let row = board.open_row(column).unwrap();
            let mut next = *board;
            next.drop(row, column, mover);

            if winning_move(&next, mover) {
                let score = if maximizing {
                    WIN_SCORE + depth as i32
                } else {
                    -WIN_SCORE - depth as i32
                };
                return (Some(column), score);
            }

            let (_, score) =
                reference_minimax(&next, depth - 1, !maximizing, ai_piece, opponent_piece, nodes);
            if (maximizing && score > best_score) || (!maximizing && score < best_score) {
                best_score = score;
                best_column = Some(column);
            }
        }

        (best_column, best_score)
    }

    #[test]
    pub fn check_winner_finds_each_orientation() {
        // horizontal, bottom row
        let mut board = Board::new();
        for column in 1..=4 {
            board.drop(0, column, Cell::PlayerOne);
        }
        assert_eq!(check_winner(&board), Some(Cell::PlayerOne));

        // vertical
        let mut board = Board::new();
        for row in 0..4 {
            board.drop(row, 5, Cell::PlayerTwo);
        }
        assert_eq!(check_winner(&board), Some(Cell::PlayerTwo));

        // diagonal rising left-to-right
        let mut board = Board::new();
        for i in 0..4 {
            board.drop(i, i, Cell::PlayerOne);
        }
        assert_eq!(check_winner(&board), Some(Cell::PlayerOne));

        // diagonal falling left-to-right
        let mut board = Board::new();
        for i in 0..4 {
            board.drop(3 - i, 2 + i, Cell::PlayerTwo);
        }
        assert_eq!(check_winner(&board), Some(Cell::PlayerTwo));

        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    pub fn evaluate_window_scoring_table() {
        // a window with `own` of our pieces and `theirs` of the opponent's,
        // the rest empty; only the counts matter, not the arrangement
        fn window(own: usize, theirs: usize) -> [Cell; WINDOW_LENGTH] {
            let mut cells = [Cell::Empty; WINDOW_LENGTH];
            for cell in cells.iter_mut().take(own) {
                *cell = Cell::PlayerOne;
            }
            for cell in cells.iter_mut().skip(own).take(theirs) {
                *cell = Cell::PlayerTwo;
            }
            cells
        }

        // every (own, theirs, empty) combination reachable in a window
        let table = [
            (4, 0, 10_000),
            (3, 1, 0),
            (3, 0, 150),
            (2, 2, 0),
            (2, 1, 0),
            (2, 0, 10),
            (1, 3, 0),
            (1, 2, 0),
            (1, 1, 0),
            (1, 0, 0),
            (0, 4, 0),
            (0, 3, -300),
            (0, 2, -10),
            (0, 1, 0),
            (0, 0, 0),
        ];
        for &(own, theirs, expected) in table.iter() {
            assert_eq!(
                crate::heuristic::evaluate_window(&window(own, theirs), Cell::PlayerOne),
                expected,
                "window with {} own, {} opponent pieces",
                own,
                theirs
            );
        }
    }

    #[test]
    pub fn never_plays_into_full_column() -> Result<()> {
        // fill columns 0 and 3 completely, alternating pieces so
        // neither side has four in a row
        let mut board = Board::new();
        for &column in [0, 3].iter() {
            for row in 0..HEIGHT {
                let piece = if row % 2 == 0 {
                    Cell::PlayerOne
                } else {
                    Cell::PlayerTwo
                };
                board.drop(row, column, piece);
            }
        }
        assert_eq!(check_winner(&board), None);

        for depth in 1..=4 {
            let column = best_move(&board, Cell::PlayerOne, Cell::PlayerTwo, depth)?
                .expect("open columns remain");
            assert!(
                board.is_valid_column(column),
                "depth {} played full column {}",
                depth,
                column
            );
        }
        Ok(())
    }

    #[test]
    pub fn full_board_returns_no_move() -> Result<()> {
        // a known drawn filling: runs of two in every direction
        let mut board = Board::new();
        for row in 0..HEIGHT {
            for column in 0..WIDTH {
                let piece = if (column / 2 + row) % 2 == 0 {
                    Cell::PlayerOne
                } else {
                    Cell::PlayerTwo
                };
                board.drop(row, column, piece);
            }
        }
        assert_eq!(check_winner(&board), None);
        assert!(board.valid_columns().is_empty());

        let column = best_move_default(&board, Cell::PlayerOne, Cell::PlayerTwo)?;
        assert_eq!(column, None);
        Ok(())
    }

    #[test]
    pub fn takes_the_immediate_win() -> Result<()> {
        // three in a row on the bottom, completed by column 3
        let mut board = Board::new();
        for column in 0..3 {
            board.drop(0, column, Cell::PlayerOne);
        }

        for &depth in [1, 2, 4, 6].iter() {
            let column = best_move(&board, Cell::PlayerOne, Cell::PlayerTwo, depth)?;
            assert_eq!(column, Some(3), "depth {}", depth);
        }
        Ok(())
    }

    #[test]
    pub fn blocks_the_immediate_threat() -> Result<()> {
        // the opponent threatens to complete at column 3 and the AI has
        // no win of its own
        let mut board = Board::new();
        for column in 0..3 {
            board.drop(0, column, Cell::PlayerTwo);
        }

        let column = best_move_default(&board, Cell::PlayerOne, Cell::PlayerTwo)?;
        assert_eq!(column, Some(3));
        Ok(())
    }

    #[test]
    pub fn depth_zero_scores_statically() -> Result<()> {
        for moves in ["", "4455", "123", "172635"].iter() {
            let (board, to_move) = Board::from_moves(moves)?;
            let mut searcher = Searcher::new(to_move, to_move.opponent());
            let (column, score) = searcher.search(&board, 0);

            assert_eq!(column, None);
            assert_eq!(score, evaluate_position(&board, to_move));
        }
        Ok(())
    }

    #[test]
    pub fn pruning_never_changes_the_decision() -> Result<()> {
        let positions = [
            "", "4", "44", "445", "4455", "123", "1234", "12345", "443", "7711", "444555",
            "112", "172635",
        ];

        for moves in positions.iter() {
            let (board, to_move) = Board::from_moves(moves)?;
            for &depth in [3, 4].iter() {
                let mut searcher = Searcher::new(to_move, to_move.opponent());
                let pruned = searcher.search(&board, depth);
                let mut reference_nodes = 0;
                let exhaustive = reference_minimax(
                    &board,
                    depth,
                    true,
                    to_move,
                    to_move.opponent(),
                    &mut reference_nodes,
                );

                assert_eq!(
                    pruned, exhaustive,
                    "position '{}' at depth {}",
                    moves, depth
                );
                // pruning may only reduce the work done
                assert!(
                    searcher.node_count <= reference_nodes,
                    "position '{}' at depth {}: pruned search visited {} nodes, \
                     exhaustive search visited {}",
                    moves,
                    depth,
                    searcher.node_count,
                    reference_nodes
                );
            }
        }
        Ok(())
    }

    #[test]
    pub fn empty_board_prefers_the_center() -> Result<()> {
        let board = Board::new();
        let ordered = order_moves(&board, &board.valid_columns(), Cell::PlayerOne);
        assert_eq!(ordered[0], WIDTH / 2);

        let column = best_move(&board, Cell::PlayerOne, Cell::PlayerTwo, 4)?;
        assert_eq!(column, Some(WIDTH / 2));
        Ok(())
    }

    #[test]
    pub fn rejects_malformed_input() {
        // wrong row count
        let rows = vec![vec![Cell::Empty; WIDTH]; HEIGHT - 1];
        assert!(matches!(
            Board::from_grid(&rows),
            Err(EngineError::InvalidShape)
        ));

        // ragged row
        let mut rows = vec![vec![Cell::Empty; WIDTH]; HEIGHT];
        rows[2].pop();
        assert!(matches!(
            Board::from_grid(&rows),
            Err(EngineError::InvalidShape)
        ));

        let board = Board::new();
        assert!(matches!(
            best_move_default(&board, Cell::PlayerOne, Cell::PlayerOne),
            Err(EngineError::InvalidPieces)
        ));
        assert!(matches!(
            best_move_default(&board, Cell::Empty, Cell::PlayerTwo),
            Err(EngineError::InvalidPieces)
        ));

        assert!(matches!(
            Board::from_moves("8"),
            Err(EngineError::ParseMove('8'))
        ));
        assert!(matches!(
            Board::from_moves("1111111"),
            Err(EngineError::ColumnFull(1))
        ));
    }

    #[test]
    pub fn move_ordering_breaks_ties_in_enumeration_order() {
        // on an empty board columns 2 and 4 are mirror images: equal
        // position scores, equal center distance, so the lower column
        // must come first
        let board = Board::new();
        let ordered = order_moves(&board, &board.valid_columns(), Cell::PlayerOne);

        let two = ordered.iter().position(|&c| c == 2).unwrap();
        let four = ordered.iter().position(|&c| c == 4).unwrap();
        assert!(two < four);

        // every valid column appears exactly once
        let mut sorted = ordered.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, board.valid_columns());
    }
}
