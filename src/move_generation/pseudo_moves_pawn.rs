//! Pawn destinations: single step, double step from the start row, and
//! diagonal captures. No en passant and no promotion.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::pseudo_move_shared::{enemy_piece_on, DestinationSet};

pub fn generate_pawn_moves(board: &Board, from: Square, side: Color, out: &mut DestinationSet) {
    let forward = side.forward();

    if let Some(one_step) = from.offset(forward, 0) {
        if board.piece_at(one_step).is_none() {
            out.insert(one_step);

            // Only the landing square is checked here; the step above already
            // covered the square in between.
            if from.row == side.pawn_start_row() {
                if let Some(two_step) = from.offset(2 * forward, 0) {
                    if board.piece_at(two_step).is_none() {
                        out.insert(two_step);
                    }
                }
            }
        }
    }

    for d_col in [-1i8, 1i8] {
        let Some(to) = from.offset(forward, d_col) else {
            continue;
        };
        if enemy_piece_on(board, to, side).is_some() {
            out.insert(to);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::generate_pawn_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::*;
    use crate::move_generation::pseudo_move_shared::DestinationSet;

    fn destinations(board: &Board, from: Square, side: Color) -> DestinationSet {
        let mut out = DestinationSet::new();
        generate_pawn_moves(board, from, side, &mut out);
        out
    }

    #[test]
    fn white_pawn_single_and_double_step_from_start() {
        let out = destinations(&Board::standard(), Square { row: 6, col: 4 }, Color::White);
        assert!(out.contains(&Square { row: 5, col: 4 }));
        assert!(out.contains(&Square { row: 4, col: 4 }));
        assert!(!out.contains(&Square { row: 3, col: 4 }));
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn black_pawn_moves_toward_row_seven() {
        let out = destinations(&Board::standard(), Square { row: 1, col: 3 }, Color::Black);
        let expected: DestinationSet = [Square { row: 2, col: 3 }, Square { row: 3, col: 3 }]
            .into_iter()
            .collect();
        assert_eq!(out, expected);
    }

    #[test]
    fn blocked_pawn_has_no_forward_moves() {
        // Black knight directly in front of the e2 pawn.
        let board = Board::from_placement("8/8/8/8/8/4n3/4P3/8").expect("placement should parse");
        let out = destinations(&board, Square { row: 6, col: 4 }, Color::White);
        assert!(out.is_empty());
    }

    #[test]
    fn double_step_requires_empty_landing_square() {
        let board = Board::from_placement("8/8/8/8/4p3/8/4P3/8").expect("placement should parse");
        let out = destinations(&board, Square { row: 6, col: 4 }, Color::White);
        let expected: DestinationSet = [Square { row: 5, col: 4 }].into_iter().collect();
        assert_eq!(out, expected);
    }

    #[test]
    fn pawn_captures_only_enemy_diagonals() {
        // White pawn d4, black pawn c5, white knight e5.
        let board = Board::from_placement("8/8/8/2p1N3/3P4/8/8/8").expect("placement should parse");
        let out = destinations(&board, Square { row: 4, col: 3 }, Color::White);
        let expected: DestinationSet = [Square { row: 3, col: 2 }, Square { row: 3, col: 3 }]
            .into_iter()
            .collect();
        assert_eq!(out, expected);
    }

    #[test]
    fn pawn_on_last_row_stays_put() {
        let board = Board::from_placement("4P3/8/8/8/8/8/8/8").expect("placement should parse");
        assert!(destinations(&board, Square { row: 0, col: 4 }, Color::White).is_empty());
    }
}
