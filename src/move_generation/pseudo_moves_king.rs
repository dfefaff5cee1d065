//! King destinations: the eight adjacent squares. No castling.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::pseudo_move_shared::{push_step, DestinationSet};

pub fn generate_king_moves(board: &Board, from: Square, side: Color, out: &mut DestinationSet) {
    for d_row in -1i8..=1 {
        for d_col in -1i8..=1 {
            if d_row == 0 && d_col == 0 {
                continue;
            }
            push_step(board, side, from.offset(d_row, d_col), out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::generate_king_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::*;
    use crate::move_generation::pseudo_move_shared::DestinationSet;

    #[test]
    fn king_in_corner_has_three_squares() {
        let mut out = DestinationSet::new();
        generate_king_moves(&Board::empty(), Square { row: 0, col: 0 }, Color::Black, &mut out);
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn king_may_step_into_attacked_square() {
        // Black rook on e3 covers the whole e-file; the white king on d1 may still go to e2.
        let board = Board::from_placement("8/8/8/8/8/4r3/8/3K4").expect("placement should parse");
        let mut out = DestinationSet::new();
        generate_king_moves(&board, Square { row: 7, col: 3 }, Color::White, &mut out);
        assert!(out.contains(&Square { row: 6, col: 4 }));
        assert_eq!(out.len(), 5);
    }
}
