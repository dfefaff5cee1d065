//! Bishop destinations: the four diagonal rays.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::pseudo_move_shared::{push_rays, DestinationSet, DIAGONAL_RAYS};

pub fn generate_bishop_moves(board: &Board, from: Square, side: Color, out: &mut DestinationSet) {
    push_rays(board, from, side, &DIAGONAL_RAYS, out);
}

#[cfg(test)]
mod tests {
    use super::generate_bishop_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::*;
    use crate::move_generation::pseudo_move_shared::DestinationSet;

    #[test]
    fn bishop_on_empty_board_from_corner_covers_long_diagonal() {
        let board = Board::empty();
        let mut out = DestinationSet::new();
        generate_bishop_moves(&board, Square { row: 7, col: 0 }, Color::White, &mut out);
        assert_eq!(out.len(), 7);
        assert!(out.contains(&Square { row: 0, col: 7 }));
    }

    #[test]
    fn bishop_blocked_by_own_pawns_in_start_position() {
        let board = Board::standard();
        let mut out = DestinationSet::new();
        generate_bishop_moves(&board, Square { row: 7, col: 2 }, Color::White, &mut out);
        assert!(out.is_empty());
    }
}
