//! Rook destinations: the four orthogonal rays.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::pseudo_move_shared::{push_rays, DestinationSet, ORTHOGONAL_RAYS};

pub fn generate_rook_moves(board: &Board, from: Square, side: Color, out: &mut DestinationSet) {
    push_rays(board, from, side, &ORTHOGONAL_RAYS, out);
}

#[cfg(test)]
mod tests {
    use super::generate_rook_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::*;
    use crate::move_generation::pseudo_move_shared::DestinationSet;

    #[test]
    fn rook_ray_stops_on_capture_and_before_own_piece() {
        // White rook d4, black pawn d6, white pawn f4.
        let board = Board::from_placement("8/8/3p4/8/3R1P2/8/8/8").expect("placement should parse");
        let from = Square { row: 4, col: 3 };
        let mut out = DestinationSet::new();
        generate_rook_moves(&board, from, Color::White, &mut out);

        assert!(out.contains(&Square { row: 3, col: 3 }));
        assert!(out.contains(&Square { row: 2, col: 3 }));
        assert!(!out.contains(&Square { row: 1, col: 3 }));
        assert!(out.contains(&Square { row: 4, col: 4 }));
        assert!(!out.contains(&Square { row: 4, col: 5 }));
        assert!(!out.contains(&Square { row: 4, col: 6 }));
        // 2 up, 3 down, 3 left, 1 right.
        assert_eq!(out.len(), 9);
    }
}
