//! Queen destinations: orthogonal and diagonal rays combined.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::pseudo_move_shared::{
    push_rays, DestinationSet, DIAGONAL_RAYS, ORTHOGONAL_RAYS,
};

pub fn generate_queen_moves(board: &Board, from: Square, side: Color, out: &mut DestinationSet) {
    push_rays(board, from, side, &ORTHOGONAL_RAYS, out);
    push_rays(board, from, side, &DIAGONAL_RAYS, out);
}
