//! Knight destinations: the eight fixed L-shaped offsets.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::pseudo_move_shared::{push_step, DestinationSet};

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub fn generate_knight_moves(board: &Board, from: Square, side: Color, out: &mut DestinationSet) {
    for (d_row, d_col) in KNIGHT_OFFSETS {
        push_step(board, side, from.offset(d_row, d_col), out);
    }
}
