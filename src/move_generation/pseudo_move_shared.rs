//! Helpers shared by the per-piece destination generators.
//!
//! Every generator writes into a `DestinationSet` keyed by `Square`. Nothing
//! here looks at king safety: destinations are pseudo-legal only.

use std::collections::BTreeSet;

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

pub type DestinationSet = BTreeSet<Square>;

pub const ORTHOGONAL_RAYS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
pub const DIAGONAL_RAYS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

#[inline]
pub fn enemy_piece_on(board: &Board, square: Square, side: Color) -> Option<Piece> {
    board.piece_at(square).filter(|piece| piece.color != side)
}

/// Add `target` when it is on the board and either empty or held by the enemy.
#[inline]
pub fn push_step(board: &Board, side: Color, target: Option<Square>, out: &mut DestinationSet) {
    let Some(to) = target else {
        return;
    };
    match board.piece_at(to) {
        Some(piece) if piece.color == side => {}
        _ => {
            out.insert(to);
        }
    }
}

/// Walk each ray outward from `from` until the edge or the first occupied
/// square. The blocking square is included only when it holds an enemy.
pub fn push_rays(
    board: &Board,
    from: Square,
    side: Color,
    rays: &[(i8, i8)],
    out: &mut DestinationSet,
) {
    for &(d_row, d_col) in rays {
        let mut cursor = from;
        while let Some(to) = cursor.offset(d_row, d_col) {
            match board.piece_at(to) {
                None => {
                    out.insert(to);
                }
                Some(blocker) => {
                    if blocker.color != side {
                        out.insert(to);
                    }
                    break;
                }
            }
            cursor = to;
        }
    }
}
