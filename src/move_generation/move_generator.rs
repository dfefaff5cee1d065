//! Pseudo-legal destination generation.
//!
//! Dispatches on the piece kind to the per-piece generators. The result is
//! the full set of squares the piece could reach by its movement pattern,
//! without checking whether the mover's own king is left capturable.

use tracing::trace;

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::pseudo_move_shared::DestinationSet;
use crate::move_generation::pseudo_moves_bishop::generate_bishop_moves;
use crate::move_generation::pseudo_moves_king::generate_king_moves;
use crate::move_generation::pseudo_moves_knight::generate_knight_moves;
use crate::move_generation::pseudo_moves_pawn::generate_pawn_moves;
use crate::move_generation::pseudo_moves_queen::generate_queen_moves;
use crate::move_generation::pseudo_moves_rook::generate_rook_moves;

/// Destinations for `piece` standing on `from`.
pub fn piece_destinations(board: &Board, piece: Piece, from: Square) -> DestinationSet {
    let mut out = DestinationSet::new();
    let side = piece.color;

    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(board, from, side, &mut out),
        PieceKind::Knight => generate_knight_moves(board, from, side, &mut out),
        PieceKind::Bishop => generate_bishop_moves(board, from, side, &mut out),
        PieceKind::Rook => generate_rook_moves(board, from, side, &mut out),
        PieceKind::Queen => generate_queen_moves(board, from, side, &mut out),
        PieceKind::King => generate_king_moves(board, from, side, &mut out),
    }

    trace!(?piece, ?from, count = out.len(), "generated destinations");
    out
}

/// Destinations for whatever stands on `from`; empty when the square is empty.
pub fn generate_destinations(board: &Board, from: Square) -> DestinationSet {
    match board.piece_at(from) {
        Some(piece) => piece_destinations(board, piece, from),
        None => DestinationSet::new(),
    }
}
