//! Four-character long algebraic move notation (`e2e4`).
//!
//! `move_to_long_algebraic` and `long_algebraic_to_move` are the strict codec.
//! `decode_wire_move` is the lenient form used on peer lines: anything that
//! is not a well-formed move decodes to the all-zero move instead of failing.

use tracing::warn;

use crate::chess_errors::NotationError;
use crate::game_state::chess_types::ChessMove;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

pub fn move_to_long_algebraic(chess_move: ChessMove) -> String {
    let mut out = square_to_algebraic(chess_move.from);
    out.push_str(&square_to_algebraic(chess_move.to));
    out
}

pub fn long_algebraic_to_move(long_algebraic: &str) -> Result<ChessMove, NotationError> {
    if long_algebraic.len() != 4 || !long_algebraic.is_ascii() {
        return Err(NotationError::InvalidAlgebraicString(
            long_algebraic.to_owned(),
        ));
    }

    let from = algebraic_to_square(&long_algebraic[0..2])?;
    let to = algebraic_to_square(&long_algebraic[2..4])?;
    Ok(ChessMove::new(from, to))
}

/// Decode one peer line, surrounding whitespace ignored.
///
/// Malformed text yields `ChessMove::default()` (a8 to a8), which the game
/// state then applies like any other move.
pub fn decode_wire_move(line: &str) -> ChessMove {
    let trimmed = line.trim();
    match long_algebraic_to_move(trimmed) {
        Ok(chess_move) => chess_move,
        Err(err) => {
            warn!(line = trimmed, %err, "malformed move notation from peer, using a8a8");
            ChessMove::default()
        }
    }
}

/// Encode a move as one newline-terminated wire line.
#[inline]
pub fn encode_wire_move(chess_move: ChessMove) -> String {
    let mut line = move_to_long_algebraic(chess_move);
    line.push('\n');
    line
}
