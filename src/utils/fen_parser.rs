//! Placement-to-Board parser.
//!
//! Reads the board field of a Forsyth-Edwards Notation string (ranks 8 to 1,
//! separated by `/`). Placements seed test positions and benchmark fixtures.

use crate::chess_errors::NotationError;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::*;

pub fn parse_placement(placement: &str) -> Result<Board, NotationError> {
    let ranks: Vec<&str> = placement.trim().split('/').collect();
    if ranks.len() != BOARD_SIZE as usize {
        return Err(NotationError::InvalidPlacement(
            "placement must contain 8 ranks".to_owned(),
        ));
    }

    let mut board = Board::empty();

    // FEN lists rank 8 first, which is row 0 here.
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(NotationError::InvalidPlacement(format!(
                        "invalid empty-square count '{ch}'"
                    )));
                }
                col += empty_count as u8;
                if col > BOARD_SIZE {
                    return Err(NotationError::InvalidPlacement(format!(
                        "rank {} has too many files",
                        BOARD_SIZE as usize - row
                    )));
                }
                continue;
            }

            let piece = piece_from_fen_char(ch).ok_or(NotationError::InvalidPieceChar(ch))?;
            let square = Square::new(row as u8, col).ok_or_else(|| {
                NotationError::InvalidPlacement(format!(
                    "rank {} has too many files",
                    BOARD_SIZE as usize - row
                ))
            })?;
            board.set(square, Some(piece));
            col += 1;
        }

        if col != BOARD_SIZE {
            return Err(NotationError::InvalidPlacement(format!(
                "rank {} does not sum to 8 files",
                BOARD_SIZE as usize - row
            )));
        }
    }

    Ok(board)
}

fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece::new(color, kind))
}
