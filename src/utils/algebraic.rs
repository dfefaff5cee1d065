//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and board
//! squares. The rank counts up from white's side, so rank = 8 - row.

use crate::chess_errors::NotationError;
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "e4") to a square.
#[inline]
pub fn algebraic_to_square(square: &str) -> Result<Square, NotationError> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(NotationError::InvalidAlgebraicString(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(NotationError::InvalidFile(file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(NotationError::InvalidRank(rank as char));
    }

    Ok(Square {
        row: BOARD_SIZE - (rank - b'0'),
        col: file - b'a',
    })
}

/// Convert a square to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    let file_char = char::from(b'a' + square.col);
    let rank_char = char::from(b'0' + (BOARD_SIZE - square.row));
    format!("{file_char}{rank_char}")
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_square, square_to_algebraic};
    use crate::chess_errors::NotationError;
    use crate::game_state::chess_types::Square;

    #[test]
    fn corner_squares_map_to_screen_rows() {
        assert_eq!(
            algebraic_to_square("a8").expect("a8 should parse"),
            Square { row: 0, col: 0 }
        );
        assert_eq!(
            algebraic_to_square("h1").expect("h1 should parse"),
            Square { row: 7, col: 7 }
        );
        assert_eq!(square_to_algebraic(Square { row: 4, col: 4 }), "e4");
    }

    #[test]
    fn rejects_bad_characters() {
        assert_eq!(algebraic_to_square("i4"), Err(NotationError::InvalidFile('i')));
        assert_eq!(algebraic_to_square("a9"), Err(NotationError::InvalidRank('9')));
        assert_eq!(algebraic_to_square("a0"), Err(NotationError::InvalidRank('0')));
        assert!(matches!(
            algebraic_to_square("e"),
            Err(NotationError::InvalidAlgebraicString(_))
        ));
    }
}
