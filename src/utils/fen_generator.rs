use crate::game_state::board::Board;
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::*;

/// Render the board as a FEN board field, rank 8 first.
pub fn generate_placement(board: &Board) -> String {
    let mut out = String::new();

    for row in 0..BOARD_SIZE {
        let mut empty_count = 0u8;

        for col in 0..BOARD_SIZE {
            match board.piece_at(Square { row, col }) {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece_to_fen_char(piece));
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row + 1 < BOARD_SIZE {
            out.push('/');
        }
    }

    out
}

fn piece_to_fen_char(piece: Piece) -> char {
    let ch = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };

    match piece.color {
        Color::White => ch.to_ascii_uppercase(),
        Color::Black => ch,
    }
}

#[cfg(test)]
mod tests {
    use super::generate_placement;
    use crate::game_state::board::Board;
    use crate::game_state::chess_rules::STARTING_PLACEMENT;
    use crate::game_state::chess_types::Square;

    #[test]
    fn standard_board_generates_starting_placement() {
        assert_eq!(generate_placement(&Board::standard()), STARTING_PLACEMENT);
    }

    #[test]
    fn placement_reflects_a_moved_pawn() {
        let mut board = Board::standard();
        board.move_piece(Square { row: 6, col: 4 }, Square { row: 4, col: 4 });
        assert_eq!(
            generate_placement(&board),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR"
        );
    }
}
