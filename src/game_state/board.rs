//! Board model: an 8x8 grid of optional pieces.
//!
//! The grid only changes through `move_piece`, which clears the source cell
//! and overwrites the destination in one step. Legality is the caller's
//! concern.

use crate::chess_errors::NotationError;
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::*;
use crate::utils::fen_generator::generate_placement;
use crate::utils::fen_parser::parse_placement;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Option<Piece>; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl Board {
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Standard starting position: black on rows 0-1, white on rows 6-7.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for (col, kind) in BACK_RANK.iter().copied().enumerate() {
            board.cells[0][col] = Some(Piece::new(Color::Black, kind));
            board.cells[1][col] = Some(Piece::new(Color::Black, PieceKind::Pawn));
            board.cells[6][col] = Some(Piece::new(Color::White, PieceKind::Pawn));
            board.cells[7][col] = Some(Piece::new(Color::White, kind));
        }
        board
    }

    #[inline]
    pub fn from_placement(placement: &str) -> Result<Self, NotationError> {
        parse_placement(placement)
    }

    #[inline]
    pub fn placement(&self) -> String {
        generate_placement(self)
    }

    /// Piece on `square`; a square outside the grid reads as empty.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.cells
            .get(square.row as usize)
            .and_then(|row| row.get(square.col as usize))
            .copied()
            .flatten()
    }

    /// Copy the source cell onto the destination, then clear the source.
    ///
    /// With `from == to` the cell ends up empty. A move touching a square
    /// outside the grid leaves the board unchanged.
    pub fn move_piece(&mut self, from: Square, to: Square) {
        if !is_on_board(from) || !is_on_board(to) {
            return;
        }
        let moving = self.piece_at(from);
        self.cells[to.row as usize][to.col as usize] = moving;
        self.cells[from.row as usize][from.col as usize] = None;
    }

    pub(crate) fn set(&mut self, square: Square, piece: Option<Piece>) {
        if is_on_board(square) {
            self.cells[square.row as usize][square.col as usize] = piece;
        }
    }

    /// Iterate every occupied cell in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells.iter().enumerate().filter_map(move |(col, cell)| {
                cell.map(|piece| {
                    (
                        Square {
                            row: row as u8,
                            col: col as u8,
                        },
                        piece,
                    )
                })
            })
        })
    }
}

#[inline]
fn is_on_board(square: Square) -> bool {
    square.row < BOARD_SIZE && square.col < BOARD_SIZE
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::game_state::chess_rules::STARTING_PLACEMENT;
    use crate::game_state::chess_types::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).expect("square should be on the board")
    }

    #[test]
    fn standard_board_matches_starting_placement() {
        let parsed = Board::from_placement(STARTING_PLACEMENT).expect("placement should parse");
        assert_eq!(Board::standard(), parsed);
        assert_eq!(Board::standard().pieces().count(), 32);
    }

    #[test]
    fn standard_board_orientation() {
        let board = Board::standard();
        assert_eq!(
            board.piece_at(sq(0, 4)),
            Some(Piece::new(Color::Black, PieceKind::King))
        );
        assert_eq!(
            board.piece_at(sq(7, 3)),
            Some(Piece::new(Color::White, PieceKind::Queen))
        );
        assert_eq!(board.piece_at(sq(4, 4)), None);
    }

    #[test]
    fn move_piece_overwrites_destination_and_clears_source() {
        let mut board = Board::standard();
        board.move_piece(sq(6, 4), sq(1, 4));
        assert_eq!(board.piece_at(sq(6, 4)), None);
        assert_eq!(
            board.piece_at(sq(1, 4)),
            Some(Piece::new(Color::White, PieceKind::Pawn))
        );
        assert_eq!(board.pieces().count(), 31);
    }

    #[test]
    fn move_piece_onto_itself_empties_the_cell() {
        let mut board = Board::standard();
        board.move_piece(sq(0, 0), sq(0, 0));
        assert_eq!(board.piece_at(sq(0, 0)), None);
    }

    #[test]
    fn hand_built_off_board_squares_are_harmless() {
        let mut board = Board::standard();
        let off_board = Square { row: 9, col: 0 };
        assert_eq!(board.piece_at(off_board), None);
        assert_eq!(board.piece_at(Square { row: 0, col: 8 }), None);

        board.move_piece(off_board, sq(4, 4));
        board.move_piece(sq(6, 4), off_board);
        assert_eq!(board, Board::standard());
    }
}
