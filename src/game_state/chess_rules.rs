//! Canonical rule constants and status-line texts.
//!
//! Holds the board dimension, the standard starting placement, and the
//! advisory messages shown in the status line.

/// Number of rows and columns on the board.
pub const BOARD_SIZE: u8 = 8;

/// Standard starting placement, FEN board field, rank 8 first.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

pub const MSG_WELCOME: &str = "Welcome! White's turn.";
pub const MSG_NOT_YOUR_TURN: &str = "Not your turn!";
pub const MSG_PIECE_SELECTED: &str = "Piece selected. Click a destination square.";
pub const MSG_SELECT_OWN_PIECE: &str = "Select one of your own pieces.";
pub const MSG_MOVE_CANCELLED: &str = "Move cancelled.";
pub const MSG_OPPONENT_DISCONNECTED: &str = "Opponent disconnected.";
pub const MSG_GAME_IS_OVER: &str = "The game is over.";
