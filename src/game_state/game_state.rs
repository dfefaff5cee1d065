//! Game state and its select-then-move state machine.
//!
//! `GameState` aggregates the board, turn, terminal flag, selection, legal
//! destinations of the selection, and the status message. `apply_move` is the
//! only path that mutates the board, for local and remote moves alike.

use tracing::{debug, info, trace, warn};

use crate::game_state::board::Board;
use crate::game_state::chess_rules::*;
use crate::game_state::chess_types::*;
use crate::move_generation::move_generator::generate_destinations;
use crate::move_generation::pseudo_move_shared::DestinationSet;
use crate::utils::long_algebraic::move_to_long_algebraic;

/// Externally visible state of the selection machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    AwaitingSelection,
    PieceSelected,
    GameOver,
}

/// Result of feeding a move to `GameState::apply_move`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Applied,
    /// The move captured a king; the mover won.
    KingCaptured { winner: Color },
    /// The game had already ended; nothing changed.
    Rejected,
}

#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    current_player: Color,
    game_over: bool,
    winner: Option<Color>,
    selected: Option<Square>,
    legal_destinations: DestinationSet,
    message: String,
    history: Vec<ChessMove>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard starting position, white to move.
    pub fn new_game() -> Self {
        Self::from_board(Board::standard(), Color::White)
    }

    pub fn from_board(board: Board, current_player: Color) -> Self {
        Self {
            board,
            current_player,
            game_over: false,
            winner: None,
            selected: None,
            legal_destinations: DestinationSet::new(),
            message: MSG_WELCOME.to_owned(),
            history: Vec::new(),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn current_player(&self) -> Color {
        self.current_player
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    #[inline]
    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    #[inline]
    pub fn selected_square(&self) -> Option<Square> {
        self.selected
    }

    #[inline]
    pub fn legal_destinations(&self) -> &DestinationSet {
        &self.legal_destinations
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Every applied move, oldest first.
    #[inline]
    pub fn history(&self) -> &[ChessMove] {
        &self.history
    }

    pub fn phase(&self) -> GamePhase {
        if self.game_over {
            GamePhase::GameOver
        } else if self.selected.is_some() {
            GamePhase::PieceSelected
        } else {
            GamePhase::AwaitingSelection
        }
    }

    /// Handle a confirm gesture by `player` on `square`.
    ///
    /// Returns the move when the gesture completed one; the caller forwards it
    /// to the peer. Every other outcome only updates the message and the
    /// selection.
    pub fn select_square(&mut self, player: Color, square: Square) -> Option<ChessMove> {
        if self.game_over {
            self.message = MSG_GAME_IS_OVER.to_owned();
            return None;
        }

        if self.current_player != player {
            self.message = MSG_NOT_YOUR_TURN.to_owned();
            return None;
        }

        if let Some(from) = self.selected {
            if self.legal_destinations.contains(&square) {
                let chess_move = ChessMove::new(from, square);
                self.apply_move(chess_move);
                return Some(chess_move);
            }

            trace!(?from, ?square, "selection cancelled");
            self.clear_selection();
            self.message = MSG_MOVE_CANCELLED.to_owned();
            return None;
        }

        match self.board.piece_at(square) {
            Some(piece) if piece.color == self.current_player => {
                self.selected = Some(square);
                self.legal_destinations = generate_destinations(&self.board, square);
                self.message = MSG_PIECE_SELECTED.to_owned();
                trace!(
                    ?square,
                    destinations = self.legal_destinations.len(),
                    "piece selected"
                );
            }
            _ => {
                self.message = MSG_SELECT_OWN_PIECE.to_owned();
            }
        }

        None
    }

    /// Move a piece, detect king capture, and pass the turn.
    ///
    /// No legality check: remote moves are replayed exactly as received.
    pub fn apply_move(&mut self, chess_move: ChessMove) -> MoveOutcome {
        if self.game_over {
            warn!(
                mv = %move_to_long_algebraic(chess_move),
                "ignoring move after game over"
            );
            return MoveOutcome::Rejected;
        }

        let mover = self.current_player;
        let captured = self.board.piece_at(chess_move.to);

        self.board.move_piece(chess_move.from, chess_move.to);
        self.history.push(chess_move);
        self.clear_selection();
        self.current_player = mover.opposite();

        debug!(
            mv = %move_to_long_algebraic(chess_move),
            %mover,
            placement = %self.board.placement(),
            "move applied"
        );

        if captured.is_some_and(Piece::is_king) {
            self.game_over = true;
            self.winner = Some(mover);
            self.message = format!("Game Over! {mover} wins.");
            info!(winner = %mover, "king captured");
            return MoveOutcome::KingCaptured { winner: mover };
        }

        self.message = format!("{}'s turn.", self.current_player);
        MoveOutcome::Applied
    }

    /// End the game because the peer connection failed.
    ///
    /// A result already decided on the board keeps its message.
    pub fn mark_disconnected(&mut self) {
        self.clear_selection();
        if !self.game_over {
            self.game_over = true;
            self.message = MSG_OPPONENT_DISCONNECTED.to_owned();
        }
    }

    fn clear_selection(&mut self) {
        self.selected = None;
        self.legal_destinations.clear();
    }
}
