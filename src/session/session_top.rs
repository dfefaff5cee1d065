//! Session loop: the single owner of the game state.
//!
//! Local input actions, remote moves, and disconnection notices all arrive
//! on one channel and are applied here in arrival order, so selection state
//! and remote moves never interleave mid-update. The frame is redrawn after
//! every event.

use std::io::Write;

use crossbeam_channel::Receiver;
use tracing::{debug, info, warn};

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::net::peer_link::PeerWriter;
use crate::session::events::SessionEvent;
use crate::ui::display::{render_frame, DisplayConfig, DisplaySurface};
use crate::ui::input_controller::ControllerAction;
use crate::utils::long_algebraic::move_to_long_algebraic;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionControl {
    Continue,
    Quit,
}

pub struct Session<W: Write, D: DisplaySurface> {
    game: GameState,
    local_color: Color,
    cursor: Square,
    display: DisplayConfig,
    peer: PeerWriter<W>,
    surface: D,
}

impl<W: Write, D: DisplaySurface> Session<W, D> {
    pub fn new(local_color: Color, peer: PeerWriter<W>, surface: D, display: DisplayConfig) -> Self {
        Self::with_game(GameState::new_game(), local_color, peer, surface, display)
    }

    pub fn with_game(
        game: GameState,
        local_color: Color,
        peer: PeerWriter<W>,
        surface: D,
        display: DisplayConfig,
    ) -> Self {
        Self {
            game,
            local_color,
            cursor: Square::default(),
            display,
            peer,
            surface,
        }
    }

    #[inline]
    pub fn game(&self) -> &GameState {
        &self.game
    }

    #[inline]
    pub fn local_color(&self) -> Color {
        self.local_color
    }

    #[inline]
    pub fn cursor(&self) -> Square {
        self.cursor
    }

    #[inline]
    pub fn display(&self) -> &DisplayConfig {
        &self.display
    }

    #[inline]
    pub fn peer(&self) -> &PeerWriter<W> {
        &self.peer
    }

    #[inline]
    pub fn surface(&self) -> &D {
        &self.surface
    }

    pub fn handle_event(&mut self, event: SessionEvent) -> SessionControl {
        match event {
            SessionEvent::Input(action) => return self.handle_action(action),
            SessionEvent::RemoteMove(chess_move) => {
                let outcome = self.game.apply_move(chess_move);
                debug!(
                    mv = %move_to_long_algebraic(chess_move),
                    ?outcome,
                    "remote move"
                );
            }
            SessionEvent::PeerDisconnected { reason } => {
                info!(%reason, "ending game after disconnection");
                self.game.mark_disconnected();
            }
        }
        SessionControl::Continue
    }

    fn handle_action(&mut self, action: ControllerAction) -> SessionControl {
        match action {
            ControllerAction::Quit => {
                info!("local player quit");
                return SessionControl::Quit;
            }
            ControllerAction::CycleTheme => {
                self.display.cycle_theme();
                debug!(theme = ?self.display.theme, "theme changed");
            }
            ControllerAction::Pointer { cell, confirm } => {
                self.cursor = cell;
                if confirm {
                    if let Some(chess_move) = self.game.select_square(self.local_color, cell) {
                        self.send_local_move(chess_move);
                    }
                }
            }
        }
        SessionControl::Continue
    }

    fn send_local_move(&mut self, chess_move: ChessMove) {
        if let Err(err) = self.peer.send_move(chess_move) {
            warn!(
                mv = %move_to_long_algebraic(chess_move),
                %err,
                "failed to send move to peer"
            );
        }
        if let Some(winner) = self.game.winner() {
            info!(%winner, "local move captured the king");
        }
    }

    pub fn redraw(&mut self) {
        if let Err(err) = render_frame(&self.game, self.cursor, &self.display, &mut self.surface) {
            warn!(%err, "failed to draw frame");
        }
    }

    /// Process events until the local player quits or every producer is gone,
    /// then hand back the final game state.
    pub fn run(mut self, events: &Receiver<SessionEvent>) -> GameState {
        self.redraw();
        for event in events.iter() {
            let control = self.handle_event(event);
            self.redraw();
            if control == SessionControl::Quit {
                break;
            }
        }
        self.game
    }
}
