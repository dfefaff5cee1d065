//! Events consumed by the session loop.

use crate::game_state::chess_types::ChessMove;
use crate::ui::input_controller::ControllerAction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A local action from the input controller.
    Input(ControllerAction),
    /// A move decoded from a peer line.
    RemoteMove(ChessMove),
    /// The peer stream closed or failed; no further remote moves will arrive.
    PeerDisconnected { reason: String },
}
