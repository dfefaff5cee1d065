//! Move synchronization with the peer.
//!
//! Outbound: each locally completed move is written as one `e2e4\n` line,
//! once, with no acknowledgement and no retry. Inbound: a reader thread
//! turns every received line into a `SessionEvent::RemoteMove` and reports
//! the first read failure or end of stream as `PeerDisconnected`.

use std::io::{self, BufRead, BufReader, Read, Write};
use std::thread::{self, JoinHandle};

use crossbeam_channel::Sender;
use tracing::{debug, info, warn};

use crate::game_state::chess_types::ChessMove;
use crate::session::events::SessionEvent;
use crate::utils::long_algebraic::{decode_wire_move, encode_wire_move};

pub struct PeerWriter<W: Write> {
    stream: W,
}

impl<W: Write> PeerWriter<W> {
    pub fn new(stream: W) -> Self {
        Self { stream }
    }

    pub fn send_move(&mut self, chess_move: ChessMove) -> io::Result<()> {
        let line = encode_wire_move(chess_move);
        self.stream.write_all(line.as_bytes())?;
        self.stream.flush()?;
        debug!(line = line.trim_end(), "sent move to peer");
        Ok(())
    }

    pub fn get_ref(&self) -> &W {
        &self.stream
    }
}

/// Read peer lines until the stream ends, feeding moves to `events`.
///
/// Returns once the peer disconnects or the session stops listening.
pub fn run_peer_reader<R: BufRead>(mut reader: R, events: &Sender<SessionEvent>) {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        // Bytes, not `read_line`: invalid UTF-8 is malformed notation, not a
        // broken connection.
        let reason = match reader.read_until(b'\n', &mut buf) {
            Ok(0) => "connection closed by peer".to_owned(),
            Ok(_) => {
                let line = String::from_utf8_lossy(&buf);
                let chess_move = decode_wire_move(&line);
                info!(line = line.trim(), "received move from peer");
                if events.send(SessionEvent::RemoteMove(chess_move)).is_err() {
                    debug!("session stopped, leaving peer reader");
                    return;
                }
                continue;
            }
            Err(err) => err.to_string(),
        };

        warn!(%reason, "peer disconnected");
        let _ = events.send(SessionEvent::PeerDisconnected { reason });
        return;
    }
}

/// Start the background reader on its own thread.
pub fn spawn_peer_reader<R>(stream: R, events: Sender<SessionEvent>) -> io::Result<JoinHandle<()>>
where
    R: Read + Send + 'static,
{
    thread::Builder::new()
        .name("peer-reader".to_owned())
        .spawn(move || run_peer_reader(BufReader::new(stream), &events))
}
