//! Game record output.
//!
//! Serializes the applied move history with PGN-style tag pairs and
//! numbered long-algebraic movetext so a finished session can be kept.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use chrono::{Local, NaiveDate};
use tracing::info;

use crate::chess_errors::{SessionError, SessionResult};
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::utils::long_algebraic::move_to_long_algebraic;

/// Result token for a finished or unfinished game.
pub fn result_token(game: &GameState) -> &'static str {
    match game.winner() {
        Some(Color::White) => "1-0",
        Some(Color::Black) => "0-1",
        None => "*",
    }
}

pub fn write_game_record(
    history: &[ChessMove],
    result: &str,
    date: NaiveDate,
    local_color: Color,
) -> String {
    let (white, black) = match local_color {
        Color::White => ("Local", "Opponent"),
        Color::Black => ("Opponent", "Local"),
    };

    let mut headers = BTreeMap::<&str, String>::new();
    headers.insert("Event", "LAN Chess Game".to_owned());
    headers.insert("Site", "LAN".to_owned());
    headers.insert("Date", date.format("%Y.%m.%d").to_string());
    headers.insert("White", white.to_owned());
    headers.insert("Black", black.to_owned());
    headers.insert("Result", result.to_owned());

    let mut out = String::new();
    for (key, value) in &headers {
        out.push_str(&format!("[{} \"{}\"]\n", key, value.replace('"', "\\\"")));
    }
    out.push('\n');

    let mut movetext = Vec::<String>::with_capacity(history.len() + history.len() / 2 + 1);
    for (ply, chess_move) in history.iter().enumerate() {
        if ply % 2 == 0 {
            movetext.push(format!("{}.", ply / 2 + 1));
        }
        movetext.push(move_to_long_algebraic(*chess_move));
    }
    movetext.push(result.to_owned());

    out.push_str(&movetext.join(" "));
    out.push('\n');
    out
}

/// Write the record of `game` to `path`, dated today.
pub fn save_game_record(path: &Path, game: &GameState, local_color: Color) -> SessionResult<()> {
    let record = write_game_record(
        game.history(),
        result_token(game),
        Local::now().date_naive(),
        local_color,
    );
    fs::write(path, record).map_err(|source| SessionError::RecordWrite {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), moves = game.history().len(), "game record written");
    Ok(())
}
