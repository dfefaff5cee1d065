//! Errors used throughout the crate.
//!
//! `NotationError` covers the strict text codecs (squares, moves, board
//! placements). `SessionError` covers everything that can stop a session:
//! transport setup, peer writes, the input surface, and record output.
//!
//! The lenient wire decoder used for peer lines never produces an error; see
//! `utils::long_algebraic::decode_wire_move`.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    /// Text had the wrong number of characters for the expected form.
    #[error("invalid algebraic string: {0:?}")]
    InvalidAlgebraicString(String),

    /// A file character outside `a..=h`.
    #[error("invalid file character: {0:?}")]
    InvalidFile(char),

    /// A rank character outside `1..=8`.
    #[error("invalid rank character: {0:?}")]
    InvalidRank(char),

    /// A board placement that does not describe an 8x8 grid.
    #[error("invalid placement: {0}")]
    InvalidPlacement(String),

    #[error("invalid piece character in placement: {0:?}")]
    InvalidPieceChar(char),
}

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input surface reported an unrecoverable error.
    #[error("input surface failed: {0}")]
    InputSurface(io::Error),

    #[error("could not determine a non-loopback IPv4 address")]
    NoLocalAddress,

    #[error("invalid choice {0:?}, expected 'h' or 'j'")]
    InvalidRoleChoice(String),

    #[error("failed to write game record to {path}: {source}")]
    RecordWrite { path: PathBuf, source: io::Error },
}

/// Result type alias for session operations.
pub type SessionResult<T> = Result<T, SessionError>;
