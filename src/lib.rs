//! Crate root module declarations for the LAN chess program.
//!
//! This file exposes the game-state model, pseudo-legal move generation,
//! peer synchronization, the session loop, and the terminal surfaces so the
//! binary, integration tests, and benchmarks can import stable module paths.

pub mod chess_errors;
pub mod config;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod move_generation {
    pub mod move_generator;
    pub mod pseudo_move_shared;
    pub mod pseudo_moves_bishop;
    pub mod pseudo_moves_king;
    pub mod pseudo_moves_knight;
    pub mod pseudo_moves_pawn;
    pub mod pseudo_moves_queen;
    pub mod pseudo_moves_rook;
}

pub mod net {
    pub mod peer_link;
    pub mod transport;
}

pub mod session {
    pub mod events;
    pub mod session_top;
}

pub mod ui {
    pub mod display;
    pub mod input_controller;
    pub mod terminal;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod game_record;
    pub mod long_algebraic;
}
