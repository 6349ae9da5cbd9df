//! Crate root module declarations for the chess referee.
//!
//! This file exposes every subsystem (board model, move geometry, rule gates
//! and move execution, notation and position utilities, shell configuration)
//! so the binary, benches and external tooling can import stable module paths.

pub mod chess_errors;
pub mod config;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod candidates;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod line_of_sight;
    pub mod move_descriptions;
    pub mod pawn_moves;
    pub mod pseudo_legal;
    pub mod queen_moves;
    pub mod ray_candidates;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_existence;
    pub mod legal_move_generator;
    pub mod move_execution;
    pub mod perft;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod move_history;
    pub mod pgn;
    pub mod random_playout;
    pub mod render_game_state;
    pub mod san_parser;
    pub mod san_writer;
}
