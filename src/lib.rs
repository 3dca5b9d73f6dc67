//! Crate root module declarations for the checkers engine.
//!
//! Exposes the game state model, move generation, engines, the line protocol
//! session, and the message codec helpers so the binaries, tests, and
//! benchmarks can import stable module paths.

pub mod checkers_errors;

pub mod game_state {
    pub mod board;
    pub mod checkers_rules;
    pub mod checkers_types;
    pub mod game_state;
}

pub mod moves {
    pub mod checkers_move;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_generator;
    pub mod legal_move_jumps;
    pub mod legal_move_shared;
    pub mod legal_move_steps;
    pub mod move_generator;
    pub mod perft;
}

pub mod engines {
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod protocol {
    pub mod session;
    pub mod session_options;
}

pub mod utils {
    pub mod deadline;
    pub mod logging;
    pub mod message_generator;
    pub mod message_parser;
    pub mod move_notation;
    pub mod render_game_state;
}
