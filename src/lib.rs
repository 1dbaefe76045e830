#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // may be revisited

pub mod types;
pub mod rules;
pub mod board;
pub mod state;

pub mod engine {
    pub mod apply;
    pub mod status;
}

// Re-exports: stable minimal API surface for external callers
pub use crate::board::Board;
pub use crate::engine::apply::{apply_move, go_to_move, ApplyError, HistoryError};
pub use crate::engine::status::{status, GameStatus};
pub use crate::rules::{winner, winning_triple, LINES};
pub use crate::state::{is_terminal, legal_moves, GameState, Snapshot};
pub use crate::types::{idx_to_rc, rc_to_idx, Player};
