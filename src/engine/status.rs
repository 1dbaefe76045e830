use std::fmt;

use serde::{Deserialize, Serialize};

use crate::rules::winning_triple;
use crate::state::GameState;
use crate::types::Player;

/// Terminal evaluation of the current position. Derived on every call,
/// never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress { next: Player },
    Won { winner: Player, triple: [u8; 3] },
    Draw,
}

/// Compute the status of the latest snapshot. A completed line wins
/// over a full board, so a ninth move that closes a line reports `Won`,
/// not `Draw`.
pub fn status(state: &GameState) -> GameStatus {
    let board = &state.current().board;
    if let Some(triple) = winning_triple(board) {
        if let Some(winner) = board.get(triple[0]) {
            return GameStatus::Won { winner, triple };
        }
    }
    if board.is_full() {
        GameStatus::Draw
    } else {
        GameStatus::InProgress {
            next: state.next_player(),
        }
    }
}

impl GameStatus {
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }

    /// Winning triple for highlighting, if the game is won.
    #[inline]
    pub fn winning_triple(self) -> Option<[u8; 3]> {
        match self {
            GameStatus::Won { triple, .. } => Some(triple),
            GameStatus::InProgress { .. } | GameStatus::Draw => None,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress { next } => write!(f, "Next player: {next}"),
            GameStatus::Won { winner, .. } => write!(f, "Congrats! Winner is player {winner}"),
            GameStatus::Draw => write!(f, "Game over! Draw"),
        }
    }
}
