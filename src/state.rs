use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::rules::winning_triple;
use crate::types::{idx_to_rc, Player};

/// One recorded position: the board after a move plus the cell that
/// move filled. `last_move` is `None` only for the initial snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub board: Board,
    pub last_move: Option<u8>,
}

impl Snapshot {
    #[inline]
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            last_move: None,
        }
    }
}

/// Full game state: the ordered snapshot history from the start of the
/// game to the latest played (or jumped-to) move.
///
/// The history is never empty; snapshot 0 is always the all-empty
/// board. The latest snapshot is the current official position, and
/// everything else (turn indicator, status) is derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    history: Vec<Snapshot>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    #[inline]
    pub fn new() -> Self {
        Self {
            history: vec![Snapshot::initial()],
        }
    }

    /// Latest snapshot, i.e. the current position.
    #[inline]
    pub fn current(&self) -> &Snapshot {
        &self.history[self.history.len() - 1]
    }

    #[inline]
    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    /// Number of moves recorded so far.
    #[inline]
    pub fn move_count(&self) -> usize {
        self.history.len() - 1
    }

    /// Player entitled to move next, recomputed from history length
    /// parity: X on even move counts, O on odd. Never stored.
    #[inline]
    pub fn next_player(&self) -> Player {
        if self.move_count() % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Ordered empty cells of the current position; empty once a line
    /// is complete.
    pub fn legal_moves(&self) -> Vec<u8> {
        let board = &self.current().board;
        if winning_triple(board).is_some() {
            return Vec::new();
        }
        let mut moves = Vec::with_capacity((9 - board.filled_count()) as usize);
        for cell in 0u8..9 {
            if board.is_empty(cell) {
                moves.push(cell);
            }
        }
        moves
    }

    /// Game is over: a line is complete or the board is full.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        let board = &self.current().board;
        board.is_full() || winning_triple(board).is_some()
    }

    /// Label for a recorded move, `None` beyond the history. Move 0 is
    /// the start; later labels carry the 1-indexed (row, column) of the
    /// cell that move filled.
    pub fn move_label(&self, move_number: usize) -> Option<String> {
        let snap = self.history.get(move_number)?;
        Some(match snap.last_move {
            None => "Go to the start".to_string(),
            Some(cell) => {
                let (r, c) = idx_to_rc(cell);
                format!("Go to move #{} ({}, {})", move_number, r + 1, c + 1)
            }
        })
    }

    /// Ordered labels for every recorded snapshot, for a move-history
    /// display.
    pub fn move_labels(&self) -> Vec<String> {
        (0..self.history.len())
            .filter_map(|n| self.move_label(n))
            .collect()
    }

    #[inline]
    pub(crate) fn push(&mut self, snapshot: Snapshot) {
        self.history.push(snapshot);
    }

    #[inline]
    pub(crate) fn truncate(&mut self, len: usize) {
        self.history.truncate(len);
    }
}

/// Re-export minimal surface for callers as free functions to align with the engine API.
#[inline]
pub fn legal_moves(state: &GameState) -> Vec<u8> {
    state.legal_moves()
}

#[inline]
pub fn is_terminal(state: &GameState) -> bool {
    state.is_terminal()
}
