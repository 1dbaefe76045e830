use thiserror::Error;
use tracing::debug;

use crate::rules::winning_triple;
use crate::state::{GameState, Snapshot};

/// Rejection reasons for [`apply_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApplyError {
    #[error("cell index {0} is out of range (expected 0..=8)")]
    CellOutOfRange(u8),
    #[error("cell {0} is already occupied")]
    CellOccupied(u8),
    #[error("the game is already decided")]
    GameOver,
}

/// Rejection reasons for [`go_to_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HistoryError {
    #[error("move number {requested} is out of range (history has {len} snapshots)")]
    OutOfRange { requested: usize, len: usize },
}

/// Apply a move as a pure transform: returns a new `GameState` with one
/// more snapshot on success. The mover is derived from history length
/// parity, so alternation cannot drift. Rejects decided games and
/// occupied or out-of-range cells; the caller keeps its state on
/// rejection.
pub fn apply_move(state: &GameState, cell: u8) -> Result<GameState, ApplyError> {
    if cell >= 9 {
        return Err(ApplyError::CellOutOfRange(cell));
    }
    let snap = state.current();
    if winning_triple(&snap.board).is_some() || snap.board.is_full() {
        return Err(ApplyError::GameOver);
    }
    if !snap.board.is_empty(cell) {
        return Err(ApplyError::CellOccupied(cell));
    }

    // Clone and mutate
    let mover = state.next_player();
    let mut board = snap.board;
    board.set(cell, Some(mover));

    let mut ns = state.clone();
    ns.push(Snapshot {
        board,
        last_move: Some(cell),
    });

    debug!(%mover, cell, move_number = ns.move_count(), "move applied");
    Ok(ns)
}

/// Jump to an earlier move as a pure transform: the returned state's
/// history is truncated to `move_number + 1` snapshots, making that
/// snapshot the current position. Discarded moves are gone permanently;
/// there is no redo branch. Targets beyond the recorded history are a
/// caller contract violation and fail loudly instead of clamping.
pub fn go_to_move(state: &GameState, move_number: usize) -> Result<GameState, HistoryError> {
    let len = state.history().len();
    if move_number >= len {
        return Err(HistoryError::OutOfRange {
            requested: move_number,
            len,
        });
    }
    let mut ns = state.clone();
    ns.truncate(move_number + 1);
    debug!(move_number, dropped = len - move_number - 1, "history truncated");
    Ok(ns)
}
