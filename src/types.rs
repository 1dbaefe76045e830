use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    #[inline]
    pub fn other(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// Board indexing helpers (3x3 board)
#[inline]
pub fn idx_to_rc(idx: u8) -> (u8, u8) {
    debug_assert!(idx < 9);
    (idx / 3, idx % 3)
}

#[inline]
pub fn rc_to_idx(r: u8, c: u8) -> Option<u8> {
    if r < 3 && c < 3 {
        Some(r * 3 + c)
    } else {
        None
    }
}
