use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    // Cells 0..=8 laid out row-major (r*3 + c)
    cells: [Option<Player>; 9],
}

impl Default for Board {
    fn default() -> Self {
        Self { cells: [None; 9] }
    }
}

impl Board {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, idx: u8) -> Option<Player> {
        self.cells[idx as usize]
    }

    #[inline]
    pub fn set(&mut self, idx: u8, cell: Option<Player>) {
        self.cells[idx as usize] = cell;
    }

    #[inline]
    pub fn is_empty(&self, idx: u8) -> bool {
        self.cells[idx as usize].is_none()
    }

    /// Read-only view of all 9 cells in row-major order.
    #[inline]
    pub fn cells(&self) -> &[Option<Player>; 9] {
        &self.cells
    }

    #[inline]
    pub fn filled_count(&self) -> u8 {
        self.cells.iter().filter(|c| c.is_some()).count() as u8
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.filled_count() == 9
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..3u8 {
            if r > 0 {
                write!(f, "\n---+---+---\n")?;
            }
            for c in 0..3u8 {
                if c > 0 {
                    write!(f, "|")?;
                }
                match self.get(r * 3 + c) {
                    Some(p) => write!(f, " {p} ")?,
                    None => write!(f, " . ")?,
                }
            }
        }
        Ok(())
    }
}
