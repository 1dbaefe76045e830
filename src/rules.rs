use crate::board::Board;
use crate::types::Player;

/// The 8 winnable lines in fixed priority order: rows, then columns,
/// then the main and anti diagonals. When more than one line is
/// complete the first match in this enumeration is reported.
pub const LINES: [[u8; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// First line whose three cells hold the same marker, if any.
pub fn winning_triple(board: &Board) -> Option<[u8; 3]> {
    for line in LINES {
        let [a, b, c] = line;
        if let Some(p) = board.get(a) {
            if board.get(b) == Some(p) && board.get(c) == Some(p) {
                return Some(line);
            }
        }
    }
    None
}

/// Marker owning the winning triple, if any.
#[inline]
pub fn winner(board: &Board) -> Option<Player> {
    winning_triple(board).and_then(|triple| board.get(triple[0]))
}
