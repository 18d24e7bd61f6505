//! Move list extraction from a solved toggle-count vector.

use serde::{Deserialize, Serialize};

use crate::types::TritVector;

/// One entry of a solve plan: toggle position (x, y) `count` times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub x: usize,
    pub y: usize,
    pub count: u8,
}

/// Walks the solution vector in row-major order (y outer, x inner) and
/// keeps the positions with a non-zero count.
pub fn collect_moves(counts: &TritVector, width: usize, height: usize) -> Vec<Move> {
    let mut moves = Vec::new();
    for y in 0..height {
        for x in 0..width {
            let count = counts[y * width + x].0;
            if count > 0 {
                moves.push(Move { x, y, count });
            }
        }
    }
    moves
}
