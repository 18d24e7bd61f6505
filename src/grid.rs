//! The lock box itself: a grid of trits mutated one toggle at a time.

use crate::gf::gf3_add;
use crate::params::SCRAMBLE_ROUND_MASK;
use crate::rng::ScrambleRng;
use crate::types::{Trit, TritMatrix};

/// An h×w grid of trinary cells. All mutation goes through [`toggle`];
/// readers only ever see value snapshots from [`state`].
///
/// [`toggle`]: SecureBox::toggle
/// [`state`]: SecureBox::state
#[derive(Debug, Clone)]
pub struct SecureBox {
    cells: TritMatrix,
}

impl SecureBox {
    /// Creates a box with every cell unlocked. Callers are expected to keep
    /// both dimensions within `MIN_GRID_DIM..=MAX_GRID_DIM`.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: TritMatrix::new(height, width),
        }
    }

    /// Creates a box and scrambles it with toggles drawn from `rng`.
    /// Every state produced this way is reachable from the all-zero grid,
    /// so it can always be driven back to it.
    pub fn scrambled(width: usize, height: usize, rng: &mut dyn ScrambleRng) -> Self {
        let mut grid = Self::new(width, height);
        grid.scramble(rng);
        grid
    }

    pub fn width(&self) -> usize {
        self.cells.num_cols()
    }

    pub fn height(&self) -> usize {
        self.cells.num_rows()
    }

    /// Increments (mod 3) every cell in column `x` and every cell in row
    /// `y`. The shared cell is incremented by both passes and then corrected
    /// by +2, leaving it at a net +1 like every other affected cell.
    ///
    /// Coordinates must satisfy `x < width()` and `y < height()`; anything
    /// else is a caller bug and panics.
    pub fn toggle(&mut self, x: usize, y: usize) {
        // Vertical (column)
        for row in 0..self.height() {
            let cell = self.cells.get_unsafe(row, x);
            self.cells.set_val(row, x, gf3_add(cell, Trit(1)));
        }

        // Horizontal (row)
        for col in 0..self.width() {
            let cell = self.cells.get_unsafe(y, col);
            self.cells.set_val(y, col, gf3_add(cell, Trit(1)));
        }

        // Center cell was incremented twice, fix it to be +1 total
        let center = self.cells.get_unsafe(y, x);
        self.cells.set_val(y, x, gf3_add(center, Trit(2)));
    }

    /// True while any cell is non-zero.
    pub fn is_locked(&self) -> bool {
        self.cells.data.iter().any(|cell| cell.0 != 0)
    }

    /// Value snapshot of the grid, rows first. Later toggles never reach a
    /// snapshot handed out here.
    pub fn state(&self) -> TritMatrix {
        self.cells.clone()
    }

    /// Applies a bounded random number of random toggles (up to 4095).
    pub fn scramble(&mut self, rng: &mut dyn ScrambleRng) {
        let rounds = rng.next_u32() & SCRAMBLE_ROUND_MASK;
        for _ in 0..rounds {
            let x = rng.next_u32() as usize % self.width();
            let y = rng.next_u32() as usize % self.height();
            self.toggle(x, y);
        }
    }
}
