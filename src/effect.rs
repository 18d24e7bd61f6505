//! Derives the linear operator that toggles induce over GF(3).

use crate::gf::{gf3_add, gf3_neg};
use crate::types::{Trit, TritMatrix, TritVector};

/// Builds the n×n operator for a w×h grid, n = w·h. Entry (cell, toggle)
/// holds the increment the cell receives when that position is toggled
/// once: 1 whenever the two positions share a row or a column (the toggled
/// cell itself included), 0 otherwise. Purely geometric, so it depends on
/// the dimensions alone, never on cell values.
pub fn effect_matrix(width: usize, height: usize) -> TritMatrix {
    let n = width * height;
    let mut effect = TritMatrix::zero(n, n);

    for toggle_y in 0..height {
        for toggle_x in 0..width {
            let toggle = toggle_y * width + toggle_x;

            // Effect on the column
            for y in 0..height {
                let cell = y * width + toggle_x;
                bump(&mut effect, cell, toggle, Trit(1));
            }

            // Effect on the row
            for x in 0..width {
                let cell = toggle_y * width + x;
                bump(&mut effect, cell, toggle, Trit(1));
            }

            // The toggled cell was counted by both passes; +2 nets it to +1
            bump(&mut effect, toggle, toggle, Trit(2));
        }
    }

    effect
}

fn bump(effect: &mut TritMatrix, cell: usize, toggle: usize, amount: Trit) {
    let current = effect.get_unsafe(cell, toggle);
    effect.set_val(cell, toggle, gf3_add(current, amount));
}

/// Target vector for a snapshot: the mod-3 delta that drives each cell to
/// zero. Toggles only ever add, so the delta is the additive inverse of
/// the current value.
pub fn target_vector(state: &TritMatrix) -> TritVector {
    state.data.iter().map(|&cell| gf3_neg(cell)).collect()
}
