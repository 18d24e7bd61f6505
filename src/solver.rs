//! Linear system solver over GF(3) using Gaussian elimination.

use log::debug;

use crate::error::Error;
use crate::gf::{gf3_mul, gf3_sub};
use crate::types::{Trit, TritMatrix, TritVector};

/// Computes the multiplicative inverse of an element in GF(3).
/// Both non-zero elements square to 1 mod 3, so each is its own inverse;
/// only zero is rejected.
pub fn gf3_inv(element: Trit) -> Result<Trit, Error> {
    if element.0 == 0 {
        Err(Error::ZeroInverse)
    } else {
        Ok(element)
    }
}

/// Outcome of an elimination run: one toggle count per position, plus
/// whether every column received a pivot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub counts: TritVector,
    pub full_rank: bool,
}

/// Solves `effect · counts = target` over GF(3).
///
/// The matrix is augmented with the target column and reduced in place:
/// for each column, the first row at or below the pivot position with a
/// non-zero entry is swapped up, scaled to a unit pivot, and eliminated
/// from every other row, above and below. Columns with no usable pivot are
/// skipped and their unknowns stay 0, which makes the result a particular
/// solution when the system is under-determined; `full_rank` reports
/// whether that happened. Inconsistent rows are not detected, so a target
/// outside the operator's image silently yields counts that do not
/// reproduce it.
pub fn solve_linear_system(effect: &TritMatrix, target: &TritVector) -> Result<Solution, Error> {
    let num_equations = effect.num_rows();
    let num_variables = effect.num_cols();

    if num_equations != target.len() {
        return Err(Error::DimensionMismatch {
            dim: num_equations,
            len: target.len(),
        });
    }

    // 1. Construct augmented matrix [effect|target]
    let mut aug_data = Vec::with_capacity(num_equations * (num_variables + 1));
    for r in 0..num_equations {
        for c in 0..num_variables {
            aug_data.push(effect.get_unsafe(r, c));
        }
        aug_data.push(target[r]);
    }
    let mut aug = TritMatrix::new_with_data(num_equations, num_variables + 1, aug_data);

    // 2. Reduction
    let mut pivot_row = 0;
    for pivot_col in 0..num_variables {
        if pivot_row >= num_equations {
            break;
        }

        // Find the first usable pivot at or below the current row; none
        // means this column's unknown is free.
        let Some(found) = (pivot_row..num_equations).find(|&r| aug.get_unsafe(r, pivot_col).0 != 0)
        else {
            continue;
        };

        // Swap rows if necessary
        if found != pivot_row {
            for k in 0..=num_variables {
                let tmp = aug.get_unsafe(pivot_row, k);
                aug.set_val(pivot_row, k, aug.get_unsafe(found, k));
                aug.set_val(found, k, tmp);
            }
        }

        // Normalize pivot row (make the pivot element 1)
        let inv = gf3_inv(aug.get_unsafe(pivot_row, pivot_col))?;
        for k in pivot_col..=num_variables {
            let scaled = gf3_mul(aug.get_unsafe(pivot_row, k), inv);
            aug.set_val(pivot_row, k, scaled);
        }

        // Eliminate the pivot column from every other row
        for r in 0..num_equations {
            if r == pivot_row {
                continue;
            }
            let factor = aug.get_unsafe(r, pivot_col);
            if factor.0 == 0 {
                continue;
            }
            for k in pivot_col..=num_variables {
                let term = gf3_mul(factor, aug.get_unsafe(pivot_row, k));
                let reduced = gf3_sub(aug.get_unsafe(r, k), term);
                aug.set_val(r, k, reduced);
            }
        }

        pivot_row += 1;
    }

    let rank = pivot_row;
    debug!("reduced {num_equations}x{num_variables} system, rank {rank}");

    // 3. Read off the solution. A pivot row's leading entry is its pivot
    // and is 1 after normalization; its augmented value is the count for
    // that column. Free columns keep 0.
    let mut counts = vec![Trit(0); num_variables];
    for r in 0..rank {
        if let Some(col) = (0..num_variables).find(|&c| aug.get_unsafe(r, c).0 != 0) {
            counts[col] = aug.get_unsafe(r, num_variables);
        }
    }

    Ok(Solution {
        counts,
        full_rank: rank == num_variables,
    })
}
