//! Matrix helpers over GF(3).

use crate::error::Error;
use crate::gf::{gf3_add, gf3_mul};
use crate::types::{Trit, TritMatrix, TritVector};

// --- Implementation of TritMatrix helper functions ---
// The TritMatrix struct is defined in types.rs. Here we add methods to it.
impl TritMatrix {
    /// Creates a new matrix from a flat vector of data, rows, and columns.
    /// Panics if `data.len() != rows * cols`.
    pub fn new_with_data(rows: usize, cols: usize, data: Vec<Trit>) -> Self {
        if data.len() != rows * cols {
            panic!("Data length does not match rows * cols");
        }
        TritMatrix { data, rows, cols }
    }

    /// Creates a new matrix filled with `Trit(0)`.
    pub fn zero(rows: usize, cols: usize) -> Self {
        TritMatrix {
            data: vec![Trit(0); rows * cols],
            rows,
            cols,
        }
    }

    /// Gets an element at (r, c), panics if out of bounds.
    /// Useful for internal operations where bounds are already checked.
    pub fn get_unsafe(&self, r: usize, c: usize) -> Trit {
        if r >= self.rows || c >= self.cols {
            panic!("get_unsafe: Index out of bounds (r={}, c={}, rows={}, cols={})", r, c, self.rows, self.cols);
        }
        self.data[r * self.cols + c]
    }

    /// Sets an element at (r, c), panics if out of bounds.
    pub fn set_val(&mut self, r: usize, c: usize, val: Trit) {
        if r < self.rows && c < self.cols {
            self.data[r * self.cols + c] = val;
        } else {
            panic!("set_val: Index out of bounds (r={}, c={}, rows={}, cols={})", r, c, self.rows, self.cols);
        }
    }

    /// Returns the number of rows in the matrix.
    pub fn num_rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns in the matrix.
    pub fn num_cols(&self) -> usize {
        self.cols
    }

    /// Converts matrix rows to a `Vec` of `TritVector`s.
    pub fn to_vectors(&self) -> Vec<TritVector> {
        let mut vecs = Vec::with_capacity(self.rows);
        for i in 0..self.rows {
            let row_start = i * self.cols;
            let row_end = row_start + self.cols;
            vecs.push(self.data[row_start..row_end].to_vec());
        }
        vecs
    }

    /// Creates a matrix from a `Vec` of `TritVector`s (rows).
    /// Panics if rows have inconsistent lengths.
    pub fn from_vectors(vecs: Vec<TritVector>) -> Self {
        if vecs.is_empty() {
            return Self::zero(0, 0);
        }
        let rows = vecs.len();
        let cols = vecs[0].len();
        let mut data = Vec::with_capacity(rows * cols);
        for vec in vecs {
            if vec.len() != cols {
                panic!("Inconsistent column lengths in input vectors");
            }
            data.extend_from_slice(&vec);
        }
        TritMatrix { data, rows, cols }
    }
}

// --- Standalone Matrix Operations ---

/// Multiplies a matrix by a vector (matrix * vector) over GF(3).
/// Treats the vector as a column vector.
/// Returns Err if dimensions are incompatible (matrix.cols != vector.len()).
pub fn matrix_vec_mul(matrix: &TritMatrix, vector: &TritVector) -> Result<TritVector, Error> {
    if matrix.num_cols() != vector.len() {
        return Err(Error::DimensionMismatch {
            dim: matrix.num_cols(),
            len: vector.len(),
        });
    }
    let mut result_vector = Vec::with_capacity(matrix.num_rows());
    for r in 0..matrix.num_rows() {
        let mut sum = Trit(0);
        for c in 0..matrix.num_cols() {
            sum = gf3_add(sum, gf3_mul(matrix.get_unsafe(r, c), vector[c]));
        }
        result_vector.push(sum);
    }
    Ok(result_vector)
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    fn t(val: u8) -> Trit {
        Trit(val)
    }

    #[test]
    fn test_matrix_constructors_and_getters() {
        let m1 = TritMatrix::new_with_data(2, 2, vec![t(1), t(2), t(0), t(1)]);
        assert_eq!(m1.num_rows(), 2);
        assert_eq!(m1.num_cols(), 2);
        assert_eq!(m1.get(0, 0), Some(&t(1)));
        assert_eq!(m1.get_unsafe(1, 1), t(1));
        assert_eq!(m1.get(2, 0), None);

        let m_zero = TritMatrix::zero(2, 3);
        assert_eq!(m_zero.get_unsafe(1, 2), t(0));
        assert_eq!(m_zero.num_rows(), 2);
        assert_eq!(m_zero.num_cols(), 3);
    }

    #[test]
    #[should_panic]
    fn test_new_with_data_panic() {
        TritMatrix::new_with_data(2, 2, vec![t(1)]);
    }

    #[test]
    fn test_matrix_set_and_set_val() {
        let mut m = TritMatrix::zero(2, 2);
        m.set_val(0, 1, t(2));
        assert_eq!(m.get_unsafe(0, 1), t(2));

        // The bounds-checked setter ignores out-of-range writes
        m.set(5, 5, t(1));
        assert_eq!(m, TritMatrix::new_with_data(2, 2, vec![t(0), t(2), t(0), t(0)]));
    }

    #[test]
    #[should_panic]
    fn test_set_val_panic() {
        let mut m = TritMatrix::zero(1, 1);
        m.set_val(1, 1, t(1));
    }

    #[test]
    fn test_to_from_vectors() {
        let vecs = vec![vec![t(1), t(2)], vec![t(0), t(1)]];
        let m = TritMatrix::from_vectors(vecs.clone());
        assert_eq!(m.num_rows(), 2);
        assert_eq!(m.num_cols(), 2);
        assert_eq!(m.get_unsafe(0, 1), t(2));

        let recovered_vecs = m.to_vectors();
        assert_eq!(vecs, recovered_vecs);

        assert!(TritMatrix::from_vectors(vec![]).data.is_empty());
    }

    #[test]
    #[should_panic]
    fn test_from_vectors_panic() {
        TritMatrix::from_vectors(vec![vec![t(1)], vec![t(2), t(0)]]);
    }

    #[test]
    fn test_matrix_vector_multiplication() {
        let matrix = TritMatrix::new_with_data(2, 3, vec![
            t(1), t(2), t(0),
            t(2), t(2), t(1),
        ]);
        let vector = vec![t(2), t(1), t(2)];
        // r0 = 1*2 + 2*1 + 0*2 = 4 mod 3 = 1
        // r1 = 2*2 + 2*1 + 1*2 = 8 mod 3 = 2
        let expected_result = vec![t(1), t(2)];
        assert_eq!(matrix_vec_mul(&matrix, &vector).unwrap(), expected_result);

        let incompatible_vector = vec![t(1), t(2)];
        assert_eq!(
            matrix_vec_mul(&matrix, &incompatible_vector),
            Err(Error::DimensionMismatch { dim: 3, len: 2 })
        );
    }
}
