//! Error type shared by the library modules.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A matrix and vector disagree on the dimension they share.
    #[error("matrix dimension {dim} does not match vector length {len}")]
    DimensionMismatch { dim: usize, len: usize },

    /// Zero has no multiplicative inverse in GF(3).
    #[error("cannot invert the zero element of GF(3)")]
    ZeroInverse,

    /// The operating system failed to provide seed entropy.
    #[error("failed to draw entropy for a scramble seed")]
    Entropy,
}
