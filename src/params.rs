//! Constants shared across the lock box puzzle.

/// Field modulus: cell values and toggle counts are elements of GF(3).
pub const Q: u8 = 3;

/// Smallest grid dimension the command-line collaborator accepts.
pub const MIN_GRID_DIM: usize = 1;

/// Largest grid dimension the command-line collaborator accepts.
/// Caps the linear system at 100 unknowns.
pub const MAX_GRID_DIM: usize = 10;

/// Mask applied to a random word when picking the number of scramble
/// rounds, giving 0..=4095 toggles per scramble.
pub const SCRAMBLE_ROUND_MASK: u32 = 0xFFF;

/// Key length for the AES-128-CTR keystream generator.
pub const SEED_BYTES: usize = 16;
