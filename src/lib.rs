//! Solver core for the trinary lock box puzzle.
//!
//! A box is an h×w grid of trits (0 unlocked, 1 partially locked, 2 fully
//! locked). A toggle increments one full row and one full column mod 3,
//! with the shared cell corrected to a net +1. Scrambling applies a bounded
//! random number of toggles, and unlocking inverts the operator the toggles
//! induce over GF(3) via Gaussian elimination.

pub mod params;
pub mod error;
pub mod types;
pub mod gf;
pub mod matrix;
pub mod hash;
pub mod rng;
pub mod grid;
pub mod effect;
pub mod solver;
pub mod moves;
pub mod api;

pub use api::{solve, SolvePlan};
pub use error::Error;
pub use grid::SecureBox;
pub use moves::Move;
pub use rng::{KeystreamRng, ScrambleRng};
