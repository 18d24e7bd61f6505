//! Arithmetic for the prime field GF(3).
//! Every operation reduces modulo 3 and keeps intermediate values
//! non-negative, so the results are always in {0, 1, 2}.

use crate::params::Q;
use crate::types::Trit;

/// Adds two GF(3) elements.
#[inline]
pub fn gf3_add(a: Trit, b: Trit) -> Trit {
    Trit((a.0 + b.0) % Q)
}

/// Subtracts one GF(3) element from another. The modulus is added first so
/// the intermediate value stays non-negative in `u8` arithmetic.
#[inline]
pub fn gf3_sub(a: Trit, b: Trit) -> Trit {
    Trit((Q + a.0 - b.0) % Q)
}

/// Multiplies two GF(3) elements.
#[inline]
pub fn gf3_mul(a: Trit, b: Trit) -> Trit {
    Trit((a.0 * b.0) % Q)
}

/// Additive inverse. `gf3_neg(x)` is the increment that drives a cell
/// holding `x` back to zero.
#[inline]
pub fn gf3_neg(a: Trit) -> Trit {
    Trit((Q - a.0) % Q)
}
