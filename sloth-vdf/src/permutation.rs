#![forbid(unsafe_code)]

//! The per-round state transition and its algebraic inverse.
//!
//! One forward round XORs the low half of the state bits (`xor_mod`) and then
//! maps the result through a canonical modular square root
//! (`sqrt_permutation`). Because the modulus satisfies `p = 3 (mod 4)` the
//! root is a single exponentiation by `e = (p+1)/4`, and the Jacobi-symbol
//! branch plus the parity rule select exactly one of the two candidate roots,
//! making the map a well-defined function. Undoing one step costs a single
//! squaring (`invert_sqrt`), which is the verification-side shortcut. The XOR
//! mix breaks the structural fixed points of pure square-root iteration.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::error::{VdfError, VdfResult};

/// Jacobi symbol `(a/n)` for odd `n`, via the standard binary algorithm.
fn jacobi(a: &BigUint, n: &BigUint) -> i32 {
    debug_assert!(n.is_odd());
    let three = BigUint::from(3u32);
    let five = BigUint::from(5u32);

    let mut a = a % n;
    let mut n = n.clone();
    let mut sign = 1i32;
    while !a.is_zero() {
        while a.is_even() {
            a >>= 1;
            let r = &n % 8u32;
            if r == three || r == five {
                sign = -sign;
            }
        }
        std::mem::swap(&mut a, &mut n);
        if (&a % 4u32) == three && (&n % 4u32) == three {
            sign = -sign;
        }
        a %= &n;
    }
    if n.is_one() {
        sign
    } else {
        0
    }
}

/// Canonical square-root permutation: the slow direction of one round.
///
/// Quadratic residues map to their even root, non-residues to the odd root of
/// their negation. A zero residue has no Jacobi branch and is rejected as
/// [`VdfError::DegenerateElement`]; the evaluator never produces one because
/// `xor_mod` precedes every call and keeps the state in `[1, p)`.
pub fn sqrt_permutation(input: &BigUint, p: &BigUint, e: &BigUint) -> VdfResult<BigUint> {
    match jacobi(input, p) {
        1 => {
            let t = input.modpow(e, p);
            Ok(if t.is_even() { t } else { p - t })
        }
        -1 => {
            let t = (p - input).modpow(e, p);
            Ok(if t.is_odd() { t } else { p - t })
        }
        _ => Err(VdfError::DegenerateElement),
    }
}

/// Inverse of [`sqrt_permutation`]: one modular squaring, negated for odd
/// inputs.
#[must_use]
pub fn invert_sqrt(input: &BigUint, p: &BigUint) -> BigUint {
    let sq = (input * input) % p;
    if input.is_even() {
        sq
    } else {
        p - sq
    }
}

/// XOR `input` with `flip` at least once, re-applying while the result is
/// zero or not below `modulus`. The mask covers only the low half of the
/// modulus bit length, so at most two applications ever occur; the result is
/// always in `[1, modulus)`. `input` itself must already be below `modulus`.
#[must_use]
pub fn xor_mod(input: &BigUint, flip: &BigUint, modulus: &BigUint) -> BigUint {
    debug_assert!(input < modulus);
    let mut r = input ^ flip;
    while r >= *modulus || r.is_zero() {
        r = &r ^ flip;
    }
    r
}
