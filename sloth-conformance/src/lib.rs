#![forbid(unsafe_code)]

//! Shared helpers for the sloth VDF conformance suite.

use num_bigint::BigUint;
use sloth_vdf::FieldParams;

/// Small prime congruent to 3 mod 4, sized so evaluator-level properties run
/// thousands of rounds per second.
pub const SMALL_PRIME: u32 = 1_000_003;

/// Hand-built field over [`SMALL_PRIME`] for evaluator-level tests; the seed
/// must be nonzero and below the modulus.
#[must_use]
pub fn small_field(seed: u32) -> FieldParams {
    debug_assert!(seed > 0 && seed < SMALL_PRIME);
    FieldParams {
        modulus: BigUint::from(SMALL_PRIME),
        seed: BigUint::from(seed),
        bits: 20,
    }
}
