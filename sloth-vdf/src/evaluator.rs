#![forbid(unsafe_code)]

//! Strictly sequential evaluation of the permutation chain.
//!
//! Round `i+1` starts only after round `i`'s full state is materialized; the
//! chain itself is the delay, so rounds must never be skipped, reordered, or
//! computed speculatively. The loop owns no shared state, reports progress
//! through an injected sink, and honors a cancel flag at round boundaries
//! only; a round is an atomic unit of work and no partial round is ever
//! exposed.

use std::sync::atomic::{AtomicBool, Ordering};

use num_bigint::BigUint;
use num_traits::One;

use crate::error::{VdfError, VdfResult};
use crate::field::FieldParams;
use crate::permutation::{invert_sqrt, sqrt_permutation, xor_mod};

/// Observer for elapsed rounds. Each call carries the number of rounds
/// completed since the previous call; the deltas over one full run always sum
/// to the iteration count exactly. Calls are advisory, must be cheap, and
/// must not block.
pub trait ProgressSink {
    fn report(&mut self, completed: u64);
}

/// Discarding sink wired into the plain `generate`/`verify` entry points.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullProgress;

impl ProgressSink for NullProgress {
    fn report(&mut self, _completed: u64) {}
}

/// Adapter turning any `FnMut(u64)` into a [`ProgressSink`].
pub struct FnProgress<F: FnMut(u64)>(pub F);

impl<F: FnMut(u64)> ProgressSink for FnProgress<F> {
    fn report(&mut self, completed: u64) {
        (self.0)(completed);
    }
}

/// Report roughly 200 times per run; every 10 rounds for short runs.
fn progress_step(iterations: u64) -> u64 {
    if iterations <= 200 {
        10
    } else {
        iterations.div_ceil(200)
    }
}

/// Drives the permutation engine over a derived field.
///
/// The bit-flip mask and the square-root exponent are computed once from the
/// modulus and never change for the lifetime of the evaluator.
#[derive(Debug, Clone)]
pub struct Evaluator {
    modulus: BigUint,
    /// `2^(bitlen(p)/2) - 1`: flips the low half of the state bits.
    ones: BigUint,
    /// `(p+1)/4`: square-root exponent, valid because `p = 3 (mod 4)`.
    e: BigUint,
}

impl Evaluator {
    #[must_use]
    pub fn new(field: &FieldParams) -> Self {
        let modulus = field.modulus.clone();
        let ones = (BigUint::one() << (modulus.bits() >> 1)) - 1u32;
        let e = (&modulus + 1u32) >> 2;
        Self { modulus, ones, e }
    }

    /// Run the slow direction for `iterations` rounds from `seed`, returning
    /// the witness element.
    pub fn forward(
        &self,
        seed: &BigUint,
        iterations: u64,
        sink: &mut dyn ProgressSink,
        stop: &AtomicBool,
    ) -> VdfResult<BigUint> {
        let step = progress_step(iterations);
        let mut reported = 0u64;
        let mut a = seed.clone();
        for i in 1..=iterations {
            if stop.load(Ordering::Relaxed) {
                return Err(VdfError::Cancelled { completed: i - 1 });
            }
            a = xor_mod(&a, &self.ones, &self.modulus);
            a = sqrt_permutation(&a, &self.modulus, &self.e)?;
            if i % step == 0 {
                sink.report(i - reported);
                reported = i;
            }
        }
        if reported != iterations {
            sink.report(iterations - reported);
        }
        Ok(a)
    }

    /// Run the fast direction for `iterations` rounds from a witness element.
    /// The two sub-steps and their order are exactly reversed relative to
    /// [`Evaluator::forward`].
    pub fn backward(
        &self,
        witness: &BigUint,
        iterations: u64,
        sink: &mut dyn ProgressSink,
        stop: &AtomicBool,
    ) -> VdfResult<BigUint> {
        let step = progress_step(iterations);
        let mut reported = 0u64;
        let mut a = witness.clone();
        for i in 1..=iterations {
            if stop.load(Ordering::Relaxed) {
                return Err(VdfError::Cancelled { completed: i - 1 });
            }
            a = invert_sqrt(&a, &self.modulus);
            a = xor_mod(&a, &self.ones, &self.modulus);
            if i % step == 0 {
                sink.report(i - reported);
                reported = i;
            }
        }
        if reported != iterations {
            sink.report(iterations - reported);
        }
        Ok(a)
    }
}
