#![forbid(unsafe_code)]

//! Runtime calibration helper choosing an iteration count whose forward
//! evaluation lands near a target wall-clock delay on the current hardware.
//!
//! A fixed depth gives a fixed *work* bound, not a fixed *time* bound:
//! per-round cost varies with CPU speed and modulus size. This times a short
//! forward sample over the actual field and scales to the target. The result
//! is advisory; callers should cache it and re-validate periodically.

use std::sync::atomic::AtomicBool;
use std::time::Instant;

use crate::evaluator::{Evaluator, NullProgress};
use crate::field::FieldParams;

/// Minimum / maximum delay depth the calibration will suggest.
const MIN_ITERATIONS: u64 = 100;
const MAX_ITERATIONS: u64 = 10_000_000;

/// Rounds in the timing sample; small enough to keep start-up latency
/// negligible.
const SAMPLE_ROUNDS: u64 = 128;

/// Estimate the iteration count for a `target_ms` forward evaluation over
/// `field`, clamped to `[MIN_ITERATIONS, MAX_ITERATIONS]`.
#[must_use]
pub fn calibrate_iterations(field: &FieldParams, target_ms: u64) -> u64 {
    let eval = Evaluator::new(field);
    let stop = AtomicBool::new(false);

    let start = Instant::now();
    let _ = eval.forward(&field.seed, SAMPLE_ROUNDS, &mut NullProgress, &stop);
    let elapsed = start.elapsed();

    let ns_per_round = (elapsed.as_nanos() as u64 / SAMPLE_ROUNDS).max(1);
    let target_ns = target_ms.saturating_mul(1_000_000);
    (target_ns / ns_per_round).clamp(MIN_ITERATIONS, MAX_ITERATIONS)
}
