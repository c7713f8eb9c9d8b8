#![forbid(unsafe_code)]

//! Sloth verifiable delay function.
//!
//! Implements the sloth construction from Lenstra & Wesolowski, "A random
//! zoo: sloth, unicorn, and trx" (2015). An arbitrary input string
//! deterministically fixes a prime field `p = 3 (mod 4)` of a configured bit
//! length together with a seed element; the prover then chains `iterations`
//! inherently sequential rounds, each an XOR bit mix followed by a canonical
//! modular square root, and commits to the final element (the witness) with
//! SHA-512. Each forward round costs a full modular exponentiation while its
//! inverse costs a single squaring, so verification runs on the order of
//! `log p` times faster than generation, with no trusted setup and no
//! structured modulus.
//!
//! ```no_run
//! use sloth_vdf::{generate, verify, VdfParams};
//!
//! let params = VdfParams::new(512, 1_000);
//! let (witness, commitment) = generate(b"block 42", &params)?;
//! verify(&witness, &commitment, b"block 42", &params)?;
//! # Ok::<(), sloth_vdf::VdfError>(())
//! ```

pub mod calibrate;
pub mod digest;
pub mod error;
pub mod evaluator;
pub mod field;
pub mod params;
pub mod permutation;
pub mod prime;
pub mod witness;

pub use calibrate::calibrate_iterations;
pub use error::{VdfError, VdfResult};
pub use evaluator::{Evaluator, FnProgress, NullProgress, ProgressSink};
pub use field::FieldParams;
pub use params::VdfParams;
pub use witness::{Commitment, Witness};

use std::sync::atomic::AtomicBool;

use tracing::debug;

/// Produce the witness and its commitment for `input` under `params`.
///
/// Fails only on invalid parameters; generation has no notion of rejection.
pub fn generate(input: &[u8], params: &VdfParams) -> VdfResult<(Witness, Commitment)> {
    generate_with(input, params, &mut NullProgress, &AtomicBool::new(false))
}

/// [`generate`] with an explicit progress sink and cancel flag.
pub fn generate_with(
    input: &[u8],
    params: &VdfParams,
    sink: &mut dyn ProgressSink,
    stop: &AtomicBool,
) -> VdfResult<(Witness, Commitment)> {
    params.validate()?;
    let field = FieldParams::derive(input, params.bits)?;
    debug!(
        bits = params.bits,
        iterations = params.iterations,
        "field derived, evaluating forward"
    );
    let eval = Evaluator::new(&field);
    let element = eval.forward(&field.seed, params.iterations, sink, stop)?;
    let witness = Witness::from_element(&element);
    let commitment = witness.commitment();
    debug!(witness_len = witness.as_bytes().len(), "witness generated");
    Ok((witness, commitment))
}

/// Check `witness` and `commitment` against `input` under `params`.
///
/// The commitment digest is recomputed first; on mismatch the field is never
/// derived. Acceptance requires the backward evaluation to land exactly on
/// the derived seed.
pub fn verify(
    witness: &Witness,
    commitment: &Commitment,
    input: &[u8],
    params: &VdfParams,
) -> VdfResult<()> {
    verify_with(
        witness,
        commitment,
        input,
        params,
        &mut NullProgress,
        &AtomicBool::new(false),
    )
}

/// [`verify`] with an explicit progress sink and cancel flag.
pub fn verify_with(
    witness: &Witness,
    commitment: &Commitment,
    input: &[u8],
    params: &VdfParams,
    sink: &mut dyn ProgressSink,
    stop: &AtomicBool,
) -> VdfResult<()> {
    params.validate()?;
    if witness.commitment() != *commitment {
        return Err(VdfError::CommitmentMismatch);
    }
    let field = FieldParams::derive(input, params.bits)?;
    let element = witness.to_element(&field.modulus)?;
    let eval = Evaluator::new(&field);
    let result = eval.backward(&element, params.iterations, sink, stop)?;
    if result == field.seed {
        debug!("witness verified");
        Ok(())
    } else {
        Err(VdfError::StateMismatch)
    }
}
