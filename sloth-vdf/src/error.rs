#![forbid(unsafe_code)]

//! Common error type for the sloth crates.

use thiserror::Error;

/// Failure modes of witness generation and verification.
///
/// Every operation in this crate is a pure function of its inputs, so none of
/// these conditions are transient; retrying cannot change the outcome.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VdfError {
    /// Parameter validation failures, detected before any arithmetic begins.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Supplied commitment does not match the digest of the witness bytes.
    #[error("commitment does not match witness digest")]
    CommitmentMismatch,

    /// Backward evaluation did not land on the derived seed.
    #[error("backward evaluation did not reach the derived seed")]
    StateMismatch,

    /// Witness bytes cannot be interpreted as a field element.
    #[error("malformed witness encoding: {0}")]
    MalformedEncoding(String),

    /// Evaluation stopped by the external cancel flag at a round boundary.
    #[error("evaluation cancelled after {completed} completed rounds")]
    Cancelled { completed: u64 },

    /// Zero residue reached the square-root permutation (Jacobi symbol 0).
    #[error("degenerate field element: zero residue has no canonical square root")]
    DegenerateElement,
}

/// Convenient alias for results throughout the sloth crates.
pub type VdfResult<T> = Result<T, VdfError>;
