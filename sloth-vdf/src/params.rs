#![forbid(unsafe_code)]

//! Evaluation parameters and their validation.

use serde::{Deserialize, Serialize};

use crate::error::{VdfError, VdfResult};

/// Hard upper bound on the modulus size: 64 SHA-512 blocks.
pub const MAX_BITS: u32 = 32_768;

/// Parameters fixing the cost shape of one evaluation: `bits` sets the
/// per-round work (modulus size), `iterations` sets the delay depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VdfParams {
    /// Modulus bit length; must be a positive multiple of 512.
    pub bits: u32,
    /// Number of sequential permutation rounds; must be at least 1.
    pub iterations: u64,
}

impl Default for VdfParams {
    fn default() -> Self {
        Self { bits: 2048, iterations: 50_000 }
    }
}

impl VdfParams {
    #[must_use]
    pub fn new(bits: u32, iterations: u64) -> Self {
        Self { bits, iterations }
    }

    /// Check both parameters. Called by every entry point before any
    /// arithmetic; a violation is fatal to the call with no partial result.
    pub fn validate(&self) -> VdfResult<()> {
        if self.bits == 0 || self.bits % 512 != 0 {
            return Err(VdfError::InvalidParameter(format!(
                "bits must be a positive multiple of 512, got {}",
                self.bits
            )));
        }
        if self.bits > MAX_BITS {
            return Err(VdfError::InvalidParameter(format!(
                "bits must not exceed {MAX_BITS}, got {}",
                self.bits
            )));
        }
        if self.iterations == 0 {
            return Err(VdfError::InvalidParameter(
                "iterations must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params_are_valid() {
        assert!(VdfParams::default().validate().is_ok());
    }

    #[test]
    fn rejects_bad_bits() {
        for bits in [0u32, 100, 511, 513, 1000, MAX_BITS + 512] {
            let err = VdfParams::new(bits, 1).validate().unwrap_err();
            assert!(matches!(err, VdfError::InvalidParameter(_)), "bits = {bits}");
        }
    }

    #[test]
    fn rejects_zero_iterations() {
        let err = VdfParams::new(512, 0).validate().unwrap_err();
        assert!(matches!(err, VdfError::InvalidParameter(_)));
    }

    #[test]
    fn accepts_all_block_multiples() {
        for bits in [512u32, 1024, 2048, 4096, MAX_BITS] {
            assert!(VdfParams::new(bits, 1).validate().is_ok(), "bits = {bits}");
        }
    }
}
