#![forbid(unsafe_code)]

//! Deterministic derivation of the prime field and seed element from an
//! arbitrary input string.
//!
//! The modulus is assembled from SHA-512 blocks over domain-separated copies
//! of the input (`input || "prime" || block-index`), forced to the exact bit
//! length, then advanced to the nearest prime congruent to 3 mod 4. The same
//! block construction with the `"seed"` tag, reduced modulo the final prime,
//! yields the starting element. Both values are exactly reproducible from
//! `(input, bits)`, which is what lets a verifier rebuild the field without
//! trusting the prover.

use num_bigint::BigUint;

use crate::digest::digest512;
use crate::error::{VdfError, VdfResult};
use crate::params::MAX_BITS;
use crate::prime::next_prime;

/// A derived prime field: modulus `p = 3 (mod 4)` of exactly `bits` bits and
/// a seed element in `[0, p)`. Immutable once derived; one generate/verify
/// call owns exactly one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldParams {
    pub modulus: BigUint,
    pub seed: BigUint,
    pub bits: u32,
}

impl FieldParams {
    /// Derive `(p, seed)` for `input`. `bits` must be a positive multiple of
    /// 512 no larger than [`MAX_BITS`].
    pub fn derive(input: &[u8], bits: u32) -> VdfResult<Self> {
        if bits == 0 || bits % 512 != 0 || bits > MAX_BITS {
            return Err(VdfError::InvalidParameter(format!(
                "bits must be a positive multiple of 512 up to {MAX_BITS}, got {bits}"
            )));
        }

        let mut modulus = block_digest_int(input, b"prime", bits);
        // Exact bit length: force the top bit before searching.
        modulus.set_bit(u64::from(bits - 1), true);
        // Joint search: primality and the mod-4 congruence must hold for the
        // same candidate.
        loop {
            modulus = next_prime(&modulus);
            if (&modulus % 4u32) == BigUint::from(3u32) {
                break;
            }
        }

        let seed = block_digest_int(input, b"seed", bits) % &modulus;
        Ok(Self { modulus, seed, bits })
    }
}

/// Concatenate `bits/512` domain-separated SHA-512 digests and read the
/// result as a big-endian integer.
fn block_digest_int(input: &[u8], tag: &[u8], bits: u32) -> BigUint {
    let nbr_blocks = bits / 512;
    let mut bytes = Vec::with_capacity(bits as usize / 8);
    let mut msg = Vec::with_capacity(input.len() + tag.len() + 1);
    for i in 0..nbr_blocks {
        msg.clear();
        msg.extend_from_slice(input);
        msg.extend_from_slice(tag);
        msg.push(b'0' + i as u8);
        bytes.extend_from_slice(&digest512(&msg));
    }
    BigUint::from_bytes_be(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prime::is_probable_prime;

    #[test]
    fn derivation_is_deterministic() {
        let a = FieldParams::derive(b"abc", 512).unwrap();
        let b = FieldParams::derive(b"abc", 512).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn derives_known_field() {
        let field = FieldParams::derive(b"abc", 512).unwrap();
        assert_eq!(
            field.modulus.to_str_radix(16),
            "cdf4594ae739fdff1422cdc857d7c26a8d4899a21b51a942f0642c41238285f7\
             41960cb43d0f94425d6fca67a7dd92f87172c52450a73c80db625c5942edeba3"
        );
        assert_eq!(
            field.seed.to_str_radix(16),
            "2e972209d4703e8bc8a871c11c08354192dbc50b94c4ca63ba119476872c254f\
             016320febc4c08269b2f17cce17b262e5f33b2657fcc2380e16876f9f8856007"
        );
    }

    #[test]
    fn modulus_shape_holds() {
        let field = FieldParams::derive(b"shape check", 512).unwrap();
        assert_eq!(field.modulus.bits(), 512);
        assert_eq!(&field.modulus % 4u32, BigUint::from(3u32));
        assert!(is_probable_prime(&field.modulus));
        assert!(field.seed < field.modulus);
    }

    #[test]
    fn distinct_inputs_give_distinct_fields() {
        let a = FieldParams::derive(b"input one", 512).unwrap();
        let b = FieldParams::derive(b"input two", 512).unwrap();
        assert_ne!(a.modulus, b.modulus);
        assert_ne!(a.seed, b.seed);
    }

    #[test]
    fn rejects_bad_bit_lengths() {
        for bits in [0u32, 100, 513, MAX_BITS + 512] {
            assert!(FieldParams::derive(b"x", bits).is_err(), "bits = {bits}");
        }
    }
}
