#![forbid(unsafe_code)]

//! SHA-512 digest helper shared by field derivation and the commitment.
//!
//! The hash backend is stateless; every call constructs a fresh one-shot
//! hasher, so no process-wide initialization or mutable handle exists.

use sha2::{Digest, Sha512};

/// Digest output size in bytes.
pub const DIGEST_LEN: usize = 64;

/// One-shot SHA-512 over `data`.
#[must_use]
pub fn digest512(data: &[u8]) -> [u8; DIGEST_LEN] {
    let mut out = [0u8; DIGEST_LEN];
    out.copy_from_slice(&Sha512::digest(data));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn matches_known_vector() {
        // NIST test vector for SHA-512("abc").
        assert_eq!(
            digest512(b"abc"),
            hex!(
                "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a"
                "2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
            )
        );
    }

    #[test]
    fn distinct_inputs_distinct_digests() {
        assert_ne!(digest512(b""), digest512(b"\0"));
    }
}
