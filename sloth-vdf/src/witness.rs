#![forbid(unsafe_code)]

//! Witness and commitment encodings.
//!
//! The canonical witness form is the minimal big-endian byte string of the
//! final field element, and the commitment is the SHA-512 digest of exactly
//! those bytes. The lowercase hex forms are derived presentations of the same
//! values; both encodings round-trip to the identical integer.

use num_bigint::BigUint;

use crate::digest::{digest512, DIGEST_LEN};
use crate::error::{VdfError, VdfResult};

/// Serialized witness: minimal big-endian bytes of a field element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Witness(Vec<u8>);

impl Witness {
    /// Canonical serialization of a field element.
    #[must_use]
    pub fn from_element(value: &BigUint) -> Self {
        Self(value.to_bytes_be())
    }

    /// Wrap caller-supplied bytes. Validation against the field happens in
    /// [`Witness::to_element`], before any evaluation.
    #[must_use]
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Lowercase hex form of the canonical bytes.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// Parse the hex form back into witness bytes.
    pub fn from_hex(s: &str) -> VdfResult<Self> {
        let bytes = hex::decode(s)
            .map_err(|e| VdfError::MalformedEncoding(format!("invalid hex: {e}")))?;
        Ok(Self(bytes))
    }

    /// Interpret the bytes as a field element below `modulus`. Empty,
    /// zero-padded, and out-of-range encodings are rejected so that every
    /// element has exactly one accepted serialization.
    pub fn to_element(&self, modulus: &BigUint) -> VdfResult<BigUint> {
        if self.0.is_empty() {
            return Err(VdfError::MalformedEncoding("empty witness".into()));
        }
        if self.0[0] == 0 {
            return Err(VdfError::MalformedEncoding(
                "non-minimal encoding (leading zero byte)".into(),
            ));
        }
        let value = BigUint::from_bytes_be(&self.0);
        if value >= *modulus {
            return Err(VdfError::MalformedEncoding(
                "witness is not below the modulus".into(),
            ));
        }
        Ok(value)
    }

    /// Commitment to the canonical bytes.
    #[must_use]
    pub fn commitment(&self) -> Commitment {
        Commitment(digest512(&self.0))
    }
}

/// 64-byte SHA-512 commitment to a witness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Commitment([u8; DIGEST_LEN]);

impl Commitment {
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    pub fn from_bytes(bytes: &[u8]) -> VdfResult<Self> {
        let arr: [u8; DIGEST_LEN] = bytes.try_into().map_err(|_| {
            VdfError::MalformedEncoding(format!(
                "commitment must be exactly {DIGEST_LEN} bytes, got {}",
                bytes.len()
            ))
        })?;
        Ok(Self(arr))
    }

    /// 128-character lowercase hex form.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub fn from_hex(s: &str) -> VdfResult<Self> {
        let bytes = hex::decode(s)
            .map_err(|e| VdfError::MalformedEncoding(format!("invalid hex: {e}")))?;
        Self::from_bytes(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn byte_and_hex_forms_round_trip() {
        let value = BigUint::parse_bytes(b"deadbeef0badc0de", 16).unwrap();
        let w = Witness::from_element(&value);
        assert_eq!(w.to_hex(), "deadbeef0badc0de");
        assert_eq!(Witness::from_hex(&w.to_hex()).unwrap(), w);
        let modulus = BigUint::parse_bytes(b"ffffffffffffffff1", 16).unwrap();
        assert_eq!(w.to_element(&modulus).unwrap(), value);
    }

    #[test]
    fn commitment_is_sha512_of_raw_bytes() {
        let w = Witness::from_bytes(b"abc".to_vec());
        let c = w.commitment();
        assert_eq!(
            c.as_bytes(),
            &hex!(
                "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a"
                "2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
            )
        );
        assert_eq!(c.to_hex().len(), 128);
        assert_eq!(Commitment::from_hex(&c.to_hex()).unwrap(), c);
    }

    #[test]
    fn rejects_malformed_field_encodings() {
        let modulus = BigUint::from(1_000_003u32);
        let cases: [(&[u8], &str); 4] = [
            (b"", "empty"),
            (b"\x00\x01", "leading zero"),
            (b"\x0f\x42\x43", "equal to modulus"),
            (b"\xff\xff\xff\xff", "above modulus"),
        ];
        for (bytes, label) in cases {
            let w = Witness::from_bytes(bytes.to_vec());
            assert!(
                matches!(w.to_element(&modulus), Err(VdfError::MalformedEncoding(_))),
                "{label}"
            );
        }
    }

    #[test]
    fn rejects_bad_hex_and_bad_lengths() {
        assert!(Witness::from_hex("zz").is_err());
        assert!(Commitment::from_hex("abcd").is_err());
        assert!(Commitment::from_bytes(&[0u8; 63]).is_err());
        assert!(Commitment::from_bytes(&[0u8; 64]).is_ok());
    }
}
