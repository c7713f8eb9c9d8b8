use sloth_vdf::{digest::digest512, generate, verify, VdfError, VdfParams};

/// The fixed scenario exercised across implementations: input "abc",
/// a 512-bit modulus, 100 rounds.
const ABC: VdfParams = VdfParams { bits: 512, iterations: 100 };

#[test]
fn generate_then_verify_accepts() {
    let (witness, commitment) = generate(b"abc", &ABC).unwrap();
    // The commitment is the digest of the raw witness bytes.
    assert_eq!(commitment.as_bytes(), &digest512(witness.as_bytes()));
    assert_eq!(commitment.to_hex().len(), 128);
    verify(&witness, &commitment, b"abc", &ABC).unwrap();
}

#[test]
fn generation_is_deterministic() {
    let a = generate(b"abc", &ABC).unwrap();
    let b = generate(b"abc", &ABC).unwrap();
    assert_eq!(a, b);
}

#[test]
fn wrong_iteration_depth_rejects() {
    let (witness, commitment) = generate(b"abc", &ABC).unwrap();
    for iterations in [99u64, 101] {
        let params = VdfParams { iterations, ..ABC };
        assert_eq!(
            verify(&witness, &commitment, b"abc", &params),
            Err(VdfError::StateMismatch),
            "iterations = {iterations}"
        );
    }
}

#[test]
fn witness_hex_form_round_trips_through_verification() {
    use sloth_vdf::{Commitment, Witness};

    let (witness, commitment) = generate(b"abc", &ABC).unwrap();
    let witness2 = Witness::from_hex(&witness.to_hex()).unwrap();
    let commitment2 = Commitment::from_hex(&commitment.to_hex()).unwrap();
    assert_eq!(witness, witness2);
    verify(&witness2, &commitment2, b"abc", &ABC).unwrap();
}

#[test]
fn invalid_parameters_fail_before_any_work() {
    let err = generate(b"abc", &VdfParams::new(500, 10)).unwrap_err();
    assert!(matches!(err, VdfError::InvalidParameter(_)));
    let err = generate(b"abc", &VdfParams::new(512, 0)).unwrap_err();
    assert!(matches!(err, VdfError::InvalidParameter(_)));

    let (witness, commitment) = generate(b"abc", &ABC).unwrap();
    let err = verify(&witness, &commitment, b"abc", &VdfParams::new(0, 100)).unwrap_err();
    assert!(matches!(err, VdfError::InvalidParameter(_)));
}

#[test]
fn multi_block_modulus_round_trips() {
    // Two SHA-512 blocks per integer.
    let params = VdfParams { bits: 1024, iterations: 20 };
    let (witness, commitment) = generate(b"multi-block", &params).unwrap();
    verify(&witness, &commitment, b"multi-block", &params).unwrap();
}
