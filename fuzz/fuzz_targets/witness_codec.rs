#![no_main]
use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;
use sloth_vdf::Witness;

fuzz_target!(|data: &[u8]| {
    // Byte and hex forms must round-trip bit-for-bit.
    let witness = Witness::from_bytes(data.to_vec());
    let hex_form = witness.to_hex();
    let back = Witness::from_hex(&hex_form).expect("hex round-trip");
    assert_eq!(witness, back);

    // Decoding either rejects or yields an element whose canonical
    // serialization is exactly the input.
    let modulus = BigUint::from(1_000_003u32);
    if let Ok(element) = witness.to_element(&modulus) {
        assert!(element < modulus);
        assert_eq!(Witness::from_element(&element).as_bytes(), witness.as_bytes());
    }
});
