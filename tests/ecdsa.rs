use ecc32::curve::params::{SECP256R1, WEI25519};
use ecc32::ecdsa::{self, SignError};
use ecc32::scalar;

fn digest(seed: u32) -> [u32; 8] {
    let mut e = [0u32; 8];
    e[0] = seed;
    e[1] = seed.wrapping_mul(0x9e37_79b9);
    e
}

#[test]
fn test_sign_then_verify_round_trips() {
    let d = [0xabcdef01, 0x12345678, 0, 0, 0, 0, 0, 0];
    let k = [0x1357_9bdf, 0x2468_ace0, 0, 0, 0, 0, 0, 1];
    let e = digest(0x1234);

    let q = scalar::generate_public_key(&SECP256R1, &d);
    let (r, s) = ecdsa::sign(&SECP256R1, &d, &e, &k).expect("chosen k and d avoid degenerate r/s");

    assert!(ecdsa::verify(&SECP256R1, q, &e, &r, &s).is_ok());
}

#[test]
fn test_verify_rejects_a_signature_from_a_different_key() {
    let d = [111, 0, 0, 0, 0, 0, 0, 0];
    let other_d = [222, 0, 0, 0, 0, 0, 0, 0];
    let k = [999, 0, 0, 0, 0, 0, 0, 1];
    let e = digest(0xbeef);

    let other_q = scalar::generate_public_key(&SECP256R1, &other_d);
    let (r, s) = ecdsa::sign(&SECP256R1, &d, &e, &k).unwrap();

    assert!(ecdsa::verify(&SECP256R1, other_q, &e, &r, &s).is_err());
}

#[test]
fn test_sign_rejects_a_zero_nonce() {
    let d = [1, 0, 0, 0, 0, 0, 0, 0];
    let e = digest(1);
    let k = [0u32; 8];
    assert_eq!(ecdsa::sign(&SECP256R1, &d, &e, &k), Err(SignError::ZeroNonce));
}

#[test]
fn test_sign_then_verify_round_trips_on_wei25519_with_a_nonzero_prime_shift() {
    let d = [0x4242_4242, 0x1357_9bdf, 0, 0, 0, 0, 0, 0];
    let k = [0x1111_1111, 0x2222_2222, 0, 0, 0, 0, 0, 0];
    let e = digest(0x9999);

    let q = scalar::generate_public_key(&WEI25519, &d);
    let (r, s) = ecdsa::sign(&WEI25519, &d, &e, &k).expect("chosen k and d avoid degenerate r/s");

    assert!(ecdsa::verify(&WEI25519, q, &e, &r, &s).is_ok());
}
