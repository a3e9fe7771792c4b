use ecc32::curve::params::{SECP256R1, WEI25519};
use ecc32::field;

#[test]
fn test_inverse_round_trips_for_every_curve_prime() {
    for curve in [&SECP256R1, &WEI25519] {
        let x = [123456789u32, 0, 0, 0, 0, 0, 0, 0];
        let inverse = field::inv(&x, &curve.p, &curve.p_r);
        let product = field::mul(&x, &inverse);
        let reduced = field::mod_p(curve, &product);
        assert_eq!(reduced, [1, 0, 0, 0, 0, 0, 0, 0]);
    }
}

#[test]
fn test_mod_o_is_idempotent() {
    let small = [5u32, 0, 0, 0, 0, 0, 0, 0];
    let reduced = field::mod_o(&SECP256R1, &small);
    let reduced_again = field::mod_o(&SECP256R1, &reduced);
    assert_eq!(reduced, reduced_again);
}

#[test]
fn test_sub_then_add_is_the_identity() {
    let x = SECP256R1.g.0;
    let y = SECP256R1.g.1;
    let diff = field::sub(&x, &y, &SECP256R1.p);
    let back = field::add(&diff, &y, &SECP256R1.p_r);
    assert_eq!(back, x);
}
