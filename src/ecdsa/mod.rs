//! ECDSA signing and verification over a short Weierstrass curve.
//!
//! Ported from `ecc_ecdsa_sign`/`ecc_ecdsa_validate` in
//! `original_source/ecc/ecc.c`. The reference reuses a handful of
//! scratch buffers across steps (most notably aliasing `tmp3`/`u1` in
//! `ecc_ecdsa_validate` to smuggle a result between two calls); this port
//! gives every intermediate its own named binding instead, per
//! `SPEC_FULL.md`'s §4.7 open-question resolution.

use crate::curve::params::CurveParams;
use crate::field;
use crate::group::{self, Point};
use crate::primitives::bigint;
use crate::scalar;

/// Failure modes for [`sign`]. Both arise only from an unlucky choice of
/// nonce `k` — the reference's documented remedy is "try again with a
/// different `k`", which callers should do on either variant.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SignError {
    /// `k == 0`, so `k·G` and `k⁻¹` are both undefined.
    ZeroNonce,
    /// `r = (k·G)_x mod n` came out to zero.
    ZeroR,
    /// `s = k⁻¹(z + r·d) mod n` came out to zero.
    ZeroS,
}

/// A signature failed verification. Carries no detail beyond "invalid" —
/// the reference's `ecc_ecdsa_validate` returns a single `-1` for every
/// failure mode, and leaking *why* a signature is invalid invites
/// oracle attacks.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct VerifyError;

fn shift_digest(curve: &CurveParams, e: &[u32; 8]) -> [u32; 8] {
    let mut z = *e;
    for _ in 0..curve.prime_shift {
        bigint::rshift_1(&mut z);
    }
    z
}

/// True iff `1 <= x < n`.
fn in_range(x: &[u32; 8], n: &[u32; 8]) -> bool {
    !bigint::is_zero(x) && bigint::cmp(x, n) == std::cmp::Ordering::Less
}

/// Signs a digest `e` under private key `d`, using nonce `k`.
///
/// `k` must be freshly chosen per signature and must never be reused
/// across two signatures under the same key — reuse leaks `d` directly.
/// Generating `k` is this crate's caller's responsibility (see
/// `SPEC_FULL.md`'s Non-goals).
pub fn sign(curve: &CurveParams, d: &[u32; 8], e: &[u32; 8], k: &[u32; 8]) -> Result<([u32; 8], [u32; 8]), SignError> {
    if bigint::is_zero(k) {
        return Err(SignError::ZeroNonce);
    }

    let (gx, gy) = curve.g;
    let kg = scalar::mult(curve, Point::from_affine(gx, gy), k);
    let (x1, _y1) = kg.to_affine();

    let r = field::mod_o(curve, &x1);
    if bigint::is_zero(&r) {
        return Err(SignError::ZeroR);
    }

    let rd = field::mul(&r, d);
    let rd_mod_n = field::mod_o(curve, &rd);

    let z = shift_digest(curve, e);
    let (sum_low, sum_high) = bigint::add(&z, &rd_mod_n);
    let mut z_plus_rd = [0u32; 9];
    z_plus_rd[..8].copy_from_slice(&sum_low);
    z_plus_rd[8] = sum_high;
    let z_plus_rd_mod_n = field::mod_o(curve, &z_plus_rd);

    let k_inv = field::inv(k, &curve.n, &curve.n_r);
    let s_full = field::mul(&k_inv, &z_plus_rd_mod_n);
    let s = field::mod_o(curve, &s_full);
    if bigint::is_zero(&s) {
        return Err(SignError::ZeroS);
    }

    Ok((r, s))
}

/// Verifies a signature `(r, s)` over digest `e` against public point `q`.
pub fn verify(curve: &CurveParams, q: Point, e: &[u32; 8], r: &[u32; 8], s: &[u32; 8]) -> Result<(), VerifyError> {
    if !in_range(r, &curve.n) || !in_range(s, &curve.n) {
        return Err(VerifyError);
    }

    let w = field::inv(s, &curve.n, &curve.n_r);
    let z = shift_digest(curve, e);

    let u1 = field::mod_o(curve, &field::mul(&z, &w));
    let u2 = field::mod_o(curve, &field::mul(r, &w));

    let (gx, gy) = curve.g;
    let point1 = scalar::mult(curve, Point::from_affine(gx, gy), &u1);
    let point2 = scalar::mult(curve, q, &u2);
    let sum = group::add(curve, point1, point2);
    let (sx, _sy) = sum.to_affine();

    let r_check = field::mod_o(curve, &sx);
    if bigint::is_equal(&r_check, r) {
        Ok(())
    } else {
        Err(VerifyError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::params::SECP256R1;

    fn digest(byte0: u32) -> [u32; 8] {
        let mut e = [0u32; 8];
        e[0] = byte0;
        e
    }

    #[test]
    fn a_signature_verifies_under_the_matching_public_key() {
        let d = [12345, 0, 0, 0, 0, 0, 0, 0];
        let k = [987654321, 0, 0, 0, 0, 0, 0, 0];
        let e = digest(0xdead_beef);

        let q = scalar::generate_public_key(&SECP256R1, &d);
        let (r, s) = sign(&SECP256R1, &d, &e, &k).expect("nonce and key chosen to avoid degenerate cases");

        assert!(verify(&SECP256R1, q, &e, &r, &s).is_ok());
    }

    #[test]
    fn a_signature_does_not_verify_under_a_different_digest() {
        let d = [12345, 0, 0, 0, 0, 0, 0, 0];
        let k = [987654321, 0, 0, 0, 0, 0, 0, 0];
        let e = digest(0xdead_beef);
        let other_e = digest(0xfeed_face);

        let q = scalar::generate_public_key(&SECP256R1, &d);
        let (r, s) = sign(&SECP256R1, &d, &e, &k).unwrap();

        assert!(verify(&SECP256R1, q, &other_e, &r, &s).is_err());
    }

    #[test]
    fn a_zero_nonce_is_rejected_before_any_curve_math() {
        let d = [1, 0, 0, 0, 0, 0, 0, 0];
        let e = digest(1);
        let k = [0u32; 8];
        assert_eq!(sign(&SECP256R1, &d, &e, &k), Err(SignError::ZeroNonce));
    }

    #[test]
    fn verify_rejects_a_zero_s_instead_of_hanging_in_inversion() {
        let d = [12345, 0, 0, 0, 0, 0, 0, 0];
        let q = scalar::generate_public_key(&SECP256R1, &d);
        let e = digest(1);
        let r = [1, 0, 0, 0, 0, 0, 0, 0];
        let s = [0u32; 8];
        assert_eq!(verify(&SECP256R1, q, &e, &r, &s), Err(VerifyError));
    }

    #[test]
    fn verify_rejects_r_or_s_at_or_above_the_group_order() {
        let d = [12345, 0, 0, 0, 0, 0, 0, 0];
        let q = scalar::generate_public_key(&SECP256R1, &d);
        let e = digest(1);
        let one = [1, 0, 0, 0, 0, 0, 0, 0];
        assert_eq!(verify(&SECP256R1, q, &e, &SECP256R1.n, &one), Err(VerifyError));
        assert_eq!(verify(&SECP256R1, q, &e, &one, &SECP256R1.n), Err(VerifyError));
    }

    #[test]
    fn a_signature_verifies_on_wei25519_with_a_nonzero_prime_shift() {
        use crate::curve::params::WEI25519;

        let d = [54321, 0, 0, 0, 0, 0, 0, 0];
        let k = [123456789, 0, 0, 0, 0, 0, 0, 0];
        let e = digest(0xabad_1dea);

        let q = scalar::generate_public_key(&WEI25519, &d);
        let (r, s) = sign(&WEI25519, &d, &e, &k).expect("nonce and key chosen to avoid degenerate cases");

        assert!(verify(&WEI25519, q, &e, &r, &s).is_ok());
    }
}
