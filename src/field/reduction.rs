//! The two fast-reduction strategies: NIST P-256's partial reduction and
//! generic Barrett reduction.
//!
//! Both are ported limb-for-limb from `original_source/ecc/ecc.c`
//! (`fieldModP256` and `fieldModX` respectively). Barrett reduction needs
//! scratch arithmetic at widths this crate otherwise never uses (9 and 18
//! words), so this module carries its own small width-polymorphic
//! add/sub/mul/shift helpers rather than widening [`crate::primitives::bigint`]'s
//! fixed 8-word API for a single internal use.

use std::cmp::Ordering;

use crate::curve::params::CurveParams;
use crate::primitives::bigint;

use super::{add as field_add8, sub as field_sub8};

/// NIST P-256's partial-reduction identities.
///
/// Computes `T + 2·S1 + 2·S2 + S3 + S4 − D1 − D2 − D3 − D4` where each
/// term is an 8-word slice/permutation of the 16-word product `b`, as
/// specified by the NIST P-256 reduction algorithm (FIPS 186-4 D.2.3) and
/// reproduced index-for-index from `fieldModP256`.
pub fn p256_fast(curve: &CurveParams, b: &[u32; 16]) -> [u32; 8] {
    let t: [u32; 8] = b[0..8].try_into().unwrap();

    let s1 = [0, 0, 0, b[11], b[12], b[13], b[14], b[15]];
    let s2 = [0, 0, 0, b[12], b[13], b[14], b[15], 0];
    let s3 = [b[8], b[9], b[10], 0, 0, 0, b[14], b[15]];
    let s4 = [b[9], b[10], b[11], b[13], b[14], b[15], b[13], b[8]];

    let d1 = [b[11], b[12], b[13], 0, 0, 0, b[8], b[10]];
    let d2 = [b[12], b[13], b[14], b[15], 0, 0, b[9], b[11]];
    let d3 = [b[13], b[14], b[15], b[8], b[9], b[10], 0, b[12]];
    let d4 = [b[14], b[15], 0, b[9], b[10], b[11], 0, b[13]];

    let mut a = field_add8(&t, &s1, &curve.p_r);
    a = field_add8(&a, &s1, &curve.p_r);
    a = field_add8(&a, &s2, &curve.p_r);
    a = field_add8(&a, &s2, &curve.p_r);
    a = field_add8(&a, &s3, &curve.p_r);
    a = field_add8(&a, &s4, &curve.p_r);
    a = field_sub8(&a, &d1, &curve.p);
    a = field_sub8(&a, &d2, &curve.p);
    a = field_sub8(&a, &d3, &curve.p);
    a = field_sub8(&a, &d4, &curve.p);

    if bigint::cmp(&a, &curve.p) != Ordering::Less {
        a = field_sub8(&a, &curve.p, &curve.p);
    }
    a
}

/// Generic Barrett reduction (Handbook of Applied Cryptography, 14.42).
///
/// `x` may be 8, 9, or 16 words wide — the three widths ECDSA's
/// `field::mod_o` reduces at. `modulus`/`mu` are the target's `n` (or `p`
/// for the Barrett-strategy curves) and its precomputed `⌊2^{64k}/m⌋`.
pub fn barrett(x: &[u32], modulus: &[u32; 8], mu: &[u32; 9], k: u32, result_len: usize) -> [u32; 8] {
    let k = k as usize;

    if x.len() == 8 && bigint::cmp(x, modulus) != Ordering::Greater {
        return x.try_into().unwrap();
    }
    if x.len() == 16 && bigint::is_zero(&x[8..16]) && bigint::cmp(&x[0..8], modulus) != Ordering::Greater
    {
        return x[0..8].try_into().unwrap();
    }

    let q1 = shr_words(x, k - 1, k + 1); // floor(x / b^(k-1)), width k+1
    let q2 = mul_words(mu, &q1); // mu * q1, width (k+1)*2
    let q3 = shr_words(&q2, k + 1, k); // floor(q2 / b^(k+1)), width k

    let r1 = first_n(x, result_len);
    let r2_full = mul_words(&q3, modulus); // width 2k
    let r2 = first_n(&r2_full, result_len);

    // Wrapping (not checked) subtraction at width `result_len` is exactly
    // the reference's discarded-borrow `sub(A, q2_tmp, result, ...)`: the
    // wraparound implicitly performs "+ b^result_len" on underflow, which
    // is what the reference's commented-out correction branch would have
    // done explicitly.
    let mut result = sub_words(&r1, &r2);
    let modulus_padded = pad_to(modulus, result_len);

    let mut corrections = 0;
    while bigint::cmp(&result, &modulus_padded) != Ordering::Less {
        result = sub_words(&result, &modulus_padded);
        corrections += 1;
        debug_assert!(
            corrections <= 4,
            "Barrett reduction needed more correction subtractions than the HAC bound predicts"
        );
    }

    first_n(&result, 8).try_into().unwrap()
}

fn first_n(x: &[u32], n: usize) -> Vec<u32> {
    let mut out = vec![0u32; n];
    let take = x.len().min(n);
    out[..take].copy_from_slice(&x[..take]);
    out
}

fn pad_to(x: &[u32], n: usize) -> Vec<u32> {
    first_n(x, n)
}

fn shr_words(input: &[u32], shift_limbs: usize, out_len: usize) -> Vec<u32> {
    let mut out = vec![0u32; out_len];
    for (i, o) in out.iter_mut().enumerate() {
        let src = i + shift_limbs;
        if src < input.len() {
            *o = input[src];
        }
    }
    out
}

fn sub_words(x: &[u32], y: &[u32]) -> Vec<u32> {
    debug_assert_eq!(x.len(), y.len());
    let mut out = vec![0u32; x.len()];
    let mut borrow: i64 = 0;
    for i in 0..x.len() {
        let diff = x[i] as i64 - y[i] as i64 - borrow;
        if diff < 0 {
            out[i] = (diff + (1i64 << 32)) as u32;
            borrow = 1;
        } else {
            out[i] = diff as u32;
            borrow = 0;
        }
    }
    out
}

fn mul_words(x: &[u32], y: &[u32]) -> Vec<u32> {
    let mut acc = vec![0u64; x.len() + y.len()];
    for (i, &xi) in x.iter().enumerate() {
        let mut carry: u64 = 0;
        for (j, &yj) in y.iter().enumerate() {
            let idx = i + j;
            let product = xi as u64 * yj as u64 + acc[idx] + carry;
            acc[idx] = product & 0xFFFF_FFFF;
            carry = product >> 32;
        }
        acc[i + y.len()] += carry;
    }
    acc.iter().map(|&limb| limb as u32).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::params::{SECP256R1, WEI25519};

    #[test]
    fn p256_fast_reduces_a_known_square_below_p() {
        let x = SECP256R1.g.0;
        let product = bigint::mul(&x, &x);
        let reduced = p256_fast(&SECP256R1, &product);
        assert_eq!(bigint::cmp(&reduced, &SECP256R1.p), Ordering::Less);
    }

    #[test]
    fn barrett_reduces_a_known_square_below_p_for_wei25519() {
        let x = WEI25519.g.0;
        let product = bigint::mul(&x, &x);
        let reduced = barrett(&product, &WEI25519.p, &WEI25519.mu_p, WEI25519.k, 8);
        assert_eq!(bigint::cmp(&reduced, &WEI25519.p), Ordering::Less);
    }

    #[test]
    fn barrett_short_circuits_values_already_below_the_modulus() {
        let small = [5, 0, 0, 0, 0, 0, 0, 0];
        let reduced = barrett(&small, &SECP256R1.n, &SECP256R1.mu_n, SECP256R1.k, 8);
        assert_eq!(reduced, small);
    }

    #[test]
    fn barrett_matches_p256_fast_on_the_same_product() {
        let x = SECP256R1.g.0;
        let product = bigint::mul(&x, &x);
        let via_p256 = p256_fast(&SECP256R1, &product);
        let via_barrett = barrett(&product, &SECP256R1.p, &SECP256R1.mu_p, SECP256R1.k, 8);
        assert_eq!(via_p256, via_barrett);
    }
}
