//! Modular arithmetic over a runtime-selected 256-bit modulus.
//!
//! Every function here takes the modulus (and, where needed, its
//! "add-back" reducer `2^256 − m`) as an explicit parameter rather than
//! reading it from ambient curve state — callers pass `curve.p`/`curve.p_r`
//! for field-element arithmetic or `curve.n`/`curve.n_r` for ECDSA's
//! scalar-field arithmetic, exactly as `original_source/ecc/ecc.c`'s
//! `fieldAdd`/`fieldSub`/`fieldInv` do with their `reducer`/`modulus`
//! arguments.

pub mod reduction;

use crate::curve::params::CurveParams;
use crate::primitives::bigint;

/// `x + y` in `[0, m)`, given `reducer = 2^256 − m`.
///
/// If the 256-bit addition overflowed, the escaped carry is folded back
/// in by adding `reducer` — this is exact because `x + y < 2m < 2^257`,
/// so at most one fold-back is ever needed.
pub fn add(x: &[u32; 8], y: &[u32; 8], reducer: &[u32; 8]) -> [u32; 8] {
    let (sum, carry) = bigint::add(x, y);
    if carry != 0 {
        bigint::add(&sum, reducer).0
    } else {
        sum
    }
}

/// `x − y` in `[0, m)`.
///
/// If the subtraction borrowed, the wrapped difference is corrected by
/// adding `m` back in.
pub fn sub(x: &[u32; 8], y: &[u32; 8], m: &[u32; 8]) -> [u32; 8] {
    let (diff, borrow) = bigint::sub(x, y);
    if borrow != 0 {
        bigint::add(&diff, m).0
    } else {
        diff
    }
}

/// Full 256×256 → 512-bit multiply; the caller reduces the result
/// afterward with [`mod_p`] or [`mod_o`].
pub fn mul(x: &[u32; 8], y: &[u32; 8]) -> [u32; 16] {
    bigint::mul(x, y)
}

/// Reduces a 512-bit product modulo the curve's prime `p`, dispatching to
/// whichever [`crate::curve::ReduceStrategy`] the curve specifies.
pub fn mod_p(curve: &CurveParams, product: &[u32; 16]) -> [u32; 8] {
    use crate::curve::ReduceStrategy;

    match curve.reduce {
        ReduceStrategy::P256Fast => reduction::p256_fast(curve, product),
        ReduceStrategy::BarrettGeneric => {
            reduction::barrett(product, &curve.p, &curve.mu_p, curve.k, 8)
        }
    }
}

/// Reduces `x` (8, 9, or 16 words wide) modulo the curve's group order
/// `n` via Barrett reduction. ECDSA calls this at all three widths: the
/// extended `x`-coordinate of `k·G` (9 words, with the top word forced to
/// zero), the 16-word product `r·d`, and the 16-word product that drives
/// `s`.
pub fn mod_o(curve: &CurveParams, x: &[u32]) -> [u32; 8] {
    reduction::barrett(x, &curve.n, &curve.mu_n, curve.k, 9)
}

/// `(x + m)/2`, used internally by [`inv`].
///
/// If `x + m` overflows 256 bits, the escaped bit is OR-ed back into the
/// top bit after the shift (it would otherwise be lost, since the shift
/// only sees the truncated 256-bit sum), and the result is folded once
/// against `reducer` if it still exceeds `m` — ported from
/// `fieldAddAndDivide` in `original_source/ecc/ecc.c`.
pub fn add_and_halve(x: &[u32; 8], m: &[u32; 8], reducer: &[u32; 8]) -> [u32; 8] {
    let (mut sum, carry) = bigint::add(x, m);
    bigint::rshift_1(&mut sum);
    if carry != 0 {
        sum[7] |= 0x8000_0000;
        if bigint::cmp(&sum, m) == std::cmp::Ordering::Greater {
            sum = bigint::add(&sum, reducer).0;
        }
    }
    sum
}

/// Modular inverse of `x` modulo `m`, via the binary extended Euclidean
/// algorithm.
///
/// Undefined for `x == 0`; callers must not invert zero. In this crate,
/// [`crate::ecdsa::sign`] checks `k == 0` and [`crate::ecdsa::verify`]
/// range-checks `s` against `[1, n-1]` before ever reaching an inversion.
pub fn inv(x: &[u32; 8], m: &[u32; 8], reducer: &[u32; 8]) -> [u32; 8] {
    let mut u = *x;
    let mut v = *m;
    let mut x1 = [1, 0, 0, 0, 0, 0, 0, 0];
    let mut x2 = [0u32; 8];

    while !bigint::is_one(&u) && !bigint::is_one(&v) {
        while u[0] & 1 == 0 {
            bigint::rshift_1(&mut u);
            if x1[0] & 1 == 0 {
                bigint::rshift_1(&mut x1);
            } else {
                x1 = add_and_halve(&x1, m, reducer);
            }
        }
        while v[0] & 1 == 0 {
            bigint::rshift_1(&mut v);
            if x2[0] & 1 == 0 {
                bigint::rshift_1(&mut x2);
            } else {
                x2 = add_and_halve(&x2, m, reducer);
            }
        }

        if bigint::cmp(&u, &v) != std::cmp::Ordering::Less {
            u = bigint::sub(&u, &v).0;
            x1 = sub(&x1, &x2, m);
        } else {
            v = bigint::sub(&v, &u).0;
            x2 = sub(&x2, &x1, m);
        }
    }

    if bigint::is_one(&u) { x1 } else { x2 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::params::SECP256R1;

    const ONE: [u32; 8] = [1, 0, 0, 0, 0, 0, 0, 0];

    #[test]
    fn add_and_sub_stay_in_range_at_the_modulus_boundary() {
        let p = SECP256R1.p;
        let p_minus_one = sub(&p, &ONE, &p);
        let sum = add(&p_minus_one, &ONE, &SECP256R1.p_r);
        assert_eq!(sum, [0u32; 8]);

        let back = sub(&sum, &ONE, &p);
        assert_eq!(back, p_minus_one);
    }

    #[test]
    fn inv_of_two_round_trips_on_p256_prime() {
        let two = [2, 0, 0, 0, 0, 0, 0, 0];
        let inverse = inv(&two, &SECP256R1.p, &SECP256R1.p_r);
        let product = mul(&two, &inverse);
        let reduced = mod_p(&SECP256R1, &product);
        assert_eq!(reduced, ONE);
    }

    #[test]
    fn inv_of_one_is_one() {
        let inverse = inv(&ONE, &SECP256R1.p, &SECP256R1.p_r);
        assert_eq!(inverse, ONE);
    }
}
