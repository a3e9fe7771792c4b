//! Birational maps between the twisted Edwards, short Weierstrass, and
//! Montgomery forms of the Curve25519 family.
//!
//! Ported from `original_source/ecc/convert.c`. Those maps are specific to
//! the Wei25519 prime and its associated constants — they are not
//! parameterized by [`crate::curve::CurveParams`] the way the rest of the
//! crate is, since a Montgomery/Edwards form only exists for that one
//! family among the three supported curves.
//!
//! The reference prints a diagnostic line on each special case
//! (`px == 0`); this port drops the `printf` rather than pull in a
//! logging dependency for four branches that exist purely to document
//! which identity the general formula can't evaluate.

use crate::curve::params::WEI25519;
use crate::field;

/// A field-element coordinate pair. Not a [`crate::group::Point`]: the
/// twisted Edwards and Montgomery curves here don't get a group-law
/// implementation in this crate, only coordinate maps.
pub type Coords = ([u32; 8], [u32; 8]);

const A: [u32; 8] = [0x00076d06, 0, 0, 0, 0, 0, 0, 0];
const A_THIRD: [u32; 8] = [0x000279ac, 0, 0, 0, 0, 0, 0, 0];
const THREE: [u32; 8] = [3, 0, 0, 0, 0, 0, 0, 0];
const DELTA: [u32; 8] = [
    0xaaad2451, 0xaaaaaaaa, 0xaaaaaaaa, 0xaaaaaaaa, 0xaaaaaaaa, 0xaaaaaaaa, 0xaaaaaaaa, 0x2aaaaaaa,
];
const C: [u32; 8] = [
    0x00ba81e7, 0x3391fb55, 0xb482e57d, 0x3a5e2c2e, 0xfc03b081, 0x2d84f723, 0x9f5ff944, 0x70d9120b,
];
const MINUS_ONE: [u32; 8] = [
    0xffffffec, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff, 0x7fffffff,
];

fn is_zero(x: &[u32; 8]) -> bool {
    crate::primitives::bigint::is_zero(x)
}

fn mul_mod(x: &[u32; 8], y: &[u32; 8]) -> [u32; 8] {
    field::mod_p(&WEI25519, &field::mul(x, y))
}

fn add(x: &[u32; 8], y: &[u32; 8]) -> [u32; 8] {
    field::add(x, y, &WEI25519.p_r)
}

fn sub(x: &[u32; 8], y: &[u32; 8]) -> [u32; 8] {
    field::sub(x, y, &WEI25519.p)
}

fn inv(x: &[u32; 8]) -> [u32; 8] {
    field::inv(x, &WEI25519.p, &WEI25519.p_r)
}

/// `rx = (1 + py) / (1 - py) + delta`, `ry = c·(1 + py) / ((1 - py)·px)`.
pub fn twisted_edwards_to_short_weierstrass(p: Coords) -> Coords {
    let (px, py) = p;

    if is_zero(&px) {
        if is_zero(&py) {
            return ([0u32; 8], [0u32; 8]);
        }
        if py == MINUS_ONE {
            return (A_THIRD, [0u32; 8]);
        }
    }

    let one = [1, 0, 0, 0, 0, 0, 0, 0];
    let nom = add(&one, &py); // 1 + py
    let one_minus_py = sub(&one, &py); // 1 - py
    let den = inv(&one_minus_py);
    let ratio = mul_mod(&nom, &den);
    let rx = add(&ratio, &DELTA);

    let one_minus_py_times_px = mul_mod(&one_minus_py, &px);
    let c_times_nom = mul_mod(&C, &nom);
    let den2 = inv(&one_minus_py_times_px);
    let ry = mul_mod(&c_times_nom, &den2);

    (rx, ry)
}

/// `pa = 3·px − A`, `rx = c·pa / (3·py)`, `ry = (pa − 3) / (pa + 3)`.
pub fn short_weierstrass_to_twisted_edwards(p: Coords) -> Coords {
    let (px, py) = p;

    if is_zero(&py) {
        if is_zero(&px) {
            return ([0u32; 8], [0u32; 8]);
        }
        if px == A_THIRD {
            return ([0u32; 8], MINUS_ONE);
        }
    }

    let three_py = mul_mod(&THREE, &py);
    let den = inv(&three_py);

    let three_px = mul_mod(&THREE, &px);
    let pa = sub(&three_px, &A);

    let c_pa = mul_mod(&C, &pa);
    let rx = mul_mod(&c_pa, &den);

    let nom = sub(&pa, &THREE);
    let denom = add(&pa, &THREE);
    let ry = mul_mod(&nom, &inv(&denom));

    (rx, ry)
}

/// `(px, py) → (px − delta, py)`.
pub fn short_weierstrass_to_montgomery(p: Coords) -> Coords {
    let (px, py) = p;
    if is_zero(&px) && is_zero(&py) {
        return (px, py);
    }
    (sub(&px, &DELTA), py)
}

/// `(px, py) → (px + delta, py)`.
pub fn montgomery_to_short_weierstrass(p: Coords) -> Coords {
    let (px, py) = p;
    if is_zero(&px) && is_zero(&py) {
        return (px, py);
    }
    (add(&px, &DELTA), py)
}
