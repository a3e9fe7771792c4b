//! Scalar multiplication and the operations built directly on it: key
//! generation, ECDH, and private-key validation.
//!
//! `mult` is a textbook double-and-add over the 256 bits of the scalar,
//! ported from `ecc_ec_mult` in `original_source/ecc/ecc.c` — no
//! windowing, no constant-time guarantees (the reference has none either;
//! see `SPEC_FULL.md`'s Non-goals).

use crate::curve::params::CurveParams;
use crate::group::{self, Point};
use crate::primitives::bigint;

/// Computes `secret · P` by double-and-add, scanning the scalar from its
/// most significant bit down.
pub fn mult(curve: &CurveParams, p: Point, secret: &[u32; 8]) -> Point {
    let mut q = Point::Identity;

    for i in (0..256).rev() {
        q = group::double(curve, q);
        let word = secret[i / 32];
        let bit = (word >> (i % 32)) & 1;
        if bit == 1 {
            q = group::add(curve, q, p);
        }
    }

    q
}

/// Derives the public point `d · G` for a private scalar `d`.
pub fn generate_public_key(curve: &CurveParams, d: &[u32; 8]) -> Point {
    let (gx, gy) = curve.g;
    mult(curve, Point::from_affine(gx, gy), d)
}

/// Computes the shared ECDH point `d · Q`, where `Q` is the peer's public
/// point.
pub fn ecdh(curve: &CurveParams, peer_public: Point, d: &[u32; 8]) -> Point {
    mult(curve, peer_public, d)
}

/// A private scalar is valid iff it is strictly less than the group order.
///
/// Ported from `ecc_is_valid_key`, which does not also reject zero —
/// kept as-is rather than adding a check the reference never performs.
pub fn is_valid_key(curve: &CurveParams, d: &[u32; 8]) -> bool {
    bigint::cmp(&curve.n, d) == std::cmp::Ordering::Greater
}
