//! The short Weierstrass group law: point doubling and addition in affine
//! coordinates.
//!
//! Ported from `ec_double`/`ec_add` in `original_source/ecc/ecc.c`. The
//! reference represents the point at infinity as the affine pair `(0, 0)`,
//! which is never itself a curve point for any of the three supported
//! curves; this crate makes that sentinel explicit with [`Point::Identity`]
//! instead (spec §9's recommended redesign).

use crate::curve::params::CurveParams;
use crate::field;

/// A 256-bit field element, little-endian limbs.
pub type FieldElement = [u32; 8];

/// A point on a short Weierstrass curve, in affine coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Point {
    /// The group identity (point at infinity).
    Identity,
    /// An affine point `(x, y)` on the curve.
    Affine { x: FieldElement, y: FieldElement },
}

impl Point {
    /// Builds an affine point, or [`Point::Identity`] if both coordinates
    /// happen to be zero — the reference's sentinel representation.
    pub fn from_affine(x: FieldElement, y: FieldElement) -> Point {
        if bigint_is_zero(&x) && bigint_is_zero(&y) {
            Point::Identity
        } else {
            Point::Affine { x, y }
        }
    }

    /// Decomposes back into the `(x, y)` pair the reference's ABI uses,
    /// with the identity represented as `(0, 0)`.
    pub fn to_affine(self) -> (FieldElement, FieldElement) {
        match self {
            Point::Identity => ([0u32; 8], [0u32; 8]),
            Point::Affine { x, y } => (x, y),
        }
    }
}

fn bigint_is_zero(x: &FieldElement) -> bool {
    crate::primitives::bigint::is_zero(x)
}

fn mul_mod(curve: &CurveParams, x: &FieldElement, y: &FieldElement) -> FieldElement {
    field::mod_p(curve, &field::mul(x, y))
}

/// Doubles a point: `2P`.
pub fn double(curve: &CurveParams, p: Point) -> Point {
    let (px, py) = match p {
        Point::Identity => return Point::Identity,
        Point::Affine { x, y } => (x, y),
    };

    let x2 = mul_mod(curve, &px, &px); // x^2 mod p
    let three = [3, 0, 0, 0, 0, 0, 0, 0];
    let three_x2 = mul_mod(curve, &x2, &three); // 3x^2 mod p
    let numerator = field::sub(&three_x2, &curve.a, &curve.p); // 3x^2 - a_stored = 3x^2 + a_true
    let two_y = field::add(&py, &py, &curve.p_r);
    let two_y_inv = field::inv(&two_y, &curve.p, &curve.p_r);
    let lambda = mul_mod(curve, &numerator, &two_y_inv);

    let lambda2 = mul_mod(curve, &lambda, &lambda);
    let lambda2_minus_x = field::sub(&lambda2, &px, &curve.p);
    let dx = field::sub(&lambda2_minus_x, &px, &curve.p); // lambda^2 - 2x

    let x_minus_dx = field::sub(&px, &dx, &curve.p);
    let lambda_times = mul_mod(curve, &lambda, &x_minus_dx);
    let dy = field::sub(&lambda_times, &py, &curve.p);

    Point::from_affine(dx, dy)
}

/// Adds two points: `P + Q`.
pub fn add(curve: &CurveParams, p: Point, q: Point) -> Point {
    let (px, py) = match p {
        Point::Identity => return q,
        Point::Affine { x, y } => (x, y),
    };
    let (qx, qy) = match q {
        Point::Identity => return p,
        Point::Affine { x, y } => (x, y),
    };

    if bigint_is_zero(&field::sub(&px, &qx, &curve.p)) {
        return if bigint_is_zero(&field::sub(&py, &qy, &curve.p)) {
            double(curve, p)
        } else {
            Point::Identity
        };
    }

    let numerator = field::sub(&py, &qy, &curve.p);
    let denominator = field::sub(&px, &qx, &curve.p);
    let denominator_inv = field::inv(&denominator, &curve.p, &curve.p_r);
    let lambda = mul_mod(curve, &numerator, &denominator_inv);

    let lambda2 = mul_mod(curve, &lambda, &lambda);
    let lambda2_minus_px = field::sub(&lambda2, &px, &curve.p);
    let sx = field::sub(&lambda2_minus_px, &qx, &curve.p);

    let qx_minus_sx = field::sub(&qx, &sx, &curve.p);
    let lambda_times = mul_mod(curve, &lambda, &qx_minus_sx);
    let sy = field::sub(&lambda_times, &qy, &curve.p);

    Point::from_affine(sx, sy)
}
