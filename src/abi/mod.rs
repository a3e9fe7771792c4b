//! A thin façade shaped like the reference's C ABI: select a curve once,
//! then call operations without threading `&CurveParams` through every
//! call site yourself.
//!
//! Everything here is a direct pass-through to [`crate::curve::registry`]
//! plus the curve-explicit functions in [`crate::group`], [`crate::scalar`],
//! [`crate::ecdsa`], and [`crate::conversions`]. New code that doesn't need
//! ABI compatibility with the reference's calling convention should prefer
//! those modules directly — they don't share mutable process-wide state.

use crate::curve::params::CurveId;
use crate::curve::registry;
use crate::ecdsa::{self, SignError, VerifyError};
use crate::group::{self, Point};
use crate::scalar;

/// Selects the curve every later `abi` call implicitly operates on.
pub fn init(curve: CurveId) {
    registry::init(curve);
}

/// The raw discriminant passed to [`init_raw`] didn't name a supported
/// curve.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct InitError;

/// Selects the active curve from a raw integer discriminant, matching the
/// reference's `init(curve_id)` entry point. Prefer [`init`] with a
/// [`CurveId`] when the curve is known at compile time.
pub fn init_raw(id: u32) -> Result<(), InitError> {
    match CurveId::from_raw(id) {
        Some(curve) => {
            init(curve);
            Ok(())
        }
        None => Err(InitError),
    }
}

/// `Q = d·P` on the active curve.
pub fn ec_mult(p: Point, d: &[u32; 8]) -> Point {
    scalar::mult(registry::active(), p, d)
}

/// `2P` on the active curve.
pub fn ec_double(p: Point) -> Point {
    group::double(registry::active(), p)
}

/// `P + Q` on the active curve.
pub fn ec_add(p: Point, q: Point) -> Point {
    group::add(registry::active(), p, q)
}

/// `d·G` on the active curve.
pub fn generate_public_key(d: &[u32; 8]) -> Point {
    scalar::generate_public_key(registry::active(), d)
}

/// ECDH shared point on the active curve.
pub fn ecdh(peer_public: Point, d: &[u32; 8]) -> Point {
    scalar::ecdh(registry::active(), peer_public, d)
}

/// `d < n` on the active curve.
pub fn is_valid_key(d: &[u32; 8]) -> bool {
    scalar::is_valid_key(registry::active(), d)
}

/// ECDSA sign on the active curve.
pub fn ecdsa_sign(d: &[u32; 8], e: &[u32; 8], k: &[u32; 8]) -> Result<([u32; 8], [u32; 8]), SignError> {
    ecdsa::sign(registry::active(), d, e, k)
}

/// ECDSA verify on the active curve.
pub fn ecdsa_validate(q: Point, e: &[u32; 8], r: &[u32; 8], s: &[u32; 8]) -> Result<(), VerifyError> {
    ecdsa::verify(registry::active(), q, e, r, s)
}

pub use crate::conversions::{
    montgomery_to_short_weierstrass as mont_to_wei,
    short_weierstrass_to_montgomery as wei_to_mont,
    short_weierstrass_to_twisted_edwards as wei_to_ed,
    twisted_edwards_to_short_weierstrass as ed_to_wei,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_selects_the_curve_that_later_calls_use() {
        init(CurveId::Secp256r1);
        let d = [3, 0, 0, 0, 0, 0, 0, 0];
        let via_abi = generate_public_key(&d);
        let via_explicit = scalar::generate_public_key(CurveId::Secp256r1.params(), &d);
        assert_eq!(via_abi, via_explicit);
    }

    #[test]
    fn init_raw_rejects_an_unrecognized_discriminant() {
        assert_eq!(init_raw(99), Err(InitError));
    }

    #[test]
    fn init_raw_accepts_every_documented_curve() {
        assert_eq!(init_raw(0), Ok(()));
        assert_eq!(init_raw(1), Ok(()));
        assert_eq!(init_raw(2), Ok(()));
    }
}
