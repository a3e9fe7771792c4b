//! Elliptic-curve arithmetic for 32-bit targets.
//!
//! This crate implements the short Weierstrass group law, scalar
//! multiplication, ECDH, and ECDSA over three curves — `SECP256R1`,
//! `WEI25519`, and `WEI25519_2` — plus the birational maps between
//! `WEI25519`'s short Weierstrass form and the twisted Edwards /
//! Montgomery forms of the same curve (Curve25519 / Ed25519).
//!
//! # Module overview
//!
//! - `primitives`
//!   Fixed-width 256-bit multi-precision integers: schoolbook add,
//!   subtract, multiply, and shift on little-endian limb arrays. Nothing
//!   above this layer reaches for anything but these operations.
//!
//! - `curve`
//!   Domain parameter tables for the three supported curves, plus a
//!   process-wide "active curve" cell used only by `abi`.
//!
//! - `field`
//!   Modular arithmetic over a runtime-selected modulus: add, subtract,
//!   multiply, Barrett and NIST P-256 fast reduction, and modular
//!   inversion via the binary extended Euclidean algorithm.
//!
//! - `group`
//!   The short Weierstrass group law — point doubling and addition in
//!   affine coordinates.
//!
//! - `scalar`
//!   Double-and-add scalar multiplication, and the key generation / ECDH
//!   operations built directly on it.
//!
//! - `ecdsa`
//!   Signing and verification.
//!
//! - `conversions`
//!   Birational maps between `WEI25519`'s short Weierstrass form and the
//!   twisted Edwards / Montgomery forms of the same curve.
//!
//! - `abi`
//!   A thin façade matching the shape of a C-ABI elliptic-curve library:
//!   select a curve once, then call operations without passing
//!   `&CurveParams` yourself.
//!
//! # Design goals
//!
//! - No heap allocations in the arithmetic core (Barrett reduction's
//!   internal scratch space is the one exception — see `field::reduction`)
//! - Every operation takes its curve's domain parameters explicitly
//! - No constant-time guarantees, no point compression, no runtime-defined
//!   curve parameters — see `SPEC_FULL.md`'s Non-goals
//!
//! This crate targets 32-bit microcontrollers running constrained
//! protocol stacks; it is not a general-purpose cryptography library.

pub mod abi;
pub mod conversions;
pub mod curve;
pub mod ecdsa;
pub mod field;
pub mod group;
pub mod primitives;
pub mod scalar;
