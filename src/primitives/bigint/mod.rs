//! 256-bit multi-precision integers.
//!
//! A 256-bit value here is a plain little-endian `[u32; 8]`, `Σ aᵢ ·
//! 2^{32i}` — not a newtype. Every operation is transparent about carries
//! and enforces no normalisation invariant, matching the reference this
//! layer is ported from (`original_source/ecc/ecc.c`'s unprefixed
//! `add`/`sub`/`rshift`/`isGreater` helpers, which likewise take raw
//! pointers rather than a wrapped type).
//!
//! Some intermediate values need 9 or 16 words (Barrett's `q1_q3`/`q2_tmp`
//! buffers, a full 256×256 product); those are plain `[u32; 9]` / `[u32;
//! 16]` arrays rather than a second named type, since they only ever pass
//! through [`ops`] and never escape this crate.

mod ops;

pub use ops::{add, cmp, is_equal, is_one, is_zero, mul, rshift_1, rshift_by, sub};
