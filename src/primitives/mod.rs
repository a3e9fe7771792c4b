//! Fixed-size integer primitives used across the arithmetic stack.
//!
//! Exposes the [`bigint`] module: schoolbook add/sub/mul/shift and
//! comparisons on 8-word (256-bit), 9-word, and 16-word little-endian limb
//! sequences. Everything above this layer — field arithmetic, the group
//! law, ECDSA — is built purely in terms of these operations.

pub mod bigint;
