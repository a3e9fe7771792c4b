//! The process-wide "active curve" cell.
//!
//! The math in [`crate::field`], [`crate::group`], [`crate::scalar`], and
//! [`crate::ecdsa`] all take `&'static CurveParams` explicitly and never
//! touch this module — per spec §9's recommended redesign, ambient state
//! is eliminated from the core. This cell exists only so [`crate::abi`]
//! can offer the reference's original surface, where `init(curve_id)` is
//! called once and every later call implicitly uses that curve.

use std::sync::{OnceLock, RwLock};

use crate::curve::params::{CurveId, CurveParams};

fn active_cell() -> &'static RwLock<&'static CurveParams> {
    static ACTIVE: OnceLock<RwLock<&'static CurveParams>> = OnceLock::new();
    ACTIVE.get_or_init(|| RwLock::new(CurveId::Secp256r1.params()))
}

/// Replaces the active curve selection.
///
/// Single-writer, intended to be called once at startup; spec §4.4/§5
/// require callers to serialize this with any other call, which the
/// `RwLock` enforces for the duration of the swap itself but cannot
/// enforce across the read/write pair a caller might perform.
pub fn init(curve: CurveId) {
    let mut guard = active_cell()
        .write()
        .expect("curve registry lock poisoned");
    *guard = curve.params();
}

/// Returns the currently active curve's parameters.
pub fn active() -> &'static CurveParams {
    *active_cell().read().expect("curve registry lock poisoned")
}
