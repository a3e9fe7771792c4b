//! Curve parameter tables and the active-curve registry.
//!
//! [`params`] holds the three supported curves' domain parameters as
//! `'static` data; every operation in [`crate::group`], [`crate::scalar`],
//! and [`crate::ecdsa`] takes one of these as an explicit argument. The
//! [`registry`] submodule is a thin process-wide "currently selected
//! curve" cell, needed only to give [`crate::abi`] the reference's
//! original ambient-curve surface (§6/§9 of the spec).

pub mod params;
pub mod registry;

pub use params::{CurveId, CurveParams, ReduceStrategy};
