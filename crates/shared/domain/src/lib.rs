//! # Domain Models
//!
//! This crate contains pure domain types with minimal dependencies (`serde`, `bitflags`).
//! Keep it lean: no I/O, no async, no dispatch logic. Just data and simple helpers
//! shared by the contracts, the infrastructure crates and the composition root.

pub mod capability;
pub mod config;
pub mod constants;
pub mod input;
