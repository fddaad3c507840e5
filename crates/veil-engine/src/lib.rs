//! Veil engine crate.
//!
//! Platform-facing pieces used by the UI layer: geometry, input polling and
//! edge tracking, host event contracts, and logging setup.

pub mod coords;
pub mod core;
pub mod input;
pub mod logging;
