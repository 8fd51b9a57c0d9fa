//! Scan orchestration and warning accumulation.
//!
//! A scan is one synchronous pass: walk the vault, extract every note,
//! assemble the parent-link forest, and write the two artifacts. Per-note
//! problems never abort the pass; they are recorded as [`ScanWarning`]s and
//! the artifacts are produced from best-effort data.

pub mod crawler;
pub mod warnings;

pub use crawler::{Crawler, ScanError, ScanStats, VaultScan};
pub use warnings::ScanWarning;
