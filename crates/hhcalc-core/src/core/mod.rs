//! # Core Module
//!
//! Stateless vocabulary shared by the rest of the crate: the closed scheme enums and their
//! labels, the per-mode tables of legal options, grid and ghost-cell arithmetic, and byte
//! formatting for reports.

pub mod grid;
pub mod options;
pub mod schemes;
pub mod units;
