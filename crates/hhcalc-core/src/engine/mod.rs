//! # Engine Module
//!
//! The calculation itself, split into small pure steps:
//!
//! - **Configuration** ([`config`]) - The immutable [`config::SimulationConfig`] and its builder
//! - **Decomposition** ([`decomposition`]) - Divisibility checks of the grid against `npx × npy`
//! - **Fields** ([`fields`]) - Prognostic, diagnostic and temporary fields of a scheme selection
//! - **Estimate** ([`estimate`]) - Ghost cells, bytes per field and totals
//! - **Error Handling** ([`error`]) - The two calculation errors and configuration errors

pub mod config;
pub mod decomposition;
pub mod error;
pub mod estimate;
pub mod fields;
