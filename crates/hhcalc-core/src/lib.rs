//! # hhcalc
//!
//! Estimates how many 3D fields a MicroHH simulation allocates and how much memory that
//! takes, given the grid, the process decomposition and the numerical schemes.
//!
//! ## Layout
//!
//! - **[`core`]: The vocabulary.** Scheme enums with their labels, the legal options of each
//!   simulation mode, grid and halo arithmetic, and byte formatting.
//!
//! - **[`engine`]: The calculation.** The immutable [`engine::config::SimulationConfig`]
//!   and its builder, the decomposition validator and the field & memory estimator. Every
//!   function here is pure; nothing is cached between calls.
//!
//! - **[`workflows`]: The public entry point.** [`workflows::calculate::run`] chains the
//!   scheme cross-check, the decomposition check and the estimate into one call.

pub mod core;
pub mod engine;
pub mod workflows;
