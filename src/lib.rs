//! Harvest timing for farm grow records.
//!
//! The engine in [`logic`] is pure: callers pass a cultivar's growing-days
//! text, hardiness zones, a planted date and "today", and get back the
//! value types in [`models`]. Nothing in it reads the clock or fails.

pub mod cli;
pub mod config;
pub mod error;
pub mod logic;
pub mod models;
pub mod report;

pub use logic::HarvestEstimator;
