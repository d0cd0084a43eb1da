//! Domain types for the trade simulator.
//!
//! This crate provides the building blocks shared by the simulation engine
//! and its front ends:
//! - Validated simulation parameters
//! - Per-trade outcomes and the immutable simulation run record
//! - Summary statistics and their presentation rows
//! - Step-wise rounding helpers
//! - The error type for invalid input and undefined statistics

/// Enumerations shared across the workspace.
pub mod enums;
/// Error types.
pub mod error;
/// Numeric helpers.
pub mod math;
/// Presentation rows for statistics reports.
pub mod report;
/// Value objects.
pub mod value_objects;

pub use enums::{Outcome, StreakPolicy};
pub use error::SimulationError;
pub use report::ReportRow;
pub use value_objects::{
    GroupStats, SimulationParameters, SimulationRun, StatisticsReport, TradeOutcome,
};
