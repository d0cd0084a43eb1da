//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types from the crate and
//! the domain types they operate on.
//!
//! # Example
//!
//! ```rust
//! use trade_sim_simulation::prelude::*;
//! ```

// Draw sources
pub use crate::draw::{DrawSource, FixedDraws, UniformDraws};

// Simulator
pub use crate::simulator::{TradeSimulator, simulate};

// Aggregation
pub use crate::statistics::StatisticsAccumulator;
pub use crate::streak::StreakTracker;

// Domain types
pub use trade_sim_domain::enums::{Outcome, StreakPolicy};
pub use trade_sim_domain::error::SimulationError;
pub use trade_sim_domain::value_objects::{
    GroupStats, SimulationParameters, SimulationRun, StatisticsReport, TradeOutcome,
};
