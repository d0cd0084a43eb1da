//! Trade outcome simulation engine.
//!
//! This crate turns validated [`SimulationParameters`] and a source of
//! random draws into a [`SimulationRun`]:
//! - Uniform and scripted draw sources
//! - Consecutive win/loss streak tracking
//! - Statistics accumulation over the trade sequence
//! - The compounded trade simulator
//!
//! [`SimulationParameters`]: trade_sim_domain::value_objects::SimulationParameters
//! [`SimulationRun`]: trade_sim_domain::value_objects::SimulationRun

/// Prelude module for convenient imports.
pub mod prelude;

/// Random draw sources.
pub mod draw;
/// Compounded trade simulator.
pub mod simulator;
/// Statistics accumulation.
pub mod statistics;
/// Streak tracking.
pub mod streak;

pub use draw::{DrawSource, FixedDraws, UniformDraws};
pub use simulator::{TradeSimulator, simulate};
