pub mod parameters;
pub mod simulation_run;
pub mod statistics;
pub mod trade_outcome;

pub use parameters::{MAX_TOTAL_TRADES, SimulationParameters};
pub use simulation_run::SimulationRun;
pub use statistics::{GroupStats, StatisticsReport};
pub use trade_outcome::TradeOutcome;
