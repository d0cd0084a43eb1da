//! Folding trade outcomes into a statistics report.

use crate::streak::StreakTracker;
use rust_decimal::Decimal;
use trade_sim_domain::enums::StreakPolicy;
use trade_sim_domain::error::SimulationError;
use trade_sim_domain::math::round_dp2;
use trade_sim_domain::value_objects::{
    GroupStats, SimulationParameters, StatisticsReport, TradeOutcome,
};

/// Running aggregates for one simulation.
#[derive(Debug, Clone)]
pub struct StatisticsAccumulator {
    params: SimulationParameters,
    wins: GroupStats,
    losses: GroupStats,
    streaks: StreakTracker,
    recorded: u32,
}

impl StatisticsAccumulator {
    /// Creates an empty accumulator.
    #[must_use]
    pub fn new(params: SimulationParameters, policy: StreakPolicy) -> Self {
        Self {
            params,
            wins: GroupStats::default(),
            losses: GroupStats::default(),
            streaks: StreakTracker::new(policy),
            recorded: 0,
        }
    }

    /// Adds one trade.
    ///
    /// # Errors
    ///
    /// [`SimulationError::ArithmeticOverflow`] if a group sum overflows.
    pub fn record(&mut self, trade: &TradeOutcome) -> Result<(), SimulationError> {
        let outcome = trade.outcome();
        let added = if outcome.is_win() {
            self.wins.record(trade.profit)
        } else {
            self.losses.record(trade.profit.abs())
        };
        added.ok_or(SimulationError::ArithmeticOverflow {
            trade: self.recorded,
        })?;

        self.streaks.record(outcome);
        self.recorded += 1;
        Ok(())
    }

    /// Produces the report given the balance after the last trade.
    ///
    /// # Errors
    ///
    /// [`SimulationError::ArithmeticOverflow`] if the growth rate cannot be
    /// represented.
    pub fn finish(self, final_account: Decimal) -> Result<StatisticsReport, SimulationError> {
        let overflow = SimulationError::ArithmeticOverflow {
            trade: self.recorded.saturating_sub(1),
        };
        let initial = self.params.account_size();
        let total = Decimal::from(self.recorded.max(1));

        let win_rate = round_dp2(Decimal::from(self.wins.count) * Decimal::ONE_HUNDRED / total);

        let raw_gain = final_account - initial;
        let growth_rate = raw_gain
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|g| g.checked_div(initial))
            .map(round_dp2)
            .ok_or(overflow)?;

        Ok(StatisticsReport {
            total_trades: self.recorded,
            win_count: self.wins.count,
            loss_count: self.losses.count,
            win_rate,
            max_consecutive_wins: self.streaks.max_wins(),
            max_consecutive_losses: self.streaks.max_losses(),
            risk_per_trade: self.params.risk_per_trade(),
            initial_account: initial,
            gain: round_dp2(raw_gain),
            growth_rate,
            final_account,
            wins: self.wins,
            losses: self.losses,
        })
    }
}
