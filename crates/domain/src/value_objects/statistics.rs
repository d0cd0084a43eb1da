//! Summary statistics derived from a simulation run.

use crate::error::SimulationError;
use crate::math::round_dp2;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Count, sum and maximum of a group of trade amounts.
///
/// Loss groups hold magnitudes, so every recorded amount is non-negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupStats {
    /// Number of trades in the group.
    pub count: u32,
    /// Sum of the recorded amounts.
    pub sum: Decimal,
    /// Largest recorded amount, zero while the group is empty.
    pub max: Decimal,
}

impl GroupStats {
    /// Adds an amount to the group. Returns `None` if the sum overflows.
    #[must_use]
    pub fn record(&mut self, amount: Decimal) -> Option<()> {
        self.sum = self.sum.checked_add(amount)?;
        if self.count == 0 || amount > self.max {
            self.max = amount;
        }
        self.count += 1;
        Some(())
    }

    /// Returns true when no trade was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Arithmetic mean, `None` for an empty group.
    #[must_use]
    pub fn mean(&self) -> Option<Decimal> {
        if self.is_empty() {
            return None;
        }
        self.sum.checked_div(Decimal::from(self.count))
    }

    /// Largest amount, `None` for an empty group.
    #[must_use]
    pub fn maximum(&self) -> Option<Decimal> {
        (!self.is_empty()).then_some(self.max)
    }
}

/// Statistics for a completed simulation run.
///
/// Plain fields are always defined. Ratio statistics depend on the win or
/// loss group being non-empty and are exposed as methods returning
/// [`SimulationError::DivisionUndefined`] when they cannot be computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatisticsReport {
    /// Number of simulated trades.
    pub total_trades: u32,
    /// Trades with a positive profit.
    pub win_count: u32,
    /// Trades with a zero or negative profit.
    pub loss_count: u32,
    /// Realized win rate in percent, rounded to 2 dp.
    pub win_rate: Decimal,
    /// Longest run of consecutive wins under the configured streak policy.
    pub max_consecutive_wins: u32,
    /// Longest run of consecutive losses under the configured streak policy.
    pub max_consecutive_losses: u32,
    /// Risk per trade in percent, as supplied.
    pub risk_per_trade: Decimal,
    /// Starting account balance.
    pub initial_account: Decimal,
    /// Final minus initial balance, rounded to 2 dp.
    pub gain: Decimal,
    /// Gain as a percentage of the initial balance, rounded to 2 dp.
    pub growth_rate: Decimal,
    /// Balance after the last trade.
    pub final_account: Decimal,
    /// Winning profits.
    pub wins: GroupStats,
    /// Losing trade magnitudes.
    pub losses: GroupStats,
}

impl StatisticsReport {
    /// Mean profit of the winning trades.
    ///
    /// # Errors
    ///
    /// [`SimulationError::DivisionUndefined`] when the run has no wins.
    pub fn average_win(&self) -> Result<Decimal, SimulationError> {
        self.wins
            .mean()
            .ok_or_else(|| SimulationError::undefined("average_win"))
    }

    /// Mean loss magnitude of the losing trades.
    ///
    /// # Errors
    ///
    /// [`SimulationError::DivisionUndefined`] when the run has no losses.
    pub fn average_loss(&self) -> Result<Decimal, SimulationError> {
        self.losses
            .mean()
            .ok_or_else(|| SimulationError::undefined("average_loss"))
    }

    /// Largest single winning profit.
    ///
    /// # Errors
    ///
    /// [`SimulationError::DivisionUndefined`] when the run has no wins.
    pub fn max_win(&self) -> Result<Decimal, SimulationError> {
        self.wins
            .maximum()
            .ok_or_else(|| SimulationError::undefined("max_win"))
    }

    /// Largest single loss magnitude.
    ///
    /// # Errors
    ///
    /// [`SimulationError::DivisionUndefined`] when the run has no losses.
    pub fn max_loss(&self) -> Result<Decimal, SimulationError> {
        self.losses
            .maximum()
            .ok_or_else(|| SimulationError::undefined("max_loss"))
    }

    /// Realized average win over average loss, rounded to 2 dp.
    ///
    /// # Errors
    ///
    /// [`SimulationError::DivisionUndefined`] when either group is empty or
    /// the average loss is zero.
    pub fn risk_reward_ratio(&self) -> Result<Decimal, SimulationError> {
        let undefined = || SimulationError::undefined("risk_reward_ratio");
        let avg_win = self.wins.mean().ok_or_else(undefined)?;
        let avg_loss = self.losses.mean().ok_or_else(undefined)?;
        avg_win
            .checked_div(avg_loss)
            .map(round_dp2)
            .ok_or_else(undefined)
    }

    /// Gross winning profit over gross loss magnitude, rounded to 2 dp.
    ///
    /// # Errors
    ///
    /// [`SimulationError::DivisionUndefined`] when there are no losses or
    /// every loss was flat.
    pub fn profit_factor(&self) -> Result<Decimal, SimulationError> {
        let undefined = || SimulationError::undefined("profit_factor");
        if self.losses.is_empty() {
            return Err(undefined());
        }
        self.wins
            .sum
            .checked_div(self.losses.sum)
            .map(round_dp2)
            .ok_or_else(undefined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn group(amounts: &[Decimal]) -> GroupStats {
        let mut g = GroupStats::default();
        for a in amounts {
            g.record(*a).unwrap();
        }
        g
    }

    fn report(wins: GroupStats, losses: GroupStats) -> StatisticsReport {
        StatisticsReport {
            total_trades: wins.count + losses.count,
            win_count: wins.count,
            loss_count: losses.count,
            win_rate: Decimal::ZERO,
            max_consecutive_wins: 0,
            max_consecutive_losses: 0,
            risk_per_trade: dec!(2),
            initial_account: dec!(1000),
            gain: Decimal::ZERO,
            growth_rate: Decimal::ZERO,
            final_account: dec!(1000),
            wins,
            losses,
        }
    }

    #[test]
    fn test_group_stats() {
        let g = group(&[dec!(40), dec!(40.8), dec!(39.2)]);
        assert_eq!(g.count, 3);
        assert_eq!(g.sum, dec!(120.0));
        assert_eq!(g.max, dec!(40.8));
        assert_eq!(g.mean(), Some(dec!(40)));
        assert_eq!(GroupStats::default().mean(), None);
        assert_eq!(GroupStats::default().maximum(), None);
    }

    #[test]
    fn test_ratios() {
        let r = report(group(&[dec!(40), dec!(60)]), group(&[dec!(20), dec!(30), dec!(25)]));
        assert_eq!(r.average_win().unwrap(), dec!(50));
        assert_eq!(r.average_loss().unwrap(), dec!(25));
        assert_eq!(r.max_win().unwrap(), dec!(60));
        assert_eq!(r.max_loss().unwrap(), dec!(30));
        assert_eq!(r.risk_reward_ratio().unwrap(), dec!(2.00));
        assert_eq!(r.profit_factor().unwrap(), dec!(1.33));
    }

    #[test]
    fn test_no_wins_is_undefined() {
        let r = report(GroupStats::default(), group(&[dec!(20)]));
        assert_eq!(
            r.average_win(),
            Err(SimulationError::DivisionUndefined {
                statistic: "average_win"
            })
        );
        assert!(r.max_win().is_err());
        assert!(r.risk_reward_ratio().is_err());
        assert_eq!(r.profit_factor().unwrap(), dec!(0));
    }

    #[test]
    fn test_no_losses_is_undefined() {
        let r = report(group(&[dec!(40)]), GroupStats::default());
        assert!(r.average_loss().is_err());
        assert!(r.max_loss().is_err());
        assert!(r.risk_reward_ratio().is_err());
        assert_eq!(
            r.profit_factor(),
            Err(SimulationError::DivisionUndefined {
                statistic: "profit_factor"
            })
        );
    }

    #[test]
    fn test_flat_losses_make_ratios_undefined() {
        let r = report(group(&[dec!(1)]), group(&[dec!(0), dec!(0)]));
        assert_eq!(r.average_loss().unwrap(), dec!(0));
        assert!(r.risk_reward_ratio().is_err());
        assert!(r.profit_factor().is_err());
    }
}
