//! Compounded trade simulator.
//!
//! Each trade risks a fixed percentage of the current balance. A winning
//! trade pays the risk amount times the reward-to-risk ratio; a losing trade
//! gives up the risk amount. The balance is carried forward from trade to
//! trade so results compound. Spread and commissions are not modelled.

use crate::draw::DrawSource;
use crate::statistics::StatisticsAccumulator;
use rust_decimal::Decimal;
use tracing::{debug, trace};
use trade_sim_domain::enums::StreakPolicy;
use trade_sim_domain::error::SimulationError;
use trade_sim_domain::math::{percent_of, round_dp2};
use trade_sim_domain::value_objects::{SimulationParameters, SimulationRun, TradeOutcome};

/// Runs trade simulations for a fixed parameter set.
///
/// The simulator holds no mutable state; the same instance can run any
/// number of independent simulations, including from several threads.
#[derive(Debug, Clone, Copy)]
pub struct TradeSimulator {
    params: SimulationParameters,
    streak_policy: StreakPolicy,
}

impl TradeSimulator {
    /// Creates a simulator using the default streak policy.
    #[must_use]
    pub fn new(params: SimulationParameters) -> Self {
        Self {
            params,
            streak_policy: StreakPolicy::default(),
        }
    }

    /// Sets how consecutive outcomes are counted.
    #[must_use]
    pub fn with_streak_policy(mut self, policy: StreakPolicy) -> Self {
        self.streak_policy = policy;
        self
    }

    /// Parameters used by every run.
    #[must_use]
    pub fn params(&self) -> &SimulationParameters {
        &self.params
    }

    /// Simulates `total_trades` trades using draws from `draws`.
    ///
    /// # Arguments
    ///
    /// * `draws` - Source deciding each trade; a seeded source makes the run reproducible
    ///
    /// # Returns
    ///
    /// The complete run, including the balance and equity paths.
    ///
    /// # Errors
    ///
    /// [`SimulationError::ArithmeticOverflow`] when the compounded balance
    /// leaves the decimal range. No partial run is returned.
    pub fn run<D: DrawSource + ?Sized>(
        &self,
        draws: &mut D,
    ) -> Result<SimulationRun, SimulationError> {
        let params = self.params;
        debug!(
            account_size = %params.account_size(),
            total_trades = params.total_trades(),
            risk_per_trade = %params.risk_per_trade(),
            win_rate = %params.win_rate(),
            risk_reward = %params.risk_reward(),
            streak_policy = ?self.streak_policy,
            "Starting trade simulation"
        );

        let mut balance = params.account_size();
        let mut trades = Vec::with_capacity(params.total_trades() as usize);
        let mut stats = StatisticsAccumulator::new(params, self.streak_policy);

        for index in 0..params.total_trades() {
            let trade = self.simulate_trade(index, balance, draws.next_draw())?;
            trace!(
                trade = index,
                draw = %trade.draw,
                profit = %trade.profit,
                balance = %trade.balance,
                "Simulated trade"
            );
            stats.record(&trade)?;
            balance = trade.balance;
            trades.push(trade);
        }

        let report = stats.finish(balance)?;
        debug!(
            wins = report.win_count,
            losses = report.loss_count,
            final_account = %report.final_account,
            growth_rate = %report.growth_rate,
            "Trade simulation finished"
        );

        Ok(SimulationRun::new(params, trades, report))
    }

    fn simulate_trade(
        &self,
        index: u32,
        balance: Decimal,
        draw: Decimal,
    ) -> Result<TradeOutcome, SimulationError> {
        let overflow = || SimulationError::ArithmeticOverflow { trade: index };
        let win = draw <= self.params.win_rate();

        let risk_amount = -percent_of(balance, self.params.risk_per_trade())
            .map(round_dp2)
            .ok_or_else(overflow)?;
        let win_payout = risk_amount
            .abs()
            .checked_mul(self.params.risk_reward())
            .ok_or_else(overflow)?;

        let profit = if win { win_payout } else { risk_amount };
        let balance = balance.checked_add(profit).ok_or_else(overflow)?;

        Ok(TradeOutcome {
            draw,
            risk_amount,
            profit,
            balance,
        })
    }
}

/// Runs a single simulation with the default streak policy.
///
/// # Errors
///
/// See [`TradeSimulator::run`].
pub fn simulate<D: DrawSource + ?Sized>(
    params: SimulationParameters,
    draws: &mut D,
) -> Result<SimulationRun, SimulationError> {
    TradeSimulator::new(params).run(draws)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{FixedDraws, UniformDraws};
    use rust_decimal_macros::dec;

    fn params(total_trades: u32, win_rate: Decimal) -> SimulationParameters {
        SimulationParameters::new(dec!(1000), total_trades, dec!(2), win_rate, dec!(2)).unwrap()
    }

    fn assert_invariants(run: &SimulationRun) {
        let total = run.params().total_trades() as usize;
        assert_eq!(run.accounts().len(), total + 1);
        assert_eq!(run.profits().len(), total);
        assert_eq!(run.net_profits().len(), total);
        assert_eq!(run.accounts()[0], run.params().account_size());

        for (i, profit) in run.profits().iter().enumerate() {
            assert_eq!(run.accounts()[i + 1], run.accounts()[i] + *profit);
        }

        let last = run.accounts()[total];
        assert_eq!(run.net_profits()[total - 1], last - run.accounts()[0]);

        let report = run.report();
        let wins = run.profits().iter().filter(|p| **p > Decimal::ZERO).count() as u32;
        assert_eq!(report.win_count, wins);
        assert_eq!(report.win_count + report.loss_count, report.total_trades);
        assert_eq!(report.final_account, last);
    }

    #[test]
    fn test_single_winning_trade() {
        let mut draws = FixedDraws::constant(dec!(50.0));
        let run = simulate(params(1, dec!(100)), &mut draws).unwrap();

        assert_eq!(run.trades()[0].risk_amount, dec!(-20.0));
        assert_eq!(run.profits(), &[dec!(40.0)]);
        assert_eq!(run.accounts(), &[dec!(1000), dec!(1040)]);
        assert_eq!(run.report().gain, dec!(40.0));
        assert_eq!(run.report().growth_rate, dec!(4.0));
        assert_eq!(run.report().win_rate, dec!(100));
        assert!(matches!(
            run.report().average_loss(),
            Err(SimulationError::DivisionUndefined { .. })
        ));
        assert_invariants(&run);
    }

    #[test]
    fn test_single_losing_trade() {
        let mut draws = FixedDraws::constant(dec!(50.0));
        let run = simulate(params(1, dec!(0)), &mut draws).unwrap();

        assert_eq!(run.profits(), &[dec!(-20.0)]);
        assert_eq!(run.accounts(), &[dec!(1000), dec!(980)]);
        assert_eq!(run.report().gain, dec!(-20.0));
        assert_eq!(run.report().growth_rate, dec!(-2.0));
        assert_eq!(
            run.report().average_win(),
            Err(SimulationError::DivisionUndefined {
                statistic: "average_win"
            })
        );
        assert_eq!(
            run.report().max_win(),
            Err(SimulationError::DivisionUndefined {
                statistic: "max_win"
            })
        );
        assert_eq!(run.report().max_loss().unwrap(), dec!(20));
        assert_invariants(&run);
    }

    #[test]
    fn test_compounding_with_stepwise_rounding() {
        let mut draws = FixedDraws::new(vec![dec!(50), dec!(50.01), dec!(10)]);
        let run = simulate(params(3, dec!(50)), &mut draws).unwrap();

        assert_eq!(run.profits(), &[dec!(40), dec!(-20.80), dec!(40.76)]);
        assert_eq!(
            run.accounts(),
            &[dec!(1000), dec!(1040), dec!(1019.20), dec!(1059.96)]
        );
        assert_eq!(run.net_profits(), &[dec!(40), dec!(19.20), dec!(59.96)]);

        let report = run.report();
        assert_eq!(report.win_rate, dec!(66.67));
        assert_eq!(report.average_win().unwrap(), dec!(40.38));
        assert_eq!(report.average_loss().unwrap(), dec!(20.80));
        assert_eq!(report.risk_reward_ratio().unwrap(), dec!(1.94));
        assert_eq!(report.profit_factor().unwrap(), dec!(3.88));
        assert_eq!(report.gain, dec!(59.96));
        assert_eq!(report.growth_rate, dec!(6.00));
        assert_eq!(report.max_consecutive_wins, 0);
        assert_eq!(report.max_consecutive_losses, 0);
        assert_invariants(&run);
    }

    #[test]
    fn test_streaks_by_policy() {
        // win, win, win, loss, loss
        let draws = vec![dec!(10), dec!(20), dec!(30), dec!(90), dec!(95)];

        let run = TradeSimulator::new(params(5, dec!(50)))
            .run(&mut FixedDraws::new(draws.clone()))
            .unwrap();
        assert_eq!(run.report().max_consecutive_wins, 2);
        assert_eq!(run.report().max_consecutive_losses, 1);

        let run = TradeSimulator::new(params(5, dec!(50)))
            .with_streak_policy(StreakPolicy::FullLength)
            .run(&mut FixedDraws::new(draws))
            .unwrap();
        assert_eq!(run.report().max_consecutive_wins, 3);
        assert_eq!(run.report().max_consecutive_losses, 2);
    }

    #[test]
    fn test_full_win_rate_boundary() {
        let mut draws = FixedDraws::new(vec![dec!(1), dec!(100), dec!(100.00)]);
        let run = simulate(params(3, dec!(100)), &mut draws).unwrap();
        assert_eq!(run.report().loss_count, 0);
        assert!(run.report().average_loss().is_err());
        assert!(run.report().max_loss().is_err());
        assert!(run.report().profit_factor().is_err());

        // Draws above 100 lose even at a 100% win rate.
        let mut draws = FixedDraws::new(vec![dec!(100.01), dec!(101)]);
        let run = simulate(params(2, dec!(100)), &mut draws).unwrap();
        assert_eq!(run.report().win_count, 0);
    }

    #[test]
    fn test_zero_balance_trades_are_losses() {
        let params =
            SimulationParameters::new(dec!(100), 3, dec!(100), dec!(50), dec!(3)).unwrap();
        let mut draws = FixedDraws::new(vec![dec!(99), dec!(1), dec!(1)]);
        let run = simulate(params, &mut draws).unwrap();

        assert_eq!(run.accounts(), &[dec!(100), dec!(0), dec!(0), dec!(0)]);
        assert_eq!(run.report().win_count, 0);
        assert_eq!(run.report().loss_count, 3);
        assert_eq!(run.report().growth_rate, dec!(-100));
        assert!(run.report().risk_reward_ratio().is_err());
        assert_invariants(&run);
    }

    #[test]
    fn test_seeded_runs_are_identical() {
        let simulator = TradeSimulator::new(params(250, dec!(55)));
        let first = simulator.run(&mut UniformDraws::seeded(2024)).unwrap();
        let second = simulator.run(&mut UniformDraws::seeded(2024)).unwrap();
        assert_eq!(first, second);

        let other = simulator.run(&mut UniformDraws::seeded(2025)).unwrap();
        assert_ne!(first.profits(), other.profits());
    }

    #[test]
    fn test_invariants_hold_for_random_runs() {
        for seed in 0u64..20 {
            let params = SimulationParameters::new(
                dec!(2500),
                200,
                Decimal::from(1 + seed % 5),
                Decimal::from(30 + seed * 2),
                dec!(1.5),
            )
            .unwrap();
            let run = simulate(params, &mut UniformDraws::seeded(seed)).unwrap();
            assert_invariants(&run);
        }
    }

    #[test]
    fn test_longest_run_overflows_instead_of_aborting() {
        let params = SimulationParameters::new(
            dec!(1000),
            trade_sim_domain::value_objects::MAX_TOTAL_TRADES,
            dec!(100),
            dec!(100),
            dec!(100),
        )
        .unwrap();
        let err = simulate(params, &mut FixedDraws::constant(dec!(1))).unwrap_err();
        assert!(matches!(err, SimulationError::ArithmeticOverflow { trade } if trade < 20));
    }

    #[test]
    fn test_run_exposes_params_and_final_balance() {
        let simulator = TradeSimulator::new(params(3, dec!(50)));
        assert_eq!(simulator.params().total_trades(), 3);

        let run = simulator
            .run(&mut FixedDraws::new(vec![dec!(50), dec!(50.01), dec!(10)]))
            .unwrap();
        assert_eq!(run.params(), simulator.params());
        assert_eq!(run.final_balance(), dec!(1059.96));
        assert_eq!(run.final_balance(), run.report().final_account);

        let wins: Vec<bool> = run.trades().iter().map(TradeOutcome::is_win).collect();
        assert_eq!(wins, vec![true, false, true]);
    }

    #[test]
    fn test_balance_overflow_is_reported() {
        let params =
            SimulationParameters::new(dec!(1000), 40, dec!(100), dec!(100), dec!(100)).unwrap();
        let err = simulate(params, &mut FixedDraws::constant(dec!(1))).unwrap_err();
        assert!(matches!(err, SimulationError::ArithmeticOverflow { .. }));
    }
}
