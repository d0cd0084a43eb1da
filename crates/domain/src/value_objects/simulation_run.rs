use crate::value_objects::parameters::SimulationParameters;
use crate::value_objects::statistics::StatisticsReport;
use crate::value_objects::trade_outcome::TradeOutcome;
use rust_decimal::Decimal;
use serde::Serialize;

/// Immutable output of one simulation.
///
/// Holds the per-trade profits, the account balance path (starting with the
/// initial balance), the cumulative profit path used for equity curves, and
/// the derived statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationRun {
    params: SimulationParameters,
    trades: Vec<TradeOutcome>,
    profits: Vec<Decimal>,
    accounts: Vec<Decimal>,
    net_profits: Vec<Decimal>,
    report: StatisticsReport,
}

impl SimulationRun {
    /// Assembles a run from its trades.
    ///
    /// `profits`, `accounts` and `net_profits` are copied from `trades`. The
    /// balance recurrence holds only if each trade's `balance` equals the
    /// previous balance plus its `profit`; this is not checked here.
    #[must_use]
    pub fn new(
        params: SimulationParameters,
        trades: Vec<TradeOutcome>,
        report: StatisticsReport,
    ) -> Self {
        let profits: Vec<Decimal> = trades.iter().map(|t| t.profit).collect();

        let mut accounts = Vec::with_capacity(trades.len() + 1);
        accounts.push(params.account_size());
        accounts.extend(trades.iter().map(|t| t.balance));

        let net_profits = profits
            .iter()
            .scan(Decimal::ZERO, |total, p| {
                *total += *p;
                Some(*total)
            })
            .collect();

        Self {
            params,
            trades,
            profits,
            accounts,
            net_profits,
            report,
        }
    }

    /// Parameters the run was produced with.
    #[must_use]
    pub fn params(&self) -> &SimulationParameters {
        &self.params
    }

    /// Per-trade detail.
    #[must_use]
    pub fn trades(&self) -> &[TradeOutcome] {
        &self.trades
    }

    /// Signed profit of each trade, in order.
    #[must_use]
    pub fn profits(&self) -> &[Decimal] {
        &self.profits
    }

    /// Account balance path, `total_trades + 1` long.
    #[must_use]
    pub fn accounts(&self) -> &[Decimal] {
        &self.accounts
    }

    /// Cumulative profit after each trade (the equity curve).
    #[must_use]
    pub fn net_profits(&self) -> &[Decimal] {
        &self.net_profits
    }

    /// Derived statistics.
    #[must_use]
    pub fn report(&self) -> &StatisticsReport {
        &self.report
    }

    /// Balance after the last trade.
    #[must_use]
    pub fn final_balance(&self) -> Decimal {
        self.accounts
            .last()
            .copied()
            .unwrap_or_else(|| self.params.account_size())
    }
}
