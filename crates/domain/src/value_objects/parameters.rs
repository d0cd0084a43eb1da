//! Validated simulation inputs.

use crate::error::SimulationError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Largest accepted trade count. Every trade is kept in the run record, so
/// this bounds the memory a single run can take.
pub const MAX_TOTAL_TRADES: u32 = 1_000_000;

/// Inputs for a single simulation run.
///
/// A value of this type always satisfies its constraints: it can only be
/// built through [`SimulationParameters::new`] (or deserialized, which goes
/// through the same checks).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawParameters")]
pub struct SimulationParameters {
    account_size: Decimal,
    total_trades: u32,
    risk_per_trade: Decimal,
    win_rate: Decimal,
    risk_reward: Decimal,
}

/// Unvalidated mirror of [`SimulationParameters`] used for deserialization.
#[derive(Debug, Clone, Copy, Deserialize)]
struct RawParameters {
    account_size: Decimal,
    total_trades: u32,
    risk_per_trade: Decimal,
    win_rate: Decimal,
    risk_reward: Decimal,
}

impl TryFrom<RawParameters> for SimulationParameters {
    type Error = SimulationError;

    fn try_from(raw: RawParameters) -> Result<Self, Self::Error> {
        Self::new(
            raw.account_size,
            raw.total_trades,
            raw.risk_per_trade,
            raw.win_rate,
            raw.risk_reward,
        )
    }
}

impl SimulationParameters {
    /// Validates and builds a parameter set.
    ///
    /// # Arguments
    ///
    /// * `account_size` - Starting equity, must be positive
    /// * `total_trades` - Number of trades to simulate, in `1..=MAX_TOTAL_TRADES`
    /// * `risk_per_trade` - Percent of the current balance lost on a losing trade, in `(0, 100]`
    /// * `win_rate` - Percent chance that a trade wins, in `[0, 100]`
    /// * `risk_reward` - Win payout divided by the risk amount, must be positive
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidParameter`] naming the first
    /// parameter that violates its constraint.
    pub fn new(
        account_size: Decimal,
        total_trades: u32,
        risk_per_trade: Decimal,
        win_rate: Decimal,
        risk_reward: Decimal,
    ) -> Result<Self, SimulationError> {
        if account_size <= Decimal::ZERO {
            return Err(SimulationError::invalid(
                "account_size",
                format!("must be greater than 0, got {account_size}"),
            ));
        }
        if total_trades == 0 || total_trades > MAX_TOTAL_TRADES {
            return Err(SimulationError::invalid(
                "total_trades",
                format!("must be in [1, {MAX_TOTAL_TRADES}], got {total_trades}"),
            ));
        }
        if risk_per_trade <= Decimal::ZERO || risk_per_trade > Decimal::ONE_HUNDRED {
            return Err(SimulationError::invalid(
                "risk_per_trade",
                format!("must be in (0, 100], got {risk_per_trade}"),
            ));
        }
        if win_rate < Decimal::ZERO || win_rate > Decimal::ONE_HUNDRED {
            return Err(SimulationError::invalid(
                "win_rate",
                format!("must be in [0, 100], got {win_rate}"),
            ));
        }
        if risk_reward <= Decimal::ZERO {
            return Err(SimulationError::invalid(
                "risk_reward",
                format!("must be greater than 0, got {risk_reward}"),
            ));
        }

        Ok(Self {
            account_size,
            total_trades,
            risk_per_trade,
            win_rate,
            risk_reward,
        })
    }

    /// Starting equity.
    #[must_use]
    pub fn account_size(&self) -> Decimal {
        self.account_size
    }

    /// Number of trades to simulate.
    #[must_use]
    pub fn total_trades(&self) -> u32 {
        self.total_trades
    }

    /// Percent of the current balance risked per trade.
    #[must_use]
    pub fn risk_per_trade(&self) -> Decimal {
        self.risk_per_trade
    }

    /// Percent probability that a trade wins.
    #[must_use]
    pub fn win_rate(&self) -> Decimal {
        self.win_rate
    }

    /// Win payout relative to the risk amount.
    #[must_use]
    pub fn risk_reward(&self) -> Decimal {
        self.risk_reward
    }
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            account_size: Decimal::ONE_THOUSAND,
            total_trades: 100,
            risk_per_trade: Decimal::TWO,
            win_rate: Decimal::new(70, 0),
            risk_reward: Decimal::TWO,
        }
    }
}
