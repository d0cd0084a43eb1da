use crate::enums::Outcome;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Result of one simulated trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeOutcome {
    /// Uniform draw that decided the trade.
    pub draw: Decimal,
    /// Amount at risk on this trade, zero or negative.
    pub risk_amount: Decimal,
    /// Signed profit booked by the trade.
    pub profit: Decimal,
    /// Account balance after the trade.
    pub balance: Decimal,
}

impl TradeOutcome {
    /// Win or loss, by the sign of the profit.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        Outcome::from_profit(self.profit)
    }

    /// Returns true when the trade booked a positive profit.
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.outcome().is_win()
    }
}
