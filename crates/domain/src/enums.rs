use serde::{Deserialize, Serialize};

/// Classification of a single simulated trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Strictly positive profit.
    Win,
    /// Zero or negative profit. A flat trade still pays spread and commission.
    Loss,
}

impl Outcome {
    /// Classifies a signed profit amount.
    #[must_use]
    pub fn from_profit(profit: rust_decimal::Decimal) -> Self {
        if profit > rust_decimal::Decimal::ZERO {
            Self::Win
        } else {
            Self::Loss
        }
    }

    /// Returns true for [`Outcome::Win`].
    #[must_use]
    pub fn is_win(self) -> bool {
        matches!(self, Self::Win)
    }
}

/// How consecutive outcomes are counted into the max streak statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StreakPolicy {
    /// A streak only registers from its second trade onward, so a lone
    /// win or loss counts as zero and three wins in a row count as two.
    /// Matches the historical report output.
    #[default]
    SecondOccurrence,
    /// A streak counts every trade in it, including the first.
    FullLength,
}
