//! Presentation rows for a [`StatisticsReport`].
//!
//! Front ends render the statistics as a fixed, ordered list of labelled
//! strings. The labels and their order are part of the output contract.

use crate::error::SimulationError;
use crate::math::round_dp2;
use crate::value_objects::StatisticsReport;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::{Map, Value};

/// Value shown for a statistic that is undefined for the run.
pub const UNDEFINED: &str = "n/a";

/// Report labels, in output order.
pub const LABELS: [&str; 14] = [
    "Total trades",
    "Wins",
    "Average Win",
    "Average Loss",
    "Max Win",
    "Max Loss",
    "Max Cons. Wins",
    "Max Cons. Loss",
    "Risk Reward Ratio",
    "Profit Factor",
    "Risk per trade",
    "Initial Account",
    "Profit",
    "Final Account",
];

/// One labelled line of a rendered report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    /// Label from [`LABELS`].
    pub label: &'static str,
    /// Formatted value.
    pub value: String,
}

fn amount(value: Decimal) -> String {
    format!("{:.2}", round_dp2(value))
}

fn statistic(value: Result<Decimal, SimulationError>) -> String {
    value.map_or_else(|_| UNDEFINED.to_string(), amount)
}

impl StatisticsReport {
    /// Formats the report as ordered rows.
    ///
    /// Undefined ratio statistics are rendered as [`UNDEFINED`].
    #[must_use]
    pub fn rows(&self) -> Vec<ReportRow> {
        let values = [
            self.total_trades.to_string(),
            format!("{} / {}%", self.win_count, amount(self.win_rate)),
            statistic(self.average_win()),
            statistic(self.average_loss()),
            statistic(self.max_win()),
            statistic(self.max_loss()),
            self.max_consecutive_wins.to_string(),
            self.max_consecutive_losses.to_string(),
            statistic(self.risk_reward_ratio()),
            statistic(self.profit_factor()),
            format!("{}%", amount(self.risk_per_trade)),
            amount(self.initial_account),
            format!("{} / {}%", amount(self.gain), amount(self.growth_rate)),
            amount(self.final_account),
        ];

        LABELS
            .into_iter()
            .zip(values)
            .map(|(label, value)| ReportRow { label, value })
            .collect()
    }

    /// Formats the report as an insertion-ordered JSON object keyed by label.
    #[must_use]
    pub fn to_json_map(&self) -> Map<String, Value> {
        self.rows()
            .into_iter()
            .map(|row| (row.label.to_string(), Value::String(row.value)))
            .collect()
    }
}
