use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places every reported amount is rounded to.
pub const REPORT_DP: u32 = 2;

/// Rounds to two decimal places, half to even.
///
/// Intermediate values (draws, risk amounts, derived statistics) are rounded
/// as they are produced rather than only at presentation time, so small
/// differences compound over long runs exactly like the historical reports.
#[must_use]
pub fn round_dp2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(REPORT_DP, RoundingStrategy::MidpointNearestEven)
}

/// Returns `value * percent / 100`, or `None` on overflow.
#[must_use]
pub fn percent_of(value: Decimal, percent: Decimal) -> Option<Decimal> {
    value
        .checked_mul(percent)
        .and_then(|v| v.checked_div(Decimal::ONE_HUNDRED))
}
