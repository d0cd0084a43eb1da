//! Error types for parameter validation and statistic derivation.

/// Errors raised while validating parameters, running a simulation or
/// reading a derived statistic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SimulationError {
    /// A caller-supplied parameter is outside its documented range.
    #[error("Invalid parameter `{parameter}`: {reason}")]
    InvalidParameter {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// Human readable constraint that was violated.
        reason: String,
    },
    /// A ratio statistic has an empty or zero denominator group.
    #[error("Statistic `{statistic}` is undefined for this run")]
    DivisionUndefined {
        /// Name of the statistic that could not be computed.
        statistic: &'static str,
    },
    /// The compounded balance left the representable decimal range.
    #[error("Account balance overflowed at trade {trade}")]
    ArithmeticOverflow {
        /// Zero-based index of the trade that overflowed.
        trade: u32,
    },
}

impl SimulationError {
    pub(crate) fn invalid(parameter: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            parameter,
            reason: reason.into(),
        }
    }

    pub(crate) fn undefined(statistic: &'static str) -> Self {
        Self::DivisionUndefined { statistic }
    }

    /// Returns true when the error is caused by bad input rather than a
    /// degenerate but valid run.
    #[must_use]
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }
}
