//! Error types for the bridgeday-optimizer crate.

use bridgeday_calendar::CalendarError;

/// Error type for all fallible operations in the bridgeday-optimizer crate.
///
/// Only caller mistakes are errors. A plan that finds no worthwhile
/// opportunity is a successful, empty result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OptimizerError {
    /// Returned when the leave-day budget is negative.
    #[error("leave-day budget must be >= 0, got {budget}")]
    NegativeBudget {
        /// The invalid budget.
        budget: i64,
    },

    /// Returned when the maximum bridge length is zero.
    #[error("max_bridge_days must be >= 1, got {value}")]
    InvalidMaxBridgeDays {
        /// The invalid value.
        value: u32,
    },

    /// Returned when the maximum period length is zero.
    #[error("max_consecutive_days must be >= 1, got {value}")]
    InvalidMaxConsecutiveDays {
        /// The invalid value.
        value: u32,
    },

    /// Returned when a selection policy name is not recognised.
    #[error("unknown selection policy: {name:?} (expected efficiency, short or long)")]
    UnknownPolicy {
        /// The unrecognised name.
        name: String,
    },

    /// Returned when the target year cannot be represented.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}
