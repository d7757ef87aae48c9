//! Error types for the bridgeday-holidays crate.

use bridgeday_calendar::CalendarError;

/// Error type for all fallible operations in the bridgeday-holidays crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HolidayError {
    /// Returned when a region code does not name a supported region.
    #[error("unknown region code: {code:?} (supported: {supported})")]
    UnknownRegion {
        /// The code that was looked up.
        code: String,
        /// Comma-separated list of supported codes.
        supported: String,
    },

    /// Returned when a holiday rule cannot be resolved for the requested year.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}
