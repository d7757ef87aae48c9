//! Error types for the bridgeday-calendar crate.

/// Error type for all fallible operations in the bridgeday-calendar crate.
///
/// This enum covers validation failures for years, months, days-within-month
/// and day-of-year values in the proleptic Gregorian calendar, plus ISO
/// date strings that cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum CalendarError {
    /// Returned when a year is outside the supported range 1..=9999.
    #[error("invalid year: {year} (must be 1..=9999)")]
    InvalidYear {
        /// The invalid year that was provided.
        year: i32,
    },

    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given month.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The maximum valid day for the given month.
        max_day: u8,
    },

    /// Returned when a day-of-year is outside 1..=365 (or 1..=366 in leap years).
    #[error("invalid day of year: {ordinal} for year {year}")]
    InvalidOrdinal {
        /// The invalid day-of-year value.
        ordinal: u16,
        /// The year the ordinal was interpreted in.
        year: i32,
    },

    /// Returned when a string is not a `YYYY-MM-DD` date.
    #[error("invalid ISO date: {input:?} (expected YYYY-MM-DD)")]
    Parse {
        /// The string that failed to parse.
        input: String,
    },
}
