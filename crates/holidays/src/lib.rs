//! # bridgeday-holidays
//!
//! Public holiday calendars for a handful of countries.
//!
//! Each region is a static list of named [rules](rules) (fixed dates, n-th
//! weekday of a month, offsets from Easter Sunday) that is resolved against a
//! year on demand. Substitute days for holidays falling on a weekend are not
//! generated.
//!
//! ## Quick Start
//!
//! ```
//! use bridgeday_holidays::{Region, holidays_for_region};
//!
//! let holidays = holidays_for_region(Region::UnitedStates, 2025).unwrap();
//! assert_eq!(holidays.len(), 11);
//! assert_eq!(holidays[0].name, "New Year's Day");
//! ```
//!
//! | Code | Region |
//! |------|--------|
//! | `US` | United States (federal) |
//! | `DE` | Germany (nationwide) |
//! | `UK` | United Kingdom (England and Wales bank holidays) |
//! | `CA` | Canada (federal) |
//! | `AU` | Australia (national) |
//! | `FR` | France |

mod error;
mod holiday;
mod region;
pub mod rules;

use tracing::debug;

pub use error::HolidayError;
pub use holiday::{Holiday, HolidayCategory};
pub use region::Region;

/// Returns the public holidays of `region` in `year`, sorted by date.
///
/// Every returned date lies inside `year`.
///
/// # Errors
///
/// Returns [`HolidayError::Calendar`] if `year` is outside 1..=9999.
pub fn holidays_for_region(region: Region, year: i32) -> Result<Vec<Holiday>, HolidayError> {
    let mut holidays = region
        .rules()
        .iter()
        .map(|&(name, rule)| Ok(Holiday::federal(rule.resolve(year)?, name)))
        .collect::<Result<Vec<_>, HolidayError>>()?;
    holidays.sort_by_key(|h| h.date);
    debug!(
        region = %region,
        year,
        n = holidays.len(),
        "resolved holidays"
    );
    Ok(holidays)
}

/// Looks up a region by its code and returns its holidays in `year`.
///
/// # Errors
///
/// Returns [`HolidayError::UnknownRegion`] for an unsupported code, or
/// [`HolidayError::Calendar`] for an invalid year.
pub fn holidays_for_code(code: &str, year: i32) -> Result<Vec<Holiday>, HolidayError> {
    holidays_for_region(code.parse()?, year)
}
