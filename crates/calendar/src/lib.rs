//! # bridgeday-calendar
//!
//! Pure date arithmetic for the proleptic Gregorian calendar.
//!
//! Dates carry no time of day and no offset, so there are no timezone or
//! daylight-saving pitfalls: every operation is integer day counting.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["(year, month, day)"] -->|"CalendarDate::new()"| B["CalendarDate"]
//!     B -->|".day_number()"| C["days since 1970-01-01"]
//!     C -->|".add_days()"| B
//!     B -->|".weekday()"| D["Weekday"]
//!     B -->|"Display / FromStr"| E["YYYY-MM-DD"]
//!     F["year"] -->|"year_dates()"| G["Vec of CalendarDate"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use bridgeday_calendar::{CalendarDate, Weekday, year_dates};
//!
//! let christmas: CalendarDate = "2025-12-25".parse().unwrap();
//! assert_eq!(christmas.weekday(), Weekday::Thursday);
//! assert_eq!(christmas.add_days(3).unwrap().to_string(), "2025-12-28");
//!
//! assert_eq!(year_dates(2024).unwrap().len(), 366);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | Calendar date, ISO formatting and parsing |
//! | `gregorian` | Leap-year rules and day-number conversion |
//! | `weekday` | Day of the week |
//! | `sequence` | Date sequence generation |
//! | `error` | Error types |

mod date;
mod error;
mod gregorian;
mod sequence;
mod weekday;

pub use date::CalendarDate;
pub use error::CalendarError;
pub use gregorian::{MAX_YEAR, MIN_YEAR, days_in_month, days_in_year, is_leap_year};
pub use sequence::{date_sequence, year_dates};
pub use weekday::Weekday;
