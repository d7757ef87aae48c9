//! Holiday records handed to the optimizer.

use std::fmt;

use bridgeday_calendar::CalendarDate;
use serde::{Deserialize, Serialize};

/// Legal standing of a holiday.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HolidayCategory {
    /// Nationwide public holiday.
    #[default]
    Federal,
    /// Holiday observed only in some states or provinces.
    State,
    /// Substitute or company-observed closure day.
    Observed,
}

impl fmt::Display for HolidayCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HolidayCategory::Federal => "federal",
            HolidayCategory::State => "state",
            HolidayCategory::Observed => "observed",
        })
    }
}

/// A named non-working day.
///
/// The optimizer only looks at `date` and `name`; `category` is carried
/// through for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    pub date: CalendarDate,
    pub name: String,
    #[serde(default)]
    pub category: HolidayCategory,
}

impl Holiday {
    /// Creates a new holiday.
    pub fn new(date: CalendarDate, name: impl Into<String>, category: HolidayCategory) -> Self {
        Self {
            date,
            name: name.into(),
            category,
        }
    }

    /// Creates a nationwide holiday.
    pub fn federal(date: CalendarDate, name: impl Into<String>) -> Self {
        Self::new(date, name, HolidayCategory::Federal)
    }
}
