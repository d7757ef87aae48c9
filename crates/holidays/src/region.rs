//! Supported regions and their holiday rule sets.

use std::fmt;
use std::str::FromStr;

use bridgeday_calendar::Weekday::{Monday, Thursday};
use serde::Serialize;

use crate::error::HolidayError;
use crate::rules::{Rule, easter, fixed, last, nth, on_or_before};

/// A country whose public holidays are known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Region {
    UnitedStates,
    Germany,
    UnitedKingdom,
    Canada,
    Australia,
    France,
}

impl Region {
    /// All supported regions.
    pub const ALL: [Region; 6] = [
        Region::UnitedStates,
        Region::Germany,
        Region::UnitedKingdom,
        Region::Canada,
        Region::Australia,
        Region::France,
    ];

    /// Returns the two-letter region code.
    pub fn code(self) -> &'static str {
        match self {
            Region::UnitedStates => "US",
            Region::Germany => "DE",
            Region::UnitedKingdom => "UK",
            Region::Canada => "CA",
            Region::Australia => "AU",
            Region::France => "FR",
        }
    }

    /// Returns the English country name.
    pub fn name(self) -> &'static str {
        match self {
            Region::UnitedStates => "United States",
            Region::Germany => "Germany",
            Region::UnitedKingdom => "United Kingdom",
            Region::Canada => "Canada",
            Region::Australia => "Australia",
            Region::France => "France",
        }
    }

    pub(crate) fn rules(self) -> &'static [(&'static str, Rule)] {
        match self {
            Region::UnitedStates => US,
            Region::Germany => DE,
            Region::UnitedKingdom => UK,
            Region::Canada => CA,
            Region::Australia => AU,
            Region::France => FR,
        }
    }

    fn supported_codes() -> String {
        Self::ALL
            .iter()
            .map(|r| r.code())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Region {
    type Err = HolidayError;

    /// Parses a region code case-insensitively. `GB` is accepted for the
    /// United Kingdom.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_uppercase();
        if code == "GB" {
            return Ok(Region::UnitedKingdom);
        }
        Self::ALL
            .into_iter()
            .find(|r| r.code() == code)
            .ok_or_else(|| HolidayError::UnknownRegion {
                code: s.to_string(),
                supported: Self::supported_codes(),
            })
    }
}

const US: &[(&str, Rule)] = &[
    ("New Year's Day", fixed(1, 1)),
    ("Martin Luther King Jr. Day", nth(1, Monday, 3)),
    ("Presidents' Day", nth(2, Monday, 3)),
    ("Memorial Day", last(5, Monday)),
    ("Juneteenth", fixed(6, 19)),
    ("Independence Day", fixed(7, 4)),
    ("Labor Day", nth(9, Monday, 1)),
    ("Columbus Day", nth(10, Monday, 2)),
    ("Veterans Day", fixed(11, 11)),
    ("Thanksgiving", nth(11, Thursday, 4)),
    ("Christmas Day", fixed(12, 25)),
];

const DE: &[(&str, Rule)] = &[
    ("Neujahrstag", fixed(1, 1)),
    ("Karfreitag", easter(-2)),
    ("Ostermontag", easter(1)),
    ("Tag der Arbeit", fixed(5, 1)),
    ("Christi Himmelfahrt", easter(39)),
    ("Pfingstmontag", easter(50)),
    ("Tag der Deutschen Einheit", fixed(10, 3)),
    ("1. Weihnachtstag", fixed(12, 25)),
    ("2. Weihnachtstag", fixed(12, 26)),
];

const UK: &[(&str, Rule)] = &[
    ("New Year's Day", fixed(1, 1)),
    ("Good Friday", easter(-2)),
    ("Easter Monday", easter(1)),
    ("Early May Bank Holiday", nth(5, Monday, 1)),
    ("Spring Bank Holiday", last(5, Monday)),
    ("Summer Bank Holiday", last(8, Monday)),
    ("Christmas Day", fixed(12, 25)),
    ("Boxing Day", fixed(12, 26)),
];

const CA: &[(&str, Rule)] = &[
    ("New Year's Day", fixed(1, 1)),
    ("Good Friday", easter(-2)),
    ("Victoria Day", on_or_before(5, 24, Monday)),
    ("Canada Day", fixed(7, 1)),
    ("Labour Day", nth(9, Monday, 1)),
    ("National Day for Truth and Reconciliation", fixed(9, 30)),
    ("Thanksgiving", nth(10, Monday, 2)),
    ("Remembrance Day", fixed(11, 11)),
    ("Christmas Day", fixed(12, 25)),
    ("Boxing Day", fixed(12, 26)),
];

const AU: &[(&str, Rule)] = &[
    ("New Year's Day", fixed(1, 1)),
    ("Australia Day", fixed(1, 26)),
    ("Good Friday", easter(-2)),
    ("Easter Saturday", easter(-1)),
    ("Easter Monday", easter(1)),
    ("Anzac Day", fixed(4, 25)),
    // Listed as "Queen's Birthday" up to 2022.
    ("King's Birthday", nth(6, Monday, 2)),
    ("Christmas Day", fixed(12, 25)),
    ("Boxing Day", fixed(12, 26)),
];

const FR: &[(&str, Rule)] = &[
    ("Jour de l'an", fixed(1, 1)),
    ("Lundi de Pâques", easter(1)),
    ("Fête du Travail", fixed(5, 1)),
    ("Victoire 1945", fixed(5, 8)),
    ("Ascension", easter(39)),
    ("Lundi de Pentecôte", easter(50)),
    ("Fête Nationale", fixed(7, 14)),
    ("Assomption", fixed(8, 15)),
    ("Toussaint", fixed(11, 1)),
    ("Armistice", fixed(11, 11)),
    ("Noël", fixed(12, 25)),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_codes() {
        assert_eq!("US".parse::<Region>().unwrap(), Region::UnitedStates);
        assert_eq!("de".parse::<Region>().unwrap(), Region::Germany);
        assert_eq!(" uk ".parse::<Region>().unwrap(), Region::UnitedKingdom);
        assert_eq!("GB".parse::<Region>().unwrap(), Region::UnitedKingdom);
    }

    #[test]
    fn parse_unknown() {
        let err = "XX".parse::<Region>().unwrap_err();
        assert_eq!(
            err,
            HolidayError::UnknownRegion {
                code: "XX".to_string(),
                supported: "US, DE, UK, CA, AU, FR".to_string(),
            }
        );
    }

    #[test]
    fn code_roundtrip() {
        for region in Region::ALL {
            assert_eq!(region.code().parse::<Region>().unwrap(), region);
            assert_eq!(region.to_string(), region.code());
        }
    }

    #[test]
    fn every_region_has_rules() {
        for region in Region::ALL {
            assert!(!region.rules().is_empty(), "{region} has no rules");
        }
    }
}
