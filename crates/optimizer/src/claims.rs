//! Bookkeeping of calendar days already taken by an accepted span.

use bridgeday_calendar::CalendarDate;

/// Set of claimed inclusive date intervals.
///
/// Accepted spans never overlap, so a plain list with a linear overlap
/// check is enough for a year's worth of periods.
#[derive(Debug, Clone, Default)]
pub(crate) struct Claims {
    spans: Vec<(CalendarDate, CalendarDate)>,
}

impl Claims {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if any day of `start..=end` is already claimed.
    pub(crate) fn overlaps(&self, start: CalendarDate, end: CalendarDate) -> bool {
        self.spans.iter().any(|&(s, e)| start <= e && s <= end)
    }

    /// Claims `start..=end` if it is entirely unclaimed.
    ///
    /// Returns whether the claim succeeded.
    pub(crate) fn try_claim(&mut self, start: CalendarDate, end: CalendarDate) -> bool {
        if self.overlaps(start, end) {
            return false;
        }
        self.spans.push((start, end));
        true
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.spans.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> CalendarDate {
        s.parse().unwrap()
    }

    #[test]
    fn disjoint_spans_are_accepted() {
        let mut claims = Claims::new();
        assert!(claims.try_claim(date("2025-12-20"), date("2025-12-24")));
        assert!(claims.try_claim(date("2025-12-25"), date("2025-12-28")));
        assert_eq!(claims.len(), 2);
    }

    #[test]
    fn shared_boundary_day_conflicts() {
        let mut claims = Claims::new();
        assert!(claims.try_claim(date("2025-12-20"), date("2025-12-25")));
        assert!(!claims.try_claim(date("2025-12-25"), date("2025-12-28")));
        assert!(claims.overlaps(date("2025-12-01"), date("2025-12-20")));
        assert_eq!(claims.len(), 1);
    }

    #[test]
    fn enclosing_span_conflicts() {
        let mut claims = Claims::new();
        assert!(claims.try_claim(date("2025-07-04"), date("2025-07-06")));
        assert!(claims.overlaps(date("2025-06-28"), date("2025-07-13")));
        assert!(!claims.overlaps(date("2025-07-07"), date("2025-07-13")));
    }
}
