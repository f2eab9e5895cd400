//! Date range for series requests.

use chrono::{Datelike, NaiveDate};

use crate::DateRangeError;

/// An inclusive range of dates for observation retrieval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// Start date (inclusive).
    pub start: NaiveDate,
    /// End date (inclusive).
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a new date range, validating that start <= end.
    ///
    /// # Errors
    ///
    /// Returns an error if start > end.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DateRangeError> {
        if start > end {
            return Err(DateRangeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates a date range for a single day.
    #[must_use]
    pub const fn single_day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// Returns the total number of days in the range.
    #[must_use]
    pub fn total_days(&self) -> usize {
        ((self.end - self.start).num_days() + 1) as usize
    }

    /// Returns the number of calendar months the range touches (inclusive).
    ///
    /// A range contained in a single month spans 1; a range from the last
    /// day of one month to the first day of the next spans 2.
    #[must_use]
    pub fn month_span(&self) -> usize {
        let start = self.start.year() * 12 + self.start.month0() as i32;
        let end = self.end.year() * 12 + self.end.month0() as i32;
        (end - start + 1) as usize
    }

    /// Returns true if the range contains the given date.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_date_range_new() {
        let start = date(2025, 1, 1);
        let end = date(2025, 1, 31);
        let range = DateRange::new(start, end).unwrap();

        assert_eq!(range.start, start);
        assert_eq!(range.end, end);
    }

    #[test]
    fn test_date_range_invalid() {
        let start = date(2025, 1, 31);
        let end = date(2025, 1, 1);
        assert!(matches!(
            DateRange::new(start, end),
            Err(DateRangeError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_single_day() {
        let range = DateRange::single_day(date(2025, 6, 15));
        assert_eq!(range.total_days(), 1);
        assert_eq!(range.month_span(), 1);
    }

    #[test]
    fn test_month_span_same_month() {
        let range = DateRange::new(date(2025, 3, 5), date(2025, 3, 28)).unwrap();
        assert_eq!(range.month_span(), 1);
    }

    #[test]
    fn test_month_span_adjacent_days() {
        // Jan 31 -> Feb 1 touches two months despite being two days.
        let range = DateRange::new(date(2025, 1, 31), date(2025, 2, 1)).unwrap();
        assert_eq!(range.month_span(), 2);
        assert_eq!(range.total_days(), 2);
    }

    #[test]
    fn test_month_span_across_years() {
        let range = DateRange::new(date(2024, 11, 15), date(2025, 2, 10)).unwrap();
        assert_eq!(range.month_span(), 4);
    }

    #[test]
    fn test_contains() {
        let range = DateRange::new(date(2025, 1, 1), date(2025, 3, 31)).unwrap();
        assert!(range.contains(date(2025, 2, 14)));
        assert!(range.contains(date(2025, 1, 1)));
        assert!(range.contains(date(2025, 3, 31)));
        assert!(!range.contains(date(2025, 4, 1)));
    }
}
