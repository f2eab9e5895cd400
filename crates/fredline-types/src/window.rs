//! Chunking of a date range into per-request windows.
//!
//! Remote observation APIs cap how much data a single request may cover, so
//! a long range is split into bounded windows that are fetched separately
//! and reassembled in window order. The window order produced here is the
//! ordering contract the rest of the pipeline relies on.

use chrono::{Datelike, Days, Months, NaiveDate};

use crate::DateRange;

/// A sub-range of the overall request, tagged with its chronological position.
///
/// Windows produced by one chunking call are contiguous and non-overlapping:
/// window `i + 1` starts on the day after window `i` ends, the first window
/// starts on the range start, and the last window ends on the range end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    /// Position of this window in chronological order (0-based).
    pub index: usize,
    /// The dates this window covers (inclusive).
    pub range: DateRange,
}

/// Strategy for splitting a [`DateRange`] into request-sized windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowPolicy {
    /// One window per calendar month, clipped to the range boundaries.
    #[default]
    CalendarMonth,
    /// Fixed-size windows of at most the given number of days.
    ///
    /// A value of 0 is treated as 1.
    FixedDays(u32),
}

impl WindowPolicy {
    /// Splits the range into ordered windows.
    #[must_use]
    pub fn windows(&self, range: DateRange) -> Vec<Window> {
        self.iter(range).collect()
    }

    /// Returns an iterator over the windows of the range.
    #[must_use]
    pub const fn iter(&self, range: DateRange) -> WindowIter {
        WindowIter::new(*self, range)
    }

    /// Returns the number of windows this policy produces for the range.
    #[must_use]
    pub fn window_count(&self, range: DateRange) -> usize {
        match self {
            Self::CalendarMonth => range.month_span(),
            Self::FixedDays(days) => {
                let step = (*days).max(1) as usize;
                range.total_days().div_ceil(step)
            }
        }
    }
}

/// Returns the last day of the month containing `date`.
fn month_end(date: NaiveDate) -> NaiveDate {
    let first = date.with_day(1).expect("day 1 is valid in every month");
    first + Months::new(1) - Days::new(1)
}

/// Iterator over the windows of a date range.
#[derive(Debug, Clone)]
pub struct WindowIter {
    policy: WindowPolicy,
    range: DateRange,
    /// Start of the next window, or None when exhausted.
    cursor: Option<NaiveDate>,
    next_index: usize,
}

impl WindowIter {
    const fn new(policy: WindowPolicy, range: DateRange) -> Self {
        Self {
            policy,
            range,
            cursor: Some(range.start),
            next_index: 0,
        }
    }
}

impl Iterator for WindowIter {
    type Item = Window;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.cursor?;

        let natural_end = match self.policy {
            WindowPolicy::CalendarMonth => month_end(start),
            WindowPolicy::FixedDays(days) => start + Days::new(u64::from(days.max(1)) - 1),
        };
        let end = natural_end.min(self.range.end);

        self.cursor = if end < self.range.end {
            Some(end + Days::new(1))
        } else {
            None
        };

        let window = Window {
            index: self.next_index,
            range: DateRange { start, end },
        };
        self.next_index += 1;
        Some(window)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.cursor {
            Some(start) => self.policy.window_count(DateRange {
                start,
                end: self.range.end,
            }),
            None => 0,
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for WindowIter {}
