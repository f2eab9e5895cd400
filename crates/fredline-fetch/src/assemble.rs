//! Order-preserving reassembly of per-window results.

use fredline_types::Window;

use crate::{SeriesFetchError, orchestrate::WindowResult};

/// Reassembles per-window results into the final chronological sequence.
///
/// Slots are scanned in index order, so when several windows failed the
/// reported error is always the one with the lowest index, regardless of
/// which window failed first in wall-clock time.
///
/// # Errors
///
/// Returns [`SeriesFetchError::Window`] for the lowest-index terminal
/// failure, or [`SeriesFetchError::Incomplete`] if a slot was never filled
/// (an orchestrator invariant violation).
pub fn assemble<P>(
    windows: &[Window],
    results: Vec<Option<WindowResult<P>>>,
) -> Result<Vec<P>, SeriesFetchError> {
    let mut payloads = Vec::with_capacity(windows.len());
    let mut slots = results.into_iter();

    for window in windows {
        match slots.next().flatten() {
            Some(Ok(payload)) => payloads.push(payload),
            Some(Err(source)) => {
                return Err(SeriesFetchError::Window {
                    index: window.index,
                    range: window.range,
                    source,
                });
            }
            None => {
                return Err(SeriesFetchError::Incomplete {
                    index: window.index,
                });
            }
        }
    }

    Ok(payloads)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FetchError, WindowError};
    use chrono::NaiveDate;
    use fredline_types::{DateRange, WindowPolicy};

    fn windows(count: u32) -> Vec<Window> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let end = start + chrono::Months::new(count) - chrono::Days::new(1);
        WindowPolicy::CalendarMonth.windows(DateRange::new(start, end).unwrap())
    }

    fn exhausted() -> WindowError {
        WindowError::Exhausted {
            attempts: 3,
            last: FetchError::transient("timeout"),
        }
    }

    #[test]
    fn test_all_successes_assemble_in_order() {
        let windows = windows(4);
        let results = (0..4).map(|i| Some(Ok(i * 10))).collect();

        assert_eq!(assemble(&windows, results).unwrap(), vec![0, 10, 20, 30]);
    }

    #[test]
    fn test_lowest_failing_index_wins() {
        let windows = windows(10);
        let results = (0..10)
            .map(|i| {
                if i == 2 || i == 5 {
                    Some(Err(exhausted()))
                } else {
                    Some(Ok(i))
                }
            })
            .collect();

        match assemble(&windows, results) {
            Err(SeriesFetchError::Window { index, range, .. }) => {
                assert_eq!(index, 2);
                assert_eq!(range, windows[2].range);
            }
            other => panic!("expected window error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_slot_is_incomplete() {
        let windows = windows(3);
        let results = vec![Some(Ok(0)), None, Some(Ok(2))];

        assert_eq!(
            assemble(&windows, results).unwrap_err(),
            SeriesFetchError::Incomplete { index: 1 }
        );
    }

    #[test]
    fn test_short_results_vec_is_incomplete() {
        let windows = windows(3);
        let results = vec![Some(Ok(0))];

        assert_eq!(
            assemble(&windows, results).unwrap_err(),
            SeriesFetchError::Incomplete { index: 1 }
        );
    }

    #[test]
    fn test_error_beats_later_missing_slot() {
        let windows = windows(3);
        let results = vec![Some(Ok(0)), Some(Err(exhausted())), None];

        assert!(matches!(
            assemble(&windows, results),
            Err(SeriesFetchError::Window { index: 1, .. })
        ));
    }
}
