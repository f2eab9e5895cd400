//! Shared helpers for fredline benchmarks.

use fredline_types::{DateRange, Observation, ObservationsPage};

/// Builds a synthetic observations page for a window, one observation per
/// day, so benchmarks exercise the pipeline without touching the network.
#[must_use]
pub fn synthetic_page(range: DateRange) -> ObservationsPage {
    let observations: Vec<Observation> = range
        .start
        .iter_days()
        .take(range.total_days())
        .map(|date| {
            let value = f64::from(u32::try_from((date - range.start).num_days()).unwrap_or(0));
            Observation::new(date, Some(value))
        })
        .collect();

    ObservationsPage {
        count: observations.len() as u64,
        observations,
    }
}
