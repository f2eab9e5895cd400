//! FRED API URL construction.

use fredline_types::{DateRange, Series};

/// Base URL for the FRED API.
pub const BASE_URL: &str = "https://api.stlouisfed.org/fred";

/// Builds the observations URL for one window of a series.
///
/// Format: `{base}/series/observations?series_id=..&frequency=..`
/// `&observation_start=YYYY-MM-DD&observation_end=YYYY-MM-DD&file_type=json`
///
/// The API key is appended by the client at send time and never appears in
/// the URL returned here, so the URL is safe to log.
///
/// # Example
///
/// ```
/// use fredline_fetch::url::{BASE_URL, observations_url};
/// use fredline_types::{DateRange, Series};
/// use chrono::NaiveDate;
///
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
/// ).unwrap();
/// let url = observations_url(BASE_URL, &Series::new("sp500"), range);
/// assert_eq!(
///     url,
///     "https://api.stlouisfed.org/fred/series/observations?series_id=SP500&frequency=d\
///      &observation_start=2025-01-01&observation_end=2025-01-31&file_type=json"
/// );
/// ```
#[must_use]
pub fn observations_url(base: &str, series: &Series, range: DateRange) -> String {
    format!(
        "{}/series/observations?series_id={}&frequency={}&observation_start={}&observation_end={}&file_type=json",
        base.trim_end_matches('/'),
        series.id().to_uppercase(),
        series.frequency(),
        range.start.format("%Y-%m-%d"),
        range.end.format("%Y-%m-%d"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use fredline_types::Frequency;

    fn range(start: (i32, u32, u32), end: (i32, u32, u32)) -> DateRange {
        DateRange::new(
            NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
            NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_observations_url() {
        let url = observations_url(
            BASE_URL,
            &Series::new("SP500"),
            range((2025, 1, 1), (2025, 1, 31)),
        );
        assert_eq!(
            url,
            "https://api.stlouisfed.org/fred/series/observations?series_id=SP500&frequency=d&observation_start=2025-01-01&observation_end=2025-01-31&file_type=json"
        );
    }

    #[test]
    fn test_observations_url_uppercases_series_id() {
        let url = observations_url(
            BASE_URL,
            &Series::new("dgs10"),
            range((2024, 6, 1), (2024, 6, 30)),
        );
        assert!(url.contains("series_id=DGS10"));
    }

    #[test]
    fn test_observations_url_frequency_and_trailing_slash() {
        let series = Series::new("UNRATE").with_frequency(Frequency::Monthly);
        let url = observations_url(
            "https://api.stlouisfed.org/fred/",
            &series,
            range((2024, 1, 1), (2024, 12, 31)),
        );
        assert!(url.contains("frequency=m"));
        assert!(!url.contains("//series"));
    }
}
