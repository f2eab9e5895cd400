//! Observation payloads as returned by the FRED observations endpoint.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// A single observation in a data series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Observation date.
    pub date: NaiveDate,
    /// Observation value.
    ///
    /// FRED encodes values as strings and uses `"."` for dates with no
    /// value (holidays, weekends for daily series); those deserialize to
    /// `None`.
    #[serde(deserialize_with = "deserialize_value")]
    pub value: Option<f64>,
}

impl Observation {
    /// Creates a new observation.
    #[must_use]
    pub const fn new(date: NaiveDate, value: Option<f64>) -> Self {
        Self { date, value }
    }

    /// Returns true if the observation carries no value.
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        self.value.is_none()
    }
}

/// Decodes FRED's stringly-typed observation value, mapping `"."` to `None`.
fn deserialize_value<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if raw == "." {
        return Ok(None);
    }
    raw.parse::<f64>().map(Some).map_err(serde::de::Error::custom)
}

/// One window's worth of decoded observations.
///
/// This is the per-window payload produced by the FRED transport; the
/// fetch pipeline itself treats payloads as opaque.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationsPage {
    /// Total observation count echoed by the API.
    #[serde(default)]
    pub count: u64,
    /// The observations, in the API's chronological order.
    #[serde(default)]
    pub observations: Vec<Observation>,
}

impl ObservationsPage {
    /// Returns the number of observations in this page.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.observations.len()
    }

    /// Returns true if the page holds no observations.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }
}
