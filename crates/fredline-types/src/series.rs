//! FRED series identity.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Observation frequency of a FRED series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    /// Daily observations.
    #[default]
    #[serde(rename = "d")]
    Daily,
    /// Weekly observations.
    #[serde(rename = "w")]
    Weekly,
    /// Biweekly observations.
    #[serde(rename = "bw")]
    Biweekly,
    /// Monthly observations.
    #[serde(rename = "m")]
    Monthly,
    /// Quarterly observations.
    #[serde(rename = "q")]
    Quarterly,
    /// Semiannual observations.
    #[serde(rename = "sa")]
    Semiannual,
    /// Annual observations.
    #[serde(rename = "a")]
    Annual,
}

impl Frequency {
    /// Returns the frequency as the API's string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "d",
            Self::Weekly => "w",
            Self::Biweekly => "bw",
            Self::Monthly => "m",
            Self::Quarterly => "q",
            Self::Semiannual => "sa",
            Self::Annual => "a",
        }
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when parsing an unknown frequency string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown frequency: {0} (expected one of d, w, bw, m, q, sa, a)")]
pub struct FrequencyParseError(pub String);

impl FromStr for Frequency {
    type Err = FrequencyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "d" | "daily" => Ok(Self::Daily),
            "w" | "weekly" => Ok(Self::Weekly),
            "bw" | "biweekly" => Ok(Self::Biweekly),
            "m" | "monthly" => Ok(Self::Monthly),
            "q" | "quarterly" => Ok(Self::Quarterly),
            "sa" | "semiannual" => Ok(Self::Semiannual),
            "a" | "annual" => Ok(Self::Annual),
            _ => Err(FrequencyParseError(s.to_string())),
        }
    }
}

/// A FRED data series to download.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Series {
    /// Series identifier (e.g. `SP500`, `DGS10`, `UNRATE`).
    id: String,
    /// Observation frequency requested from the API.
    frequency: Frequency,
}

impl Series {
    /// Creates a daily series with the given identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            frequency: Frequency::Daily,
        }
    }

    /// Sets the observation frequency.
    #[must_use]
    pub const fn with_frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = frequency;
        self
    }

    /// Returns the series identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the observation frequency.
    #[must_use]
    pub const fn frequency(&self) -> Frequency {
        self.frequency
    }
}

impl std::fmt::Display for Series {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_round_trip() {
        for freq in [
            Frequency::Daily,
            Frequency::Weekly,
            Frequency::Biweekly,
            Frequency::Monthly,
            Frequency::Quarterly,
            Frequency::Semiannual,
            Frequency::Annual,
        ] {
            assert_eq!(freq.as_str().parse::<Frequency>().unwrap(), freq);
        }
    }

    #[test]
    fn test_frequency_parse_long_form() {
        assert_eq!("daily".parse::<Frequency>().unwrap(), Frequency::Daily);
        assert_eq!("Quarterly".parse::<Frequency>().unwrap(), Frequency::Quarterly);
    }

    #[test]
    fn test_frequency_parse_unknown() {
        assert!("hourly".parse::<Frequency>().is_err());
    }

    #[test]
    fn test_series_builder() {
        let series = Series::new("SP500").with_frequency(Frequency::Weekly);
        assert_eq!(series.id(), "SP500");
        assert_eq!(series.frequency(), Frequency::Weekly);
    }
}
