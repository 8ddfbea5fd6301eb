// Forecast domain models
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Weather condition vocabulary. The server side may grow new values at
/// any time, so anything unrecognized decodes to `Other` instead of
/// failing the whole payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherCondition {
    Sunny,
    Rainy,
    Cloudy,
    Stormy,
    Snowy,
    Other,
}

impl WeatherCondition {
    fn from_wire(value: &str) -> Self {
        match value {
            "Sunny" => Self::Sunny,
            "Rainy" => Self::Rainy,
            "Cloudy" => Self::Cloudy,
            "Stormy" => Self::Stormy,
            "Snowy" => Self::Snowy,
            _ => Self::Other,
        }
    }
}

impl<'de> Deserialize<'de> for WeatherCondition {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from_wire(&value))
    }
}

/// One forecast data point for a specific instant.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastSample {
    #[serde(rename = "date", deserialize_with = "deserialize_wire_timestamp")]
    pub timestamp: DateTime<Utc>,
    pub temperature: i32,
    pub real_feel: i32,
    pub uv_index: i32,
    pub chance_of_rain: i32,
    pub wind_speed: i32,
    pub condition: WeatherCondition,
}

/// The wire format pins milliseconds and carries either `Z` or a numeric
/// offset; anything else is a decoding error.
fn parse_wire_timestamp(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    match raw.strip_suffix('Z') {
        Some(naive) => NaiveDateTime::parse_from_str(naive, "%Y-%m-%dT%H:%M:%S%.3f")
            .map(|parsed| parsed.and_utc()),
        None => DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.3f%z")
            .map(|parsed| parsed.with_timezone(&Utc)),
    }
}

fn deserialize_wire_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_wire_timestamp(&raw).map_err(serde::de::Error::custom)
}

/// Ordered collection of samples for one forecast kind. Always sorted
/// ascending by timestamp; callers never re-sort.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForecastSeries {
    samples: Vec<ForecastSample>,
}

impl ForecastSeries {
    pub fn from_samples(mut samples: Vec<ForecastSample>) -> Self {
        samples.sort_by_key(|sample| sample.timestamp);
        Self { samples }
    }

    pub fn samples(&self) -> &[ForecastSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn temperatures(&self) -> impl Iterator<Item = i32> + '_ {
        self.samples.iter().map(|sample| sample.temperature)
    }
}

/// Selects the forecast endpoint and fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForecastKind {
    Daily,
    Hourly,
}

impl ForecastKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Hourly => "hourly",
        }
    }
}
