// Embedded fixture repository for offline preview and tests
use crate::application::forecast_repository::{ForecastError, ForecastRepository};
use crate::domain::forecast::{ForecastKind, ForecastSample};
use async_trait::async_trait;

const DAILY_FIXTURE: &str = include_str!("../../fixtures/daily.json");
const HOURLY_FIXTURE: &str = include_str!("../../fixtures/hourly.json");

/// Serves the embedded fixture payloads instead of the network, so
/// preview and test runs are deterministic and offline.
#[derive(Debug, Clone, Default)]
pub struct FixtureForecastRepository;

impl FixtureForecastRepository {
    pub fn new() -> Self {
        Self
    }

    fn payload(kind: ForecastKind) -> &'static str {
        match kind {
            ForecastKind::Daily => DAILY_FIXTURE,
            ForecastKind::Hourly => HOURLY_FIXTURE,
        }
    }
}

#[async_trait]
impl ForecastRepository for FixtureForecastRepository {
    async fn fetch(&self, kind: ForecastKind) -> Result<Vec<ForecastSample>, ForecastError> {
        serde_json::from_str(Self::payload(kind)).map_err(ForecastError::Decoding)
    }
}
