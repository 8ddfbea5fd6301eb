// Forecast service - Use case for loading forecast series
use crate::application::forecast_repository::{ForecastError, ForecastRepository};
use crate::domain::forecast::{ForecastKind, ForecastSeries};
use futures::future::try_join;
use std::sync::Arc;

#[derive(Clone)]
pub struct ForecastService {
    repository: Arc<dyn ForecastRepository>,
}

impl ForecastService {
    pub fn new(repository: Arc<dyn ForecastRepository>) -> Self {
        Self { repository }
    }

    /// Load one forecast kind. The returned series is sorted ascending by
    /// timestamp; callers never re-sort.
    pub async fn load(&self, kind: ForecastKind) -> Result<ForecastSeries, ForecastError> {
        let samples = self.repository.fetch(kind).await?;
        Ok(ForecastSeries::from_samples(samples))
    }

    /// Load daily and hourly concurrently. Either both series are
    /// returned or the first failure is surfaced.
    pub async fn refresh(&self) -> Result<(ForecastSeries, ForecastSeries), ForecastError> {
        try_join(
            self.load(ForecastKind::Daily),
            self.load(ForecastKind::Hourly),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::forecast::{ForecastSample, WeatherCondition};
    use crate::infrastructure::fixture_repository::FixtureForecastRepository;
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};

    struct CannedRepository {
        samples: Vec<ForecastSample>,
        fail_hourly: bool,
    }

    #[async_trait]
    impl ForecastRepository for CannedRepository {
        async fn fetch(&self, kind: ForecastKind) -> Result<Vec<ForecastSample>, ForecastError> {
            if self.fail_hourly && kind == ForecastKind::Hourly {
                return Err(ForecastError::Server(503));
            }
            Ok(self.samples.clone())
        }
    }

    fn sample(hour: u32, temperature: i32) -> ForecastSample {
        ForecastSample {
            timestamp: Utc.with_ymd_and_hms(2024, 6, 23, hour, 0, 0).unwrap(),
            temperature,
            real_feel: temperature,
            uv_index: 2,
            chance_of_rain: 30,
            wind_speed: 14,
            condition: WeatherCondition::Rainy,
        }
    }

    #[tokio::test]
    async fn test_load_sorts_wire_order() {
        let repository = Arc::new(CannedRepository {
            samples: vec![sample(12, 30), sample(9, 18), sample(10, 22)],
            fail_hourly: false,
        });
        let service = ForecastService::new(repository);

        let series = service.load(ForecastKind::Hourly).await.unwrap();
        let temperatures: Vec<i32> = series.temperatures().collect();
        assert_eq!(temperatures, vec![18, 22, 30]);
    }

    #[tokio::test]
    async fn test_refresh_returns_both_kinds() {
        let repository = Arc::new(CannedRepository {
            samples: vec![sample(9, 18), sample(10, 22)],
            fail_hourly: false,
        });
        let service = ForecastService::new(repository);

        let (daily, hourly) = service.refresh().await.unwrap();
        assert_eq!(daily.len(), 2);
        assert_eq!(hourly.len(), 2);
    }

    #[tokio::test]
    async fn test_refresh_surfaces_single_failure() {
        let repository = Arc::new(CannedRepository {
            samples: vec![sample(9, 18)],
            fail_hourly: true,
        });
        let service = ForecastService::new(repository);

        let error = service.refresh().await.unwrap_err();
        assert!(matches!(error, ForecastError::Server(503)));
    }

    #[tokio::test]
    async fn test_daily_fixture_load_equals_manual_sort_of_wire_order() {
        let repository = Arc::new(FixtureForecastRepository::new());
        let raw = repository.fetch(ForecastKind::Daily).await.unwrap();
        let service = ForecastService::new(repository);

        let series = service.load(ForecastKind::Daily).await.unwrap();
        assert_eq!(series.len(), 7);

        let mut expected = raw;
        expected.sort_by_key(|sample| sample.timestamp);
        assert_eq!(series.samples(), expected.as_slice());
    }

    #[tokio::test]
    async fn test_hourly_fixture_is_sorted_on_load() {
        let service = ForecastService::new(Arc::new(FixtureForecastRepository::new()));

        let series = service.load(ForecastKind::Hourly).await.unwrap();
        assert_eq!(series.len(), 24);
        for pair in series.samples().windows(2) {
            assert!(pair[0].timestamp < pair[1].timestamp);
        }
        // wire order is newest-first, so sorting must have reordered it
        assert_eq!(series.samples()[23].temperature, 17);
    }
}
