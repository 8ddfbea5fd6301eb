// Weather store - snapshot state container for the display layer
use crate::application::forecast_repository::ForecastError;
use crate::application::forecast_service::ForecastService;
use crate::domain::forecast::ForecastSeries;
use std::sync::Arc;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

/// Immutable view of the latest successfully loaded forecasts.
#[derive(Debug, Clone, Default)]
pub struct WeatherSnapshot {
    pub daily: ForecastSeries,
    pub hourly: ForecastSeries,
}

/// Holds the current snapshot and publishes replacements. Readers keep
/// whatever snapshot they already borrowed; a refresh swaps in a fresh
/// one atomically. Concurrent refreshes are last-writer-wins.
pub struct WeatherStore {
    sender: watch::Sender<Arc<WeatherSnapshot>>,
}

impl WeatherStore {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(Arc::new(WeatherSnapshot::default()));
        Self { sender }
    }

    /// The latest published snapshot.
    pub fn snapshot(&self) -> Arc<WeatherSnapshot> {
        self.sender.borrow().clone()
    }

    /// Fetch both forecast kinds and publish the result. A failed refresh
    /// leaves the previous snapshot in place.
    pub async fn refresh(
        &self,
        service: &ForecastService,
    ) -> Result<Arc<WeatherSnapshot>, ForecastError> {
        let (daily, hourly) = service.refresh().await?;
        let snapshot = Arc::new(WeatherSnapshot { daily, hourly });
        self.sender.send_replace(snapshot.clone());
        Ok(snapshot)
    }

    /// Subscribe to snapshot replacements.
    pub fn subscribe(&self) -> watch::Receiver<Arc<WeatherSnapshot>> {
        self.sender.subscribe()
    }

    /// Snapshot replacements as a stream, for consumers that prefer one.
    pub fn updates(&self) -> WatchStream<Arc<WeatherSnapshot>> {
        WatchStream::new(self.sender.subscribe())
    }
}

impl Default for WeatherStore {
    fn default() -> Self {
        Self::new()
    }
}
