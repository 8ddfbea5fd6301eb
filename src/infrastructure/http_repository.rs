// HTTP forecast repository backed by the remote weather endpoints
use crate::application::forecast_repository::{ForecastError, ForecastRepository};
use crate::domain::forecast::{ForecastKind, ForecastSample};
use crate::infrastructure::config::ForecastEndpoints;
use async_trait::async_trait;

pub struct HttpForecastRepository {
    client: reqwest::Client,
    endpoints: ForecastEndpoints,
}

impl HttpForecastRepository {
    pub fn new(endpoints: ForecastEndpoints) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoints,
        }
    }

    fn endpoint(&self, kind: ForecastKind) -> &str {
        match kind {
            ForecastKind::Daily => &self.endpoints.daily_url,
            ForecastKind::Hourly => &self.endpoints.hourly_url,
        }
    }
}

#[async_trait]
impl ForecastRepository for HttpForecastRepository {
    async fn fetch(&self, kind: ForecastKind) -> Result<Vec<ForecastSample>, ForecastError> {
        let raw_url = self.endpoint(kind);
        let url = reqwest::Url::parse(raw_url)
            .map_err(|_| ForecastError::InvalidUrl(raw_url.to_string()))?;

        tracing::debug!("fetching {} forecast from {}", kind.as_str(), url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(ForecastError::Network)?;

        let status = response.status().as_u16();
        if status != 200 {
            return Err(ForecastError::Server(status));
        }

        let body = response.bytes().await.map_err(ForecastError::Network)?;
        let samples: Vec<ForecastSample> =
            serde_json::from_slice(&body).map_err(ForecastError::Decoding)?;

        tracing::debug!("decoded {} {} samples", samples.len(), kind.as_str());
        Ok(samples)
    }
}
