// Repository trait for forecast data access
use crate::domain::forecast::{ForecastKind, ForecastSample};
use async_trait::async_trait;
use thiserror::Error;

/// Exactly one kind per failed fetch; a failed call never surfaces a
/// partially populated series.
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Endpoint URL failed to parse. Unreachable with the shipped
    /// configuration; kept as a programming-error assertion.
    #[error("invalid forecast endpoint url: {0}")]
    InvalidUrl(String),

    #[error("forecast request failed")]
    Network(#[source] reqwest::Error),

    #[error("forecast server answered with status {0}")]
    Server(u16),

    #[error("forecast payload did not decode")]
    Decoding(#[source] serde_json::Error),

    /// The response could not be interpreted as an HTTP exchange at all.
    #[error("forecast response was not a valid http response")]
    Unknown,
}

#[async_trait]
pub trait ForecastRepository: Send + Sync {
    /// Fetch the raw samples for one forecast kind, in wire order.
    async fn fetch(&self, kind: ForecastKind) -> Result<Vec<ForecastSample>, ForecastError>;
}
