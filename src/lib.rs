// Weatherwise core - forecast loading and temperature curve layout
pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::curve_layout;
pub use application::forecast_repository::{ForecastError, ForecastRepository};
pub use application::forecast_service::ForecastService;
pub use application::weather_store::{WeatherSnapshot, WeatherStore};
pub use domain::forecast::{ForecastKind, ForecastSample, ForecastSeries, WeatherCondition};
pub use domain::geometry::{CurveLayout, CurvePath, PathSegment, Point, Size};
