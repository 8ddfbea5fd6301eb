// Main entry point - Dependency injection and a one-shot refresh
use std::sync::Arc;

use weatherwise::application::curve_layout;
use weatherwise::application::forecast_repository::ForecastRepository;
use weatherwise::application::forecast_service::ForecastService;
use weatherwise::application::weather_store::WeatherStore;
use weatherwise::domain::geometry::Size;
use weatherwise::infrastructure::config::load_app_config;
use weatherwise::infrastructure::fixture_repository::FixtureForecastRepository;
use weatherwise::infrastructure::http_repository::HttpForecastRepository;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = load_app_config()?;

    // Create repository (infrastructure layer)
    let repository: Arc<dyn ForecastRepository> = if config.runtime.offline {
        tracing::info!("offline mode: serving embedded fixtures");
        Arc::new(FixtureForecastRepository::new())
    } else {
        Arc::new(HttpForecastRepository::new(config.forecast.clone()))
    };

    // Create service and store (application layer)
    let service = ForecastService::new(repository);
    let store = WeatherStore::new();

    let snapshot = store.refresh(&service).await?;
    tracing::info!(
        "loaded {} daily and {} hourly samples",
        snapshot.daily.len(),
        snapshot.hourly.len()
    );

    // Lay the hourly curve out for a nominal drawing area, the way the
    // display layer would after its measure pass.
    let area = Size::new(800.0, 50.0);
    let layout = curve_layout::layout(&snapshot.hourly, area, curve_layout::DEFAULT_POINT_SPACING);
    let path = curve_layout::interpolate_curve(&layout.points, area);

    println!(
        "hourly curve: {} points, {} path segments across {}x{}",
        layout.points.len(),
        path.segments.len(),
        area.width,
        area.height
    );

    Ok(())
}
