// Configuration loading for endpoints and runtime mode
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub forecast: ForecastEndpoints,
    pub runtime: RuntimeSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ForecastEndpoints {
    pub daily_url: String,
    pub hourly_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RuntimeSettings {
    /// Preview/test contexts set this to skip the network and decode the
    /// embedded fixtures instead.
    #[serde(default)]
    pub offline: bool,
}

pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .set_default("forecast.daily_url", "https://test.dev.datawise.ai/daily")?
        .set_default("forecast.hourly_url", "https://test.dev.datawise.ai/hourly")?
        .set_default("runtime.offline", false)?
        .add_source(config::File::with_name("config/weatherwise").required(false))
        .add_source(
            config::Environment::with_prefix("WEATHERWISE")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}
