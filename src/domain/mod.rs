// Domain layer - Forecast and geometry models
pub mod forecast;
pub mod geometry;
