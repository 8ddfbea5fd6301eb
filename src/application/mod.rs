// Application layer - Use cases and ports
pub mod curve_layout;
pub mod forecast_repository;
pub mod forecast_service;
pub mod weather_store;
