use crate::{Config, FetchError, LocationQuery, WeatherReport, provider::openweather::OpenWeatherClient};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// A source of current conditions. One call is one request; retrying is the
/// caller's business (see [`crate::session`]).
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn get_weather(&self, query: &LocationQuery) -> Result<WeatherReport, FetchError>;
}

/// Construct the OpenWeather client from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    Ok(Box::new(OpenWeatherClient::from_config(config)?))
}
