use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::{
    Config,
    error::{FetchError, ParseError},
    model::{LocationQuery, WeatherReport},
};

use super::WeatherProvider;

const CURRENT_WEATHER_PATH: &str = "data/2.5/weather";
const UNITS: &str = "imperial";

#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    api_key: String,
    endpoint: Url,
    http: Client,
}

impl OpenWeatherClient {
    /// `base_url` is the service root, e.g. `https://api.openweathermap.org`.
    pub fn new(base_url: &str, api_key: String) -> Result<Self> {
        Self::with_http(Client::new(), base_url, api_key)
    }

    /// Use an existing HTTP client so connections are shared with the caller.
    pub fn with_http(http: Client, base_url: &str, api_key: String) -> Result<Self> {
        let mut root = base_url.trim().to_string();
        if !root.ends_with('/') {
            root.push('/');
        }

        let endpoint = Url::parse(&root)
            .and_then(|root| root.join(CURRENT_WEATHER_PATH))
            .with_context(|| format!("Invalid weather service base URL: {base_url}"))?;

        Ok(Self { api_key, endpoint, http })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.base_url, config.api_key()?.to_owned())
    }

    /// Full current-weather URL for `query`, credentials included.
    pub fn request_url(&self, query: &LocationQuery) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("q", &query.q_param())
            .append_pair("appid", &self.api_key)
            .append_pair("units", UNITS);
        url
    }

    async fn fetch_current(&self, query: &LocationQuery) -> Result<WeatherReport, FetchError> {
        debug!(location = %query, "requesting current conditions");

        let res = self.http.get(self.request_url(query)).send().await?;

        let status = res.status();
        let body = res.text().await?;

        match status {
            StatusCode::OK => Ok(parse_weather_report(&body)?),
            StatusCode::NOT_FOUND => Err(FetchError::LocationNotFound { query: query.clone() }),
            StatusCode::UNAUTHORIZED => Err(FetchError::AuthRejected),
            status => {
                warn!(%status, body = %truncate_body(&body), "unexpected response from OpenWeather");
                Err(FetchError::ServiceRejected { status })
            }
        }
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn get_weather(&self, query: &LocationQuery) -> Result<WeatherReport, FetchError> {
        self.fetch_current(query).await
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    temp_max: f64,
    temp_min: f64,
    feels_like: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    country: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
    sys: OwSys,
}

/// Decode a 200 body from `data/2.5/weather`. Every field is required.
pub fn parse_weather_report(body: &str) -> Result<WeatherReport, ParseError> {
    let parsed: OwCurrentResponse = serde_json::from_str(body)?;

    let condition = parsed.weather.into_iter().next().ok_or(ParseError::EmptyWeather)?;

    Ok(WeatherReport {
        city: parsed.name,
        country_code: parsed.sys.country,
        description: condition.description,
        temperature: parsed.main.temp,
        high_temp: parsed.main.temp_max,
        low_temp: parsed.main.temp_min,
        feels_like: parsed.main.feels_like,
        humidity: parsed.main.humidity,
        wind_speed: parsed.wind.speed,
    })
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
