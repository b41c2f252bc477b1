//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - Location input validation and the re-prompting collector
//! - The OpenWeather current-conditions client and its response parser
//! - The collect → fetch session that restarts on failure
//!
//! It is used by `weather-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod provider;
pub mod session;

pub use config::Config;
pub use error::{FetchError, FetchErrorKind, ParseError, PromptError, SessionError, ValidationError};
pub use input::{Field, Prompter, collect_location};
pub use model::{LocationQuery, WeatherReport};
pub use provider::{WeatherProvider, openweather::OpenWeatherClient};
pub use session::{Remedy, default_remedy, fetch_weather};
