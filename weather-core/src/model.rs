use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{
    error::ValidationError,
    input::{Field, validate},
};

/// A validated city / state code / country code triple.
///
/// Fields can only be set through [`LocationQuery::new`], so every value of
/// this type satisfies the collector rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationQuery {
    city: String,
    state: String,
    country: String,
}

impl LocationQuery {
    pub fn new(city: &str, state: &str, country: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            city: validate(Field::City, city)?,
            state: validate(Field::State, state)?,
            country: validate(Field::Country, country)?,
        })
    }

    /// Values already passed through [`validate`].
    pub(crate) fn from_validated(city: String, state: String, country: String) -> Self {
        Self { city, state, country }
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    /// Value of the `q` query parameter: `city,state,country`.
    pub fn q_param(&self) -> String {
        format!("{},{},{}", self.city, self.state, self.country)
    }
}

impl fmt::Display for LocationQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.city, self.state, self.country)
    }
}

/// Current conditions for one location, in imperial units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub city: String,
    pub country_code: String,
    pub description: String,
    /// Degrees Fahrenheit.
    pub temperature: f64,
    pub high_temp: f64,
    pub low_temp: f64,
    pub feels_like: f64,
    /// Relative humidity, percent.
    pub humidity: u8,
    /// Miles per hour.
    pub wind_speed: f64,
}
