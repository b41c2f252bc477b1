//! Interactive collection of a [`LocationQuery`].
//!
//! The console itself sits behind the [`Prompter`] trait; this module only
//! owns the validation rules and the re-prompt loop.

use tracing::debug;

use crate::{
    error::{PromptError, ValidationError},
    model::LocationQuery,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Country,
    State,
    City,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Country => "Country",
            Field::State => "State",
            Field::City => "City",
        }
    }

    pub fn prompt(self) -> &'static str {
        match self {
            Field::Country => "Please provide a country code (US, UK, DE, etc.):",
            Field::State => "Please provide a state code (MT, UT, WA, etc.):",
            Field::City => "Please provide a city:",
        }
    }

    /// Country and state are two-character codes; city is free text.
    fn is_code(self) -> bool {
        matches!(self, Field::Country | Field::State)
    }
}

/// Check `raw` against the rules for `field` and return the trimmed value.
///
/// Rules are checked in order (blank, length, numeric) and the first one
/// violated is reported.
pub fn validate(field: Field, raw: &str) -> Result<String, ValidationError> {
    let value = raw.trim();

    if value.is_empty() {
        return Err(ValidationError::Blank(field));
    }
    if field.is_code() && value.chars().count() != 2 {
        return Err(ValidationError::WrongLength(field));
    }
    if is_numeric(value) {
        return Err(ValidationError::Numeric(field));
    }

    Ok(value.to_string())
}

/// Decimal numbers, plus the exact `NaN` / `Infinity` spellings.
///
/// `f64::from_str` also takes `nan`, `inf` and `infinity` in any case, which
/// would turn real place names such as Nan (Thailand) into numbers.
fn is_numeric(value: &str) -> bool {
    let unsigned = value.strip_prefix(&['+', '-'][..]).unwrap_or(value);
    if unsigned == "NaN" || unsigned == "Infinity" {
        return true;
    }

    value.bytes().any(|b| b.is_ascii_digit()) && value.parse::<f64>().is_ok()
}

/// Line-oriented console used by the collector and the retry session.
pub trait Prompter {
    /// Show `prompt` and return the next line the user entered.
    fn read_line(&mut self, prompt: &str) -> Result<String, PromptError>;

    /// Print an advisory message.
    fn notify(&mut self, message: &str);

    /// Called right before each fetch attempt for `query`.
    fn on_attempt(&mut self, _query: &LocationQuery) {}
}

/// Keep asking for `field` until the answer passes every rule.
pub fn read_field<P>(prompter: &mut P, field: Field) -> Result<String, PromptError>
where
    P: Prompter + ?Sized,
{
    loop {
        let raw = prompter.read_line(field.prompt())?;
        match validate(field, &raw) {
            Ok(value) => return Ok(value),
            Err(err) => {
                debug!(field = err.field().label(), "rejected input: {err}");
                prompter.notify(&err.to_string());
            }
        }
    }
}

/// Ask for country, state and city in that order.
pub fn collect_location<P>(prompter: &mut P) -> Result<LocationQuery, PromptError>
where
    P: Prompter + ?Sized,
{
    let country = read_field(prompter, Field::Country)?;
    let state = read_field(prompter, Field::State)?;
    let city = read_field(prompter, Field::City)?;

    Ok(LocationQuery::from_validated(city, state, country))
}


#[cfg(test)]
mod tests {
    use super::testing::ScriptedPrompter;
    use super::*;

    #[test]
    fn code_rules() {
        assert_eq!(validate(Field::Country, "US"), Ok("US".to_string()));
        assert_eq!(validate(Field::Country, "   "), Err(ValidationError::Blank(Field::Country)));
        assert_eq!(validate(Field::State, "W"), Err(ValidationError::WrongLength(Field::State)));
        assert_eq!(validate(Field::State, "WAS"), Err(ValidationError::WrongLength(Field::State)));
        assert_eq!(validate(Field::State, "12"), Err(ValidationError::Numeric(Field::State)));
        assert_eq!(validate(Field::Country, "1."), Err(ValidationError::Numeric(Field::Country)));
    }

    #[test]
    fn country_codes_that_look_like_float_keywords_are_accepted() {
        // Namibia and India must not be mistaken for NaN / infinity.
        assert_eq!(validate(Field::Country, "NA"), Ok("NA".to_string()));
        assert_eq!(validate(Field::Country, "IN"), Ok("IN".to_string()));
    }

    #[test]
    fn city_rules() {
        assert_eq!(validate(Field::City, "Salt Lake City"), Ok("Salt Lake City".to_string()));
        assert_eq!(validate(Field::City, ""), Err(ValidationError::Blank(Field::City)));
        assert_eq!(validate(Field::City, "98101"), Err(ValidationError::Numeric(Field::City)));
        assert_eq!(validate(Field::City, "-3.5"), Err(ValidationError::Numeric(Field::City)));
        // no length rule for cities
        assert_eq!(validate(Field::City, "Ai"), Ok("Ai".to_string()));
    }

    #[test]
    fn city_names_spelled_like_float_keywords_are_accepted() {
        for city in ["Nan", "nan", "Inf", "inf", "infinity", "NAN"] {
            assert_eq!(validate(Field::City, city), Ok(city.to_string()), "city {city:?}");
        }
    }

    #[test]
    fn exact_nan_and_infinity_spellings_are_numeric() {
        for city in ["NaN", "Infinity", "-Infinity", "+NaN"] {
            assert_eq!(
                validate(Field::City, city),
                Err(ValidationError::Numeric(Field::City)),
                "city {city:?}"
            );
        }
        assert_eq!(validate(Field::City, "1e5"), Err(ValidationError::Numeric(Field::City)));
    }

    #[test]
    fn collect_reprompts_until_each_field_is_valid() {
        let mut prompter = ScriptedPrompter::new(&[
            "", "USA", "42", "US", // country
            "W", "WA", // state
            "  ", "123", "Seattle", // city
        ]);

        let query = collect_location(&mut prompter).expect("collector returns once input is valid");

        assert_eq!(query, LocationQuery::new("Seattle", "WA", "US").unwrap());
        assert_eq!(prompter.remaining(), 0);
        assert_eq!(
            prompter.notices,
            vec![
                "Country cannot be empty.",
                "Valid country codes are 2 characters.",
                "Country cannot be numeric.",
                "Valid state codes are 2 characters.",
                "City cannot be empty.",
                "City cannot be numeric.",
            ]
        );
        assert_eq!(prompter.prompts.len(), 9);
        assert_eq!(prompter.prompts[0], Field::Country.prompt());
        assert_eq!(prompter.prompts[4], Field::State.prompt());
        assert_eq!(prompter.prompts[8], Field::City.prompt());
    }

    #[test]
    fn collect_propagates_cancellation() {
        let mut prompter = ScriptedPrompter::new(&["US", "WA"]);
        let err = collect_location(&mut prompter).unwrap_err();
        assert!(matches!(err, PromptError::Cancelled));
    }
}
