use weather_core::WeatherReport;

pub const PROGRESS: &str = "System Querying.....";

/// Human-readable summary of a report, imperial units. Readings always carry
/// a decimal part (`80.0`, not `80`).
pub fn render_report(report: &WeatherReport) -> String {
    format!(
        "The current conditions in {city}, {country} is {description}.\n\
         The current temp is {temp:?} degrees fahrenheit, with a high of {high:?} degrees fahrenheit \
         and a low of {low:?} degrees fahrenheit, but it feels {feels:?} degrees fahrenheit.\n\
         The humidity is {humidity}% with wind speeds of {wind:?}/mph.",
        city = report.city,
        country = report.country_code,
        description = report.description,
        temp = report.temperature,
        high = report.high_temp,
        low = report.low_temp,
        feels = report.feels_like,
        humidity = report.humidity,
        wind = report.wind_speed,
    )
}
