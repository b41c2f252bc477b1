//! The collect → fetch cycle with restart-on-failure.

use tracing::{info, warn};

use crate::{
    error::{FetchError, FetchErrorKind, SessionError},
    input::{Prompter, collect_location},
    model::{LocationQuery, WeatherReport},
    provider::WeatherProvider,
};

/// What to do after a failed fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Remedy {
    /// Tell the user what went wrong, ask for a new location and try again.
    ReenterLocation,
    /// Give the error back to the caller.
    Abort,
}

/// Remedy used by the interactive CLI.
///
/// Bad credentials and malformed payloads cannot be fixed by typing another
/// city, so those end the cycle; everything else goes back to the prompt.
pub fn default_remedy(err: &FetchError) -> Remedy {
    match err.kind() {
        FetchErrorKind::ValidationRejected
        | FetchErrorKind::ServiceRejected
        | FetchErrorKind::TransportError => Remedy::ReenterLocation,
        FetchErrorKind::AuthRejected | FetchErrorKind::DecodeError => Remedy::Abort,
    }
}

/// Fetch conditions for `query`, re-collecting the location whenever
/// `remedy` says so. Loops until a report arrives, the remedy aborts, or the
/// user cancels a prompt.
pub async fn fetch_weather<P, S, F>(
    provider: &P,
    prompter: &mut S,
    query: LocationQuery,
    mut remedy: F,
) -> Result<WeatherReport, SessionError>
where
    P: WeatherProvider + ?Sized,
    S: Prompter + ?Sized,
    F: FnMut(&FetchError) -> Remedy,
{
    let mut query = query;
    let mut attempt = 1u32;

    loop {
        info!(attempt, location = %query, "fetching current conditions");
        prompter.on_attempt(&query);

        let err = match provider.get_weather(&query).await {
            Ok(report) => return Ok(report),
            Err(err) => err,
        };

        warn!(attempt, kind = ?err.kind(), "fetch failed: {err}");

        match remedy(&err) {
            Remedy::Abort => return Err(SessionError::Aborted(err)),
            Remedy::ReenterLocation => {
                prompter.notify(&format!("{err}. Please try again."));
                query = collect_location(prompter)?;
                attempt += 1;
            }
        }
    }
}
