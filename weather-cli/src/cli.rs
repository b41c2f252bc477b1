use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use tracing::info;
use weather_core::{
    Config, FetchError, LocationQuery, PromptError, SessionError, WeatherProvider,
    collect_location, default_remedy, fetch_weather, provider::provider_from_config,
};

use crate::{console::InquirePrompter, display};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "weather",
    version,
    about = "Current conditions from OpenWeather for a city, state code and country code"
)]
pub struct Cli {
    /// Increase log verbosity on stderr (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key in the config file.
    Configure {
        /// API key; prompted for (hidden) when omitted.
        #[arg(long)]
        api_key: Option<String>,
    },

    /// Show current conditions for one location and exit.
    Show {
        #[arg(long)]
        city: String,

        /// Two-letter state code, e.g. WA.
        #[arg(long)]
        state: String,

        /// Two-letter country code, e.g. US.
        #[arg(long)]
        country: String,
    },

    /// Numbered menu loop (the default when no command is given).
    Interactive,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command.unwrap_or(Command::Interactive) {
            Command::Configure { api_key } => configure(api_key),
            Command::Show { city, state, country } => {
                let query = LocationQuery::new(&city, &state, &country)?;
                let provider = provider_from_loaded_config()?;
                let report = provider.get_weather(&query).await?;
                println!("{}", display::render_report(&report));
                Ok(())
            }
            Command::Interactive => {
                let provider = provider_from_loaded_config()?;
                interactive(provider.as_ref()).await
            }
        }
    }
}

fn provider_from_loaded_config() -> anyhow::Result<Box<dyn WeatherProvider>> {
    let config = Config::load()?;
    provider_from_config(&config)
}

fn configure(api_key: Option<String>) -> anyhow::Result<()> {
    let api_key = match api_key {
        Some(key) => key,
        None => inquire::Password::new("OpenWeather API key:")
            .without_confirmation()
            .with_display_toggle_enabled()
            .prompt()
            .context("Failed to read API key")?,
    };

    if api_key.trim().is_empty() {
        bail!("API key cannot be empty");
    }

    let mut config = Config::load()?;
    config.set_api_key(api_key);
    let path = config.save()?;

    info!(path = %path.display(), "saved configuration");
    println!("Saved API key to {}", path.display());
    Ok(())
}

/// Choices accepted at the top-level menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Query,
    Quit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input == "1" {
            Some(MenuChoice::Query)
        } else if input.eq_ignore_ascii_case("q") || input.eq_ignore_ascii_case("quit") {
            Some(MenuChoice::Quit)
        } else {
            None
        }
    }
}

const WELCOME: &str = "Welcome to the OpenWeather viewer. Query current conditions \
                       by state code, country code and city.";

const MENU: &str = "\nInstructions:\n1: Query current conditions\nQ or Quit: Quits the program\n";

async fn interactive(provider: &dyn WeatherProvider) -> anyhow::Result<()> {
    let mut prompter = InquirePrompter;

    println!("{WELCOME}");

    loop {
        println!("{MENU}");

        let Some(line) = prompter.menu_choice()? else {
            break;
        };

        match MenuChoice::parse(&line) {
            Some(MenuChoice::Query) => query_cycle(provider, &mut prompter).await?,
            Some(MenuChoice::Quit) => break,
            None => println!("Please provide a valid option."),
        }
    }

    Ok(())
}

/// One collect → fetch → display round. Only console failures escape.
async fn query_cycle(provider: &dyn WeatherProvider, prompter: &mut InquirePrompter) -> anyhow::Result<()> {
    let query = match collect_location(prompter) {
        Ok(query) => query,
        Err(PromptError::Cancelled) => {
            println!("Query cancelled.");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };
    println!();

    match fetch_weather(provider, prompter, query, default_remedy).await {
        Ok(report) => println!("\n{}", display::render_report(&report)),
        Err(err) if err.is_cancelled() => println!("Query cancelled."),
        Err(SessionError::Aborted(err @ FetchError::AuthRejected)) => {
            eprintln!("{err}.\nHint: run `weather configure` to store a valid key.");
        }
        Err(SessionError::Aborted(err)) => eprintln!("{err}"),
        Err(SessionError::Input(err)) => return Err(err.into()),
    }

    Ok(())
}
