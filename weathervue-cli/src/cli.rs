use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use inquire::{InquireError, Text};

use weathervue_core::{
    Config, LookupError, QueryController, WeatherProvider, WeatherView, particles,
    provider::provider_from_config, view,
};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weathervue", version, about = "Weather lookup in the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key.
    Configure,

    /// Look up a city once and exit.
    Show {
        /// City name, e.g. "London".
        city: String,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Some(Command::Configure) => configure(),
            Some(Command::Show { city }) => show_once(&city).await,
            None => page_loop().await,
        }
    }
}

fn configure() -> Result<()> {
    let mut config = Config::load()?;

    let api_key = Text::new("OpenWeather API key:")
        .prompt()
        .context("Configuration aborted")?;

    config.set_api_key(api_key.trim().to_string());
    config.save()?;

    println!("Saved to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn show_once(city: &str) -> Result<()> {
    let config = Config::load()?;
    let provider = provider_from_config(&config);

    let mut controller = QueryController::new();
    let Some((tag, query)) = controller.submit(city) else {
        return Ok(());
    };

    let outcome = lookup(&provider, &query).await;
    controller.complete(tag, outcome);
    render::state(controller.state());

    Ok(())
}

/// The single page: banner and backdrop once, then prompt / fetch / render
/// until the user cancels.
async fn page_loop() -> Result<()> {
    let config = Config::load()?;
    let provider = provider_from_config(&config);
    log::debug!("configuration loaded; credential present: {}", provider.has_credential());

    let backdrop = particles::generate_default();

    let mut controller = QueryController::new();

    render::banner(&backdrop);
    render::state(controller.state());

    loop {
        let input = match Text::new("Enter city name...").prompt() {
            Ok(input) => input,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err).context("Failed to read search input"),
        };

        let Some((tag, query)) = controller.submit(&input) else {
            continue;
        };

        render::state(controller.state());
        let outcome = lookup(&provider, &query).await;
        controller.complete(tag, outcome);
        render::state(controller.state());
    }

    Ok(())
}

async fn lookup(
    provider: &impl WeatherProvider,
    query: &str,
) -> Result<WeatherView, LookupError> {
    let raw = provider.current(query).await?;
    Ok(view::map_current(&raw, &Local))
}
