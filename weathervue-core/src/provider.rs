use std::fmt::Debug;

use async_trait::async_trait;

use crate::{Config, model::CurrentConditions};

pub mod openweather;

pub use openweather::OpenWeatherProvider;

/// Why one lookup failed. Each variant's `Display` is the text shown to the
/// user, so any non-success HTTP status collapses into the fixed
/// "location not found" wording while transport and decode failures surface
/// their own message.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Location not found. Please try another city.")]
    LocationNotFound,

    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("{0}")]
    Decode(#[from] serde_json::Error),
}

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current(&self, location: &str) -> Result<CurrentConditions, LookupError>;
}

/// Build the OpenWeather provider with the configured credential.
///
/// A missing key is not rejected here: the request goes out with an empty
/// credential and fails like any other unauthorized call. The warning gives
/// the operator the fix.
pub fn provider_from_config(config: &Config) -> OpenWeatherProvider {
    let api_key = match config.api_key() {
        Some(key) => key.to_owned(),
        None => {
            log::warn!(
                "no API key configured; set {} or run `weathervue configure`",
                crate::config::API_KEY_ENV
            );
            String::new()
        }
    };

    OpenWeatherProvider::new(api_key)
}
