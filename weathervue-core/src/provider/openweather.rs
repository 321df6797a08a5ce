use async_trait::async_trait;
use reqwest::Client;

use crate::model::CurrentConditions;

use super::{LookupError, WeatherProvider};

const ENDPOINT: &str = "https://api.openweathermap.org/data/2.5/weather";

/// OpenWeather current-conditions client. One GET per lookup, metric units.
#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            http: Client::new(),
        }
    }

    pub fn has_credential(&self) -> bool {
        !self.api_key.is_empty()
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current(&self, location: &str) -> Result<CurrentConditions, LookupError> {
        let res = self
            .http
            .get(ENDPOINT)
            .query(&[
                ("q", location),
                ("units", "metric"),
                ("appid", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            log::debug!(
                "lookup for {location:?} failed with status {status}: {}",
                truncate_body(&body)
            );
            return Err(LookupError::LocationNotFound);
        }

        let body = res.text().await?;
        let parsed: CurrentConditions = serde_json::from_str(&body)?;

        log::debug!("lookup for {location:?} returned {}", parsed.name);
        Ok(parsed)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        let cut: String = body.chars().take(MAX).collect();
        format!("{cut}...")
    } else {
        body.to_string()
    }
}
