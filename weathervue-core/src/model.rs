use serde::Deserialize;

/// Raw OpenWeather current-conditions payload. Only the fields the page
/// renders are deserialized; everything else in the body is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentConditions {
    pub name: String,
    pub sys: Sys,
    pub main: Thermals,
    #[serde(default)]
    pub weather: Vec<ConditionTag>,
    pub wind: Wind,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Sys {
    pub country: String,
    /// Epoch seconds, UTC.
    pub sunrise: i64,
    /// Epoch seconds, UTC.
    pub sunset: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Thermals {
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConditionTag {
    pub main: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Wind {
    /// Meters per second, as reported with metric units.
    pub speed: f64,
}

/// Display-ready values derived from one successful lookup.
/// Immutable once produced.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherView {
    pub city: String,
    pub country: String,
    pub temp_c: i32,
    pub feels_like_c: i32,
    pub condition: String,
    pub humidity_pct: u8,
    /// Km/h, already rounded to one decimal.
    pub wind_kmh: f64,
    /// Wall-clock `HH:MM` in the viewer's timezone.
    pub sunrise: String,
    pub sunset: String,
}
