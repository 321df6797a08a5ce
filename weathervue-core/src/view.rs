//! Pure derivation from a raw payload to display values: rounding, unit
//! conversion, time formatting and icon selection.

use std::fmt;

use chrono::TimeZone;

use crate::model::{CurrentConditions, WeatherView};

/// Palette tag for a condition icon. The binary decides how to paint it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconColor {
    Yellow,
    Gray,
    Blue,
    White,
    Purple,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConditionStyle {
    pub condition: &'static str,
    pub icon: &'static str,
    pub color: IconColor,
}

/// Ordered icon table. Lookups take the first match; anything unlisted falls
/// back to the leading clear-sky entry.
pub const CONDITION_STYLES: &[ConditionStyle] = &[
    ConditionStyle { condition: "Clear", icon: "☀", color: IconColor::Yellow },
    ConditionStyle { condition: "Clouds", icon: "☁", color: IconColor::Gray },
    ConditionStyle { condition: "Rain", icon: "🌧", color: IconColor::Blue },
    ConditionStyle { condition: "Snow", icon: "❄", color: IconColor::White },
    ConditionStyle { condition: "Thunderstorm", icon: "⛈", color: IconColor::Purple },
];

pub fn style_for(condition: &str) -> &'static ConditionStyle {
    CONDITION_STYLES
        .iter()
        .find(|s| s.condition == condition)
        .unwrap_or(&CONDITION_STYLES[0])
}

/// Turn a raw payload into display values.
///
/// `tz` is the viewer's timezone; sunrise/sunset become wall-clock strings
/// in it. The app passes `chrono::Local`, tests pass a fixed offset.
pub fn map_current<Tz>(raw: &CurrentConditions, tz: &Tz) -> WeatherView
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let condition = raw
        .weather
        .first()
        .map(|w| w.main.clone())
        .unwrap_or_else(|| "Unknown".to_string());

    WeatherView {
        city: raw.name.clone(),
        country: raw.sys.country.clone(),
        temp_c: raw.main.temp.round() as i32,
        feels_like_c: raw.main.feels_like.round() as i32,
        condition,
        humidity_pct: raw.main.humidity,
        wind_kmh: kmh(raw.wind.speed),
        sunrise: clock_time(raw.sys.sunrise, tz),
        sunset: clock_time(raw.sys.sunset, tz),
    }
}

/// Meters per second to km/h, rounded to one decimal.
fn kmh(mps: f64) -> f64 {
    (mps * 3.6 * 10.0).round() / 10.0
}

fn clock_time<Tz>(epoch_secs: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    tz.timestamp_opt(epoch_secs, 0)
        .single()
        .map(|dt| dt.format("%H:%M").to_string())
        .unwrap_or_else(|| "--:--".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ConditionTag, Sys, Thermals, Wind};
    use chrono::FixedOffset;

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).expect("zero offset is valid")
    }

    fn raw(condition: &str, wind_mps: f64) -> CurrentConditions {
        CurrentConditions {
            name: "London".to_string(),
            sys: Sys { country: "GB".to_string(), sunrise: 1_700_000_000, sunset: 1_700_030_000 },
            main: Thermals { temp: 15.2, feels_like: 14.1, humidity: 70 },
            weather: vec![ConditionTag { main: condition.to_string() }],
            wind: Wind { speed: wind_mps },
        }
    }

    #[test]
    fn wind_is_converted_to_kmh_with_one_decimal() {
        assert_eq!(kmh(3.0), 10.8);
        assert_eq!(kmh(0.0), 0.0);
        assert_eq!(kmh(5.14), 18.5);
    }

    #[test]
    fn temperatures_round_to_nearest_integer() {
        let view = map_current(&raw("Rain", 3.0), &utc());
        assert_eq!(view.temp_c, 15);
        assert_eq!(view.feels_like_c, 14);
    }

    #[test]
    fn sun_times_are_zero_padded_wall_clock_in_the_given_zone() {
        let view = map_current(&raw("Rain", 3.0), &utc());
        assert_eq!(view.sunrise, "22:13");
        assert_eq!(view.sunset, "06:33");

        let shifted = FixedOffset::east_opt(3600).expect("one hour east is valid");
        let view = map_current(&raw("Rain", 3.0), &shifted);
        assert_eq!(view.sunrise, "23:13");
        assert_eq!(view.sunset, "07:33");
    }

    #[test]
    fn every_listed_condition_selects_its_own_style() {
        for style in CONDITION_STYLES {
            assert_eq!(style_for(style.condition), style);
        }
    }

    #[test]
    fn unlisted_conditions_fall_back_to_clear() {
        assert_eq!(style_for("Drizzle"), &CONDITION_STYLES[0]);
        assert_eq!(style_for("Unknown"), &CONDITION_STYLES[0]);
        assert_eq!(style_for(""), &CONDITION_STYLES[0]);
    }

    #[test]
    fn missing_condition_entry_maps_to_unknown_label() {
        let mut payload = raw("Rain", 3.0);
        payload.weather.clear();

        let view = map_current(&payload, &utc());
        assert_eq!(view.condition, "Unknown");
        assert_eq!(style_for(&view.condition).condition, "Clear");
    }

    #[test]
    fn london_payload_maps_end_to_end() {
        let body = r#"{
            "name": "London",
            "sys": {"country": "GB", "sunrise": 1700000000, "sunset": 1700030000},
            "main": {"temp": 15.2, "feels_like": 14.1, "humidity": 70},
            "weather": [{"main": "Rain"}],
            "wind": {"speed": 3.0}
        }"#;
        let parsed: CurrentConditions = serde_json::from_str(body).expect("payload parses");

        let view = map_current(&parsed, &utc());
        assert_eq!(view.city, "London");
        assert_eq!(view.country, "GB");
        assert_eq!(view.temp_c, 15);
        assert_eq!(view.feels_like_c, 14);
        assert_eq!(view.humidity_pct, 70);
        assert_eq!(view.wind_kmh, 10.8);
        assert_eq!(style_for(&view.condition).condition, "Rain");
    }
}
