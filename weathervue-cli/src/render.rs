//! Terminal rendering for the page: title banner, particle backdrop, and one
//! card per request state.

use chrono::Local;

use weathervue_core::view::{self, IconColor};
use weathervue_core::{ParticleKind, ParticleSpec, RequestState, WeatherView};

const RESET: &str = "\x1b[0m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";

const BACKDROP_WIDTH: usize = 48;
const BACKDROP_ROWS: usize = 4;

fn color_code(color: IconColor) -> &'static str {
    match color {
        IconColor::Yellow => "\x1b[33m",
        IconColor::Gray => "\x1b[90m",
        IconColor::Blue => "\x1b[34m",
        IconColor::White => "\x1b[97m",
        IconColor::Purple => "\x1b[35m",
    }
}

/// Title plus the ambient particle backdrop, drawn once at startup.
pub fn banner(backdrop: &[ParticleSpec]) {
    println!();
    println!("  {BOLD}WeatherVue{RESET}");
    println!("  {DIM}Real-time weather in your terminal{RESET}");
    print!("{}", ambient_backdrop(backdrop, BACKDROP_WIDTH, BACKDROP_ROWS));
}

/// Render whatever the controller currently holds.
pub fn state(state: &RequestState) {
    match state {
        RequestState::Idle => welcome_card(),
        RequestState::Loading => println!("  Fetching weather data..."),
        RequestState::Success(view) => weather_card(view),
        RequestState::Failed(message) => error_card(message),
    }
}

/// Project the particle field onto a small character grid. Each spec lands in
/// the cell addressed by its percentage position; drops render as `.`,
/// flakes as `*`.
fn ambient_backdrop(backdrop: &[ParticleSpec], width: usize, rows: usize) -> String {
    let mut grid = vec![vec![' '; width]; rows];

    for p in backdrop {
        let col = ((p.x_pct / 100.0) * (width as f64 - 1.0)).round() as usize;
        let row = ((p.y_pct / 100.0) * (rows as f64 - 1.0)).round() as usize;
        grid[row.min(rows - 1)][col.min(width - 1)] = match p.kind {
            ParticleKind::Drop => '.',
            ParticleKind::Flake => '*',
        };
    }

    let mut out = String::new();
    for row in grid {
        out.push_str("  ");
        out.push_str(DIM);
        out.extend(row);
        out.push_str(RESET);
        out.push('\n');
    }
    out
}

fn welcome_card() {
    println!();
    println!("  Welcome to WeatherVue");
    println!("  {DIM}Enter a city name to get current weather conditions{RESET}");
    println!();
}

fn weather_card(view: &WeatherView) {
    let style = view::style_for(&view.condition);
    let color = color_code(style.color);
    let today = Local::now().format("%A, %B %-d");

    println!();
    println!("  {BOLD}{}, {}{RESET}   {DIM}{today}{RESET}", view.city, view.country);
    println!();
    println!(
        "  {color}{}{RESET}  {BOLD}{}°C{RESET}   {DIM}feels like {}°C{RESET}   {}",
        style.icon, view.temp_c, view.feels_like_c, view.condition
    );
    println!();
    println!(
        "  Humidity  {:>3}%      Wind     {:>5.1} km/h",
        view.humidity_pct, view.wind_kmh
    );
    println!(
        "  Sunrise   {:>5}      Sunset   {:>5}",
        view.sunrise, view.sunset
    );
    println!();
}

fn error_card(message: &str) {
    println!();
    println!("  {message}");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(x_pct: f64, y_pct: f64, kind: ParticleKind) -> ParticleSpec {
        ParticleSpec {
            x_pct,
            y_pct,
            size: 3.0,
            opacity: 0.5,
            fall_secs: 20.0,
            delay_secs: 1.0,
            kind,
        }
    }

    #[test]
    fn backdrop_places_particles_by_percentage() {
        let field = vec![
            spec(0.0, 0.0, ParticleKind::Drop),
            spec(99.9, 99.9, ParticleKind::Flake),
        ];

        let out = ambient_backdrop(&field, 10, 2);
        let rows: Vec<&str> = out.lines().collect();

        assert_eq!(rows.len(), 2);
        assert!(rows[0].contains('.'));
        assert!(rows[1].contains('*'));
    }

    #[test]
    fn backdrop_always_emits_the_requested_rows() {
        let out = ambient_backdrop(&[], 10, 4);
        assert_eq!(out.lines().count(), 4);
    }
}
