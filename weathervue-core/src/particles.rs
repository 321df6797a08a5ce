//! Decorative particle field. Generated once per run, purely cosmetic, and
//! entirely independent of the weather data.

use rand::Rng;

/// Visual class of one particle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleKind {
    Drop,
    Flake,
}

/// One decorative particle. Never updated or removed after generation.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleSpec {
    /// Horizontal position, percent of the viewport.
    pub x_pct: f64,
    /// Vertical position, percent of the viewport.
    pub y_pct: f64,
    pub size: f64,
    pub opacity: f64,
    /// Seconds for one full fall.
    pub fall_secs: f64,
    /// Seconds before the first fall starts.
    pub delay_secs: f64,
    pub kind: ParticleKind,
}

pub const DEFAULT_PARTICLE_COUNT: usize = 40;

/// Produce `n` independently randomized particles, roughly 70% drops to
/// 30% flakes.
pub fn generate_particles<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<ParticleSpec> {
    (0..n)
        .map(|_| ParticleSpec {
            x_pct: rng.gen_range(0.0..100.0),
            y_pct: rng.gen_range(0.0..100.0),
            size: rng.gen_range(2.0..6.0),
            opacity: rng.gen_range(0.2..0.7),
            fall_secs: rng.gen_range(15.0..30.0),
            delay_secs: rng.gen_range(0.0..10.0),
            kind: if rng.gen_bool(0.7) { ParticleKind::Drop } else { ParticleKind::Flake },
        })
        .collect()
}

/// Thread-RNG convenience for the one generation at startup.
pub fn generate_default() -> Vec<ParticleSpec> {
    generate_particles(&mut rand::thread_rng(), DEFAULT_PARTICLE_COUNT)
}
