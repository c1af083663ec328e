//! Synthetic hourly PM2.5 series for demos, tests and benchmarks.

use crate::core::ConcentrationSeries;
use crate::error::{AirGuardError, Result};
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use std::f64::consts::PI;

/// Parameters of a diurnal sinusoid with optional Gaussian noise.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntheticConfig {
    /// Number of hourly values.
    pub hours: usize,
    /// Mean level (µg/m³).
    pub base: f64,
    /// Sinusoid amplitude (µg/m³).
    pub amplitude: f64,
    /// Period in hours.
    pub period: f64,
    /// Phase shift in hours.
    pub phase: f64,
    /// Standard deviation of the additive noise.
    pub noise_sd: f64,
    /// Values are clamped to at least this level.
    pub floor: f64,
    /// RNG seed; `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            hours: 168,
            base: 30.0,
            amplitude: 15.0,
            period: 24.0,
            phase: 0.0,
            noise_sd: 0.0,
            floor: 0.0,
            seed: None,
        }
    }
}

impl SyntheticConfig {
    /// A week of hourly values: `30 + 15 sin(2πt/24)`, noise-free.
    pub fn week() -> Self {
        Self::default()
    }

    /// Daytime-peaking profile: `30 + 20 sin(2π(t-6)/24) + N(0, 5)`, floor 10.
    pub fn daytime_peak(days: usize, seed: u64) -> Self {
        Self {
            hours: days * 24,
            amplitude: 20.0,
            phase: 6.0,
            noise_sd: 5.0,
            floor: 10.0,
            seed: Some(seed),
            ..Self::default()
        }
    }

    pub fn with_noise(mut self, noise_sd: f64, seed: u64) -> Self {
        self.noise_sd = noise_sd;
        self.seed = Some(seed);
        self
    }

    pub fn with_hours(mut self, hours: usize) -> Self {
        self.hours = hours;
        self
    }
}

fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn normal(sd: f64) -> Result<Normal<f64>> {
    Normal::new(0.0, sd).map_err(|e| AirGuardError::InvalidParameter(format!("noise sd: {}", e)))
}

/// Generate a diurnal sinusoid.
///
/// `max(floor, base + amplitude * sin(2π(t - phase)/period) + noise)`
pub fn diurnal_series(config: &SyntheticConfig) -> Result<Vec<f64>> {
    if !(config.period > 0.0) {
        return Err(AirGuardError::InvalidParameter(format!(
            "period must be positive, got {}",
            config.period
        )));
    }
    let noise = normal(config.noise_sd)?;
    let mut rng = rng_for(config.seed);

    Ok((0..config.hours)
        .map(|t| {
            let signal = config.base
                + config.amplitude * (2.0 * PI * (t as f64 - config.phase) / config.period).sin();
            let jitter = if config.noise_sd > 0.0 {
                noise.sample(&mut rng)
            } else {
                0.0
            };
            (signal + jitter).max(config.floor)
        })
        .collect())
}

/// Generate a day/night step profile.
///
/// Base 40 between 08:00 and 18:00 inclusive, 25 otherwise, plus N(0, 8)
/// noise, floored at 10 and rounded to two decimals.
pub fn day_night_series(hours: usize, seed: Option<u64>) -> Result<Vec<f64>> {
    let noise = normal(8.0)?;
    let mut rng = rng_for(seed);

    Ok((0..hours)
        .map(|i| {
            let base = if (8..=18).contains(&(i % 24)) { 40.0 } else { 25.0 };
            let value = (base + noise.sample(&mut rng)).max(10.0);
            (value * 100.0).round() / 100.0
        })
        .collect())
}

/// Stamp generated values as an hourly series starting at `start`.
pub fn to_concentration_series(
    values: Vec<f64>,
    start: DateTime<Utc>,
    station_id: &str,
) -> Result<ConcentrationSeries> {
    Ok(ConcentrationSeries::hourly(start, values)?.with_station(station_id))
}
