//! Forecaster configuration.

use crate::error::{AirGuardError, Result};

/// Default lookback: one day of hourly readings.
pub const DEFAULT_WINDOW: usize = 24;
/// Default forecast horizon in hours.
pub const DEFAULT_HORIZON: usize = 24;
/// Default confidence level for forecast intervals.
pub const DEFAULT_INTERVAL_LEVEL: f64 = 0.95;

/// Configuration for a [`SequenceForecaster`](super::SequenceForecaster).
#[derive(Debug, Clone, PartialEq)]
pub struct ForecasterConfig {
    /// Number of past values used as features.
    pub window: usize,
    /// Number of steps forecast by `forecast_default`.
    pub horizon: usize,
    /// Confidence level for `forecast_with_intervals`.
    pub interval_level: f64,
}

impl Default for ForecasterConfig {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
            horizon: DEFAULT_HORIZON,
            interval_level: DEFAULT_INTERVAL_LEVEL,
        }
    }
}

impl ForecasterConfig {
    /// Create a configuration with the given window and horizon.
    pub fn new(window: usize, horizon: usize) -> Self {
        Self {
            window,
            horizon,
            ..Self::default()
        }
    }

    /// Set the lookback window.
    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    /// Set the forecast horizon.
    pub fn with_horizon(mut self, horizon: usize) -> Self {
        self.horizon = horizon;
        self
    }

    /// Set the interval confidence level.
    pub fn with_interval_level(mut self, level: f64) -> Self {
        self.interval_level = level;
        self
    }

    /// Check that the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        if self.window == 0 {
            return Err(AirGuardError::InvalidParameter(
                "window must be at least 1".to_string(),
            ));
        }
        if !(self.interval_level > 0.0 && self.interval_level < 1.0) {
            return Err(AirGuardError::InvalidParameter(format!(
                "interval level must be in (0, 1), got {}",
                self.interval_level
            )));
        }
        Ok(())
    }
}
