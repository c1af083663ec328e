//! Stateful train-then-forecast wrapper.

use super::config::ForecasterConfig;
use super::model::{ForecastModel, TrainingReport};
use crate::core::{ConcentrationSeries, Forecast};
use crate::error::{AirGuardError, Result};

/// Holds at most one fitted [`ForecastModel`].
///
/// Starts untrained. A successful `train` replaces any previous model and
/// its error statistics; a failed `train` leaves the previous state intact.
/// Mutation takes `&mut self`, so concurrent use needs external locking.
#[derive(Debug, Clone, Default)]
pub struct SequenceForecaster {
    config: ForecasterConfig,
    model: Option<ForecastModel>,
}

impl SequenceForecaster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ForecasterConfig) -> Self {
        Self {
            config,
            model: None,
        }
    }

    pub fn config(&self) -> &ForecasterConfig {
        &self.config
    }

    /// Fit on `series` with the given lookback window.
    pub fn train(&mut self, series: &[f64], window: usize) -> Result<TrainingReport> {
        let model = ForecastModel::fit(series, window)?;
        let report = model.report().clone();
        if self.config.window != window {
            tracing::debug!(
                previous = self.config.window,
                window,
                "window changed, replacing model"
            );
            self.config.window = window;
        }
        self.model = Some(model);
        Ok(report)
    }

    /// Fit on a concentration series.
    pub fn train_series(
        &mut self,
        series: &ConcentrationSeries,
        window: usize,
    ) -> Result<TrainingReport> {
        self.train(series.values(), window)
    }

    /// Fit with the configured window.
    pub fn train_default(&mut self, series: &[f64]) -> Result<TrainingReport> {
        self.train(series, self.config.window)
    }

    /// Recursive forecast of `horizon` values following `seed`.
    ///
    /// # Errors
    /// * `NotTrained` before a successful `train`
    /// * `InsufficientSeed` if `seed` is shorter than the window
    pub fn forecast(&self, seed: &[f64], horizon: usize) -> Result<Vec<f64>> {
        self.trained()?.forecast(seed, horizon)
    }

    /// Forecast the configured horizon.
    pub fn forecast_default(&self, seed: &[f64]) -> Result<Vec<f64>> {
        self.forecast(seed, self.config.horizon)
    }

    /// Forecast with intervals at the configured confidence level.
    pub fn forecast_with_intervals(&self, seed: &[f64], horizon: usize) -> Result<Forecast> {
        self.trained()?
            .forecast_with_intervals(seed, horizon, self.config.interval_level)
    }

    pub fn is_trained(&self) -> bool {
        self.model.is_some()
    }

    /// The fitted model, if any.
    pub fn model(&self) -> Option<&ForecastModel> {
        self.model.as_ref()
    }

    /// Take ownership of the fitted model, leaving the forecaster untrained.
    pub fn take_model(&mut self) -> Option<ForecastModel> {
        self.model.take()
    }

    /// Report of the current model.
    pub fn report(&self) -> Option<&TrainingReport> {
        self.model.as_ref().map(|m| m.report())
    }

    fn trained(&self) -> Result<&ForecastModel> {
        self.model.as_ref().ok_or(AirGuardError::NotTrained)
    }
}
