//! Fitted autoregressive model and recursive forecasting.

use super::window::TrainingSet;
use crate::core::{validate_concentrations, Forecast};
use crate::error::{AirGuardError, Result};
use crate::utils::metrics::calculate_metrics;
use crate::utils::ols::{ols_fit, OLSResult};
use crate::utils::stats::{quantile_normal, root_mean_square};

/// In-sample quality of a fitted model. No threshold is enforced.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingReport {
    /// Mean squared error on the training pairs.
    pub mse: f64,
    /// Mean absolute error on the training pairs.
    pub mae: f64,
    /// Root mean squared error on the training pairs.
    pub rmse: f64,
    /// Number of training pairs.
    pub samples: usize,
    /// Lookback window the model was fitted with.
    pub window: usize,
}

/// Linear model over the last `window` concentrations.
///
/// Immutable once fitted. Forecasting borrows the model, so one model can
/// serve any number of concurrent callers.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastModel {
    window: usize,
    ols: OLSResult,
    fitted: Vec<f64>,
    residuals: Vec<f64>,
    report: TrainingReport,
}

impl ForecastModel {
    /// Fit a model on a concentration series with the given lookback window.
    ///
    /// # Errors
    /// * `InvalidParameter` if `window` is zero
    /// * `InsufficientData` if `series.len() <= window`
    /// * `InvalidInput` if a value is negative or not finite
    pub fn fit(series: &[f64], window: usize) -> Result<Self> {
        validate_concentrations(series)?;
        let training = TrainingSet::build(series, window)?;

        tracing::debug!(
            window,
            samples = training.len(),
            "fitting autoregressive model"
        );

        let ols = ols_fit(training.features(), training.targets())?;
        let fitted = ols.predict(training.features())?;
        let metrics = calculate_metrics(training.targets(), &fitted)?;

        let residuals: Vec<f64> = training
            .targets()
            .iter()
            .zip(&fitted)
            .map(|(y, f)| y - f)
            .collect();

        let report = TrainingReport {
            mse: metrics.mse,
            mae: metrics.mae,
            rmse: metrics.rmse,
            samples: training.len(),
            window,
        };

        tracing::debug!(
            mse = report.mse,
            mae = report.mae,
            ridge = ols.ridge,
            "model trained"
        );

        Ok(Self {
            window,
            ols,
            fitted,
            residuals,
            report,
        })
    }

    pub fn window(&self) -> usize {
        self.window
    }

    pub fn intercept(&self) -> f64 {
        self.ols.intercept
    }

    /// Coefficients ordered oldest lag first.
    pub fn coefficients(&self) -> &[f64] {
        &self.ols.coefficients
    }

    pub fn report(&self) -> &TrainingReport {
        &self.report
    }

    /// In-sample one-step predictions, one per training pair.
    pub fn fitted_values(&self) -> &[f64] {
        &self.fitted
    }

    /// Training residuals (target - fitted).
    pub fn residuals(&self) -> &[f64] {
        &self.residuals
    }

    /// Predict the value following a window of exactly `window` values.
    pub fn predict_next(&self, recent: &[f64]) -> Result<f64> {
        if recent.len() != self.window {
            return Err(AirGuardError::DimensionMismatch {
                expected: self.window,
                got: recent.len(),
            });
        }
        self.ols.predict_one(recent)
    }

    /// Recursive multi-step forecast.
    ///
    /// Starts from the last `window` values of `seed`; each prediction is
    /// appended to the working buffer and feeds the next step. Errors
    /// therefore compound with the horizon.
    ///
    /// # Errors
    /// * `InsufficientSeed` if `seed.len() < window`
    /// * `InvalidInput` if a seed value is not finite
    pub fn forecast(&self, seed: &[f64], horizon: usize) -> Result<Vec<f64>> {
        if seed.len() < self.window {
            return Err(AirGuardError::InsufficientSeed {
                needed: self.window,
                got: seed.len(),
            });
        }
        if let Some(v) = seed.iter().find(|v| !v.is_finite()) {
            return Err(AirGuardError::InvalidInput(format!(
                "seed values must be finite, got {}",
                v
            )));
        }

        let mut buffer = Vec::with_capacity(self.window + horizon);
        buffer.extend_from_slice(&seed[seed.len() - self.window..]);
        let mut predictions = Vec::with_capacity(horizon);

        for step in 0..horizon {
            let next = self.predict_next(&buffer[buffer.len() - self.window..])?;
            tracing::trace!(step = step + 1, value = next, "forecast step");
            predictions.push(next);
            buffer.push(next);
        }

        Ok(predictions)
    }

    /// Recursive forecast with intervals that widen with the horizon.
    ///
    /// The standard error at step `h` is `residual_sd * sqrt(h)`.
    pub fn forecast_with_intervals(
        &self,
        seed: &[f64],
        horizon: usize,
        level: f64,
    ) -> Result<Forecast> {
        if !(level > 0.0 && level < 1.0) {
            return Err(AirGuardError::InvalidParameter(format!(
                "confidence level must be in (0, 1), got {}",
                level
            )));
        }

        let predictions = self.forecast(seed, horizon)?;
        let sigma = self.residual_sd();
        let z = quantile_normal((1.0 + level) / 2.0);

        let std_errors: Vec<f64> = (1..=horizon).map(|h| sigma * (h as f64).sqrt()).collect();
        let lower = predictions
            .iter()
            .zip(&std_errors)
            .map(|(p, se)| p - z * se)
            .collect();
        let upper = predictions
            .iter()
            .zip(&std_errors)
            .map(|(p, se)| p + z * se)
            .collect();

        Ok(Forecast::from_values_with_intervals(
            predictions,
            lower,
            upper,
            std_errors,
            level,
        ))
    }

    /// Standard deviation of the training residuals.
    pub fn residual_sd(&self) -> f64 {
        root_mean_square(&self.residuals)
    }
}
