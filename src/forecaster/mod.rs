//! Sliding-window autoregressive forecasting of PM2.5 concentrations.
//!
//! A series is cut into overlapping windows of `W` consecutive values, each
//! paired with the value that follows it. A linear model is fitted by least
//! squares over those pairs and applied recursively: every prediction is fed
//! back as input for the next step, so forecast error grows with the horizon.
//!
//! Two entry points:
//! * [`ForecastModel::fit`] returns an immutable model that can be shared.
//! * [`SequenceForecaster`] wraps an optional model behind `train`/`forecast`.
//!
//! # Example
//!
//! ```
//! use airguard::forecaster::SequenceForecaster;
//!
//! let history: Vec<f64> = (0..168)
//!     .map(|t| 30.0 + 15.0 * (2.0 * std::f64::consts::PI * t as f64 / 24.0).sin())
//!     .collect();
//!
//! let mut forecaster = SequenceForecaster::new();
//! let report = forecaster.train(&history, 24).unwrap();
//! assert!(report.mse < 1e-3);
//!
//! let next = forecaster.forecast(&history[history.len() - 24..], 12).unwrap();
//! assert_eq!(next.len(), 12);
//! ```

mod config;
mod model;
mod sequence;
mod window;

pub use config::{ForecasterConfig, DEFAULT_HORIZON, DEFAULT_INTERVAL_LEVEL, DEFAULT_WINDOW};
pub use model::{ForecastModel, TrainingReport};
pub use sequence::SequenceForecaster;
pub use window::TrainingSet;
