//! # airguard
//!
//! PM2.5 forecasting and Air Quality Index computation for monitoring
//! stations.
//!
//! Provides a sliding-window autoregressive forecaster fitted by least
//! squares, US EPA piecewise-linear AQI conversion with category
//! classification, per-station statistics with safe-limit alerts, and
//! synthetic hourly series for testing.

#![allow(clippy::needless_range_loop)]

pub mod aqi;
pub mod core;
pub mod error;
pub mod forecaster;
pub mod station;
pub mod synthetic;
pub mod utils;

pub use error::{AirGuardError, Result};

pub mod prelude {
    pub use crate::aqi::{assess, classify, compute_aqi, AqiCategory, AqiReading, EpaCategory};
    pub use crate::core::{ConcentrationSeries, Forecast};
    pub use crate::error::{AirGuardError, Result};
    pub use crate::forecaster::{
        ForecastModel, ForecasterConfig, SequenceForecaster, TrainingReport,
    };
    pub use crate::station::{SafetyAlert, StationSummary, SAFE_PM25_LIMIT};
}
