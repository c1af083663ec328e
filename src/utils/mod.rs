//! Numerical utilities shared by the forecaster and station statistics.

pub mod metrics;
pub mod ols;
pub mod stats;

pub use metrics::{calculate_metrics, AccuracyMetrics};
pub use ols::{ols_fit, OLSResult};
pub use stats::quantile_normal;
