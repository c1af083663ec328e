//! Core data structures for concentration series and forecasts.

mod forecast;
mod series;

pub use forecast::Forecast;
pub use series::ConcentrationSeries;
pub(crate) use series::validate_concentrations;
