//! Per-station statistics and safe-limit alerts.

use crate::core::ConcentrationSeries;
use crate::error::{AirGuardError, Result};
use crate::utils::stats;
use chrono::{DateTime, Utc};

/// Safe PM2.5 limit in µg/m³.
pub const SAFE_PM25_LIMIT: f64 = 50.0;

/// Recommendations attached to every safe-limit alert.
pub const RECOMMENDATIONS: [&str; 3] = [
    "Limit outdoor activities",
    "Wear N95 mask",
    "Use air purifier",
];

/// Summary statistics of one station's readings.
#[derive(Debug, Clone, PartialEq)]
pub struct StationSummary {
    pub station_id: Option<String>,
    pub records: usize,
    pub avg_pm25: f64,
    pub max_pm25: f64,
    pub min_pm25: f64,
    /// Readings strictly above [`SAFE_PM25_LIMIT`].
    pub hours_above_limit: usize,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl StationSummary {
    /// Summarise a station's series.
    ///
    /// # Errors
    /// `EmptyData` when the series has no readings.
    pub fn from_series(series: &ConcentrationSeries) -> Result<Self> {
        let values = series.values();
        let (max_pm25, min_pm25) = match (stats::max(values), stats::min(values)) {
            (Some(max), Some(min)) => (max, min),
            _ => return Err(AirGuardError::EmptyData),
        };

        Ok(Self {
            station_id: series.station_id().map(str::to_owned),
            records: values.len(),
            avg_pm25: stats::mean(values),
            max_pm25,
            min_pm25,
            hours_above_limit: values.iter().filter(|&&v| v > SAFE_PM25_LIMIT).count(),
            start: series.first_timestamp(),
            end: series.last_timestamp(),
        })
    }

    /// Alert raised by this station's peak reading, if any.
    pub fn alert(&self) -> Option<SafetyAlert> {
        SafetyAlert::evaluate(self.max_pm25)
    }
}

/// A reading above the safe limit, with recommendations for the public.
#[derive(Debug, Clone, PartialEq)]
pub struct SafetyAlert {
    pub pm25: f64,
    pub limit: f64,
    pub recommendations: Vec<&'static str>,
}

impl SafetyAlert {
    /// Raise an alert when `max_pm25` exceeds the safe limit.
    pub fn evaluate(max_pm25: f64) -> Option<Self> {
        if max_pm25 > SAFE_PM25_LIMIT {
            tracing::warn!(pm25 = max_pm25, limit = SAFE_PM25_LIMIT, "PM2.5 exceeds safe limit");
            Some(Self {
                pm25: max_pm25,
                limit: SAFE_PM25_LIMIT,
                recommendations: RECOMMENDATIONS.to_vec(),
            })
        } else {
            None
        }
    }
}

/// Alert when the mean of a forecast exceeds the safe limit.
pub fn forecast_alert(forecast: &[f64]) -> Option<SafetyAlert> {
    if forecast.is_empty() {
        return None;
    }
    SafetyAlert::evaluate(stats::mean(forecast))
}
