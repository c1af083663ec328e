//! ConcentrationSeries: hourly PM2.5 readings for one monitoring station.

use crate::error::{AirGuardError, Result};
use chrono::{DateTime, Duration, Utc};

/// An ordered series of PM2.5 readings (µg/m³) with timestamps.
///
/// Values are finite and non-negative. Timestamps are non-decreasing;
/// duplicates are accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct ConcentrationSeries {
    station_id: Option<String>,
    timestamps: Vec<DateTime<Utc>>,
    values: Vec<f64>,
}

impl ConcentrationSeries {
    /// Create a series from timestamps and values.
    pub fn new(timestamps: Vec<DateTime<Utc>>, values: Vec<f64>) -> Result<Self> {
        if timestamps.len() != values.len() {
            return Err(AirGuardError::DimensionMismatch {
                expected: timestamps.len(),
                got: values.len(),
            });
        }

        for i in 1..timestamps.len() {
            if timestamps[i] < timestamps[i - 1] {
                return Err(AirGuardError::TimestampError(format!(
                    "timestamps must be in ascending order (index {} precedes index {})",
                    i,
                    i - 1
                )));
            }
        }

        validate_concentrations(&values)?;

        Ok(Self {
            station_id: None,
            timestamps,
            values,
        })
    }

    /// Create an hourly series starting at `start`.
    pub fn hourly(start: DateTime<Utc>, values: Vec<f64>) -> Result<Self> {
        let timestamps = (0..values.len())
            .map(|i| start + Duration::hours(i as i64))
            .collect();
        Self::new(timestamps, values)
    }

    /// Attach a station identifier.
    pub fn with_station(mut self, station_id: impl Into<String>) -> Self {
        self.station_id = Some(station_id.into());
        self
    }

    pub fn station_id(&self) -> Option<&str> {
        self.station_id.as_deref()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn timestamps(&self) -> &[DateTime<Utc>] {
        &self.timestamps
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn first_timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamps.first().copied()
    }

    pub fn last_timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamps.last().copied()
    }

    /// The `n` most recent values (fewer if the series is shorter).
    pub fn tail(&self, n: usize) -> &[f64] {
        let start = self.values.len().saturating_sub(n);
        &self.values[start..]
    }

    /// Iterate over (timestamp, value) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&DateTime<Utc>, f64)> {
        self.timestamps.iter().zip(self.values.iter().copied())
    }
}

/// Check that every value is a finite, non-negative concentration.
pub(crate) fn validate_concentrations(values: &[f64]) -> Result<()> {
    for (i, &v) in values.iter().enumerate() {
        if !v.is_finite() {
            return Err(AirGuardError::InvalidInput(format!(
                "PM2.5 at index {} is not finite ({})",
                i, v
            )));
        }
        if v < 0.0 {
            return Err(AirGuardError::InvalidInput(format!(
                "PM2.5 at index {} is negative ({})",
                i, v
            )));
        }
    }
    Ok(())
}
