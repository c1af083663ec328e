//! US EPA PM2.5 breakpoint table and piecewise-linear interpolation.

use crate::error::{AirGuardError, Result};

/// One segment of the breakpoint table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AqiBreakpoint {
    /// Lower concentration bound (µg/m³).
    pub pm25_lo: f64,
    /// Upper concentration bound (µg/m³), inclusive.
    pub pm25_hi: f64,
    /// AQI at `pm25_lo`.
    pub aqi_lo: u32,
    /// AQI at `pm25_hi`.
    pub aqi_hi: u32,
}

impl AqiBreakpoint {
    const fn new(pm25_lo: f64, pm25_hi: f64, aqi_lo: u32, aqi_hi: u32) -> Self {
        Self {
            pm25_lo,
            pm25_hi,
            aqi_lo,
            aqi_hi,
        }
    }

    /// AQI units per µg/m³ within this segment.
    pub fn slope(&self) -> f64 {
        (self.aqi_hi - self.aqi_lo) as f64 / (self.pm25_hi - self.pm25_lo)
    }

    /// Interpolated (untruncated) index for a concentration.
    pub fn interpolate(&self, pm25: f64) -> f64 {
        self.aqi_lo as f64 + self.slope() * (pm25 - self.pm25_lo)
    }
}

/// PM2.5 breakpoints. The last segment is extrapolated past its upper bound
/// with the same slope.
pub static PM25_BREAKPOINTS: [AqiBreakpoint; 5] = [
    AqiBreakpoint::new(0.0, 12.0, 0, 50),
    AqiBreakpoint::new(12.1, 35.4, 51, 100),
    AqiBreakpoint::new(35.5, 55.4, 101, 150),
    AqiBreakpoint::new(55.5, 150.4, 151, 200),
    AqiBreakpoint::new(150.5, 250.5, 201, 300),
];

/// Absorbs binary representation error at exact breakpoints before truncating.
const TRUNCATION_TOLERANCE: f64 = 1e-9;

/// Segment responsible for a concentration.
///
/// Upper bounds are inclusive, so values in the 0.1-wide gaps between
/// segments (e.g. 12.05) fall into the next segment.
pub fn segment_for(pm25: f64) -> &'static AqiBreakpoint {
    PM25_BREAKPOINTS
        .iter()
        .find(|bp| pm25 <= bp.pm25_hi)
        .unwrap_or(&PM25_BREAKPOINTS[PM25_BREAKPOINTS.len() - 1])
}

/// Convert a PM2.5 concentration (µg/m³) to an AQI score.
///
/// The interpolated index is truncated toward zero rather than rounded, so
/// results sit up to one unit below the EPA-rounded value.
///
/// # Errors
/// `InvalidInput` for negative, NaN or infinite concentrations.
///
/// # Example
/// ```
/// use airguard::aqi::compute_aqi;
///
/// assert_eq!(compute_aqi(0.0).unwrap(), 0);
/// assert_eq!(compute_aqi(12.0).unwrap(), 50);
/// assert_eq!(compute_aqi(35.5).unwrap(), 101);
/// ```
pub fn compute_aqi(pm25: f64) -> Result<u32> {
    if !pm25.is_finite() {
        return Err(AirGuardError::InvalidInput(format!(
            "PM2.5 must be finite, got {}",
            pm25
        )));
    }
    if pm25 < 0.0 {
        return Err(AirGuardError::InvalidInput(format!(
            "PM2.5 must be non-negative, got {}",
            pm25
        )));
    }

    let raw = segment_for(pm25).interpolate(pm25) + TRUNCATION_TOLERANCE;
    // `as` saturates at u32::MAX for extreme concentrations
    Ok(raw.trunc().max(0.0) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_are_contiguous_and_ordered() {
        assert_eq!(PM25_BREAKPOINTS[0].pm25_lo, 0.0);
        for pair in PM25_BREAKPOINTS.windows(2) {
            assert!(pair[0].pm25_hi < pair[1].pm25_lo);
            assert!((pair[1].pm25_lo - pair[0].pm25_hi - 0.1).abs() < 1e-9);
            assert_eq!(pair[0].aqi_hi + 1, pair[1].aqi_lo);
        }
    }

    #[test]
    fn zero_is_zero() {
        assert_eq!(compute_aqi(0.0).unwrap(), 0);
    }

    #[test]
    fn exact_breakpoints() {
        assert_eq!(compute_aqi(12.0).unwrap(), 50);
        assert_eq!(compute_aqi(12.1).unwrap(), 51);
        assert_eq!(compute_aqi(35.4).unwrap(), 100);
        assert_eq!(compute_aqi(35.5).unwrap(), 101);
        assert_eq!(compute_aqi(55.4).unwrap(), 150);
        assert_eq!(compute_aqi(55.5).unwrap(), 151);
        assert_eq!(compute_aqi(150.4).unwrap(), 200);
        assert_eq!(compute_aqi(150.5).unwrap(), 201);
    }

    #[test]
    fn reference_samples_truncate() {
        // 25 -> 51 + 49/23.3 * 12.9 = 78.13
        assert_eq!(compute_aqi(25.0).unwrap(), 78);
        // 42 -> 101 + 49/19.9 * 6.5 = 117.0
        assert_eq!(compute_aqi(42.0).unwrap(), 117);
        // 65 -> 151 + 49/94.9 * 9.5 = 155.9
        assert_eq!(compute_aqi(65.0).unwrap(), 155);
        // 120 -> 151 + 49/94.9 * 64.5 = 184.3
        assert_eq!(compute_aqi(120.0).unwrap(), 184);
    }

    #[test]
    fn gap_values_stay_at_boundary() {
        assert_eq!(compute_aqi(12.05).unwrap(), 50);
        assert_eq!(compute_aqi(35.45).unwrap(), 100);
        assert_eq!(compute_aqi(55.45).unwrap(), 150);
    }

    #[test]
    fn extrapolates_beyond_last_segment() {
        assert_eq!(compute_aqi(250.5).unwrap(), 300);
        // 350.5 -> 201 + 0.99 * 200 = 399
        assert_eq!(compute_aqi(350.5).unwrap(), 399);
        assert_eq!(compute_aqi(1e12).unwrap(), u32::MAX);
    }

    #[test]
    fn rejects_invalid_concentrations() {
        assert!(matches!(
            compute_aqi(-0.1),
            Err(AirGuardError::InvalidInput(_))
        ));
        assert!(matches!(
            compute_aqi(f64::NAN),
            Err(AirGuardError::InvalidInput(_))
        ));
        assert!(matches!(
            compute_aqi(f64::INFINITY),
            Err(AirGuardError::InvalidInput(_))
        ));
    }
}
