//! Air Quality Index conversion for PM2.5.
//!
//! Stateless: every function here is safe to call from any thread.

mod breakpoints;
mod category;

pub use breakpoints::{compute_aqi, segment_for, AqiBreakpoint, PM25_BREAKPOINTS};
pub use category::{classify, classify_epa, AqiCategory, EpaCategory};

use crate::error::Result;

/// A concentration annotated with its index and categories.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AqiReading {
    pub pm25: f64,
    pub aqi: u32,
    pub category: AqiCategory,
    pub epa_category: EpaCategory,
}

/// Compute the AQI of a concentration and classify it.
pub fn assess(pm25: f64) -> Result<AqiReading> {
    let aqi = compute_aqi(pm25)?;
    Ok(AqiReading {
        pm25,
        aqi,
        category: classify(aqi),
        epa_category: classify_epa(aqi),
    })
}

/// Assess every value of a sequence, failing on the first invalid one.
pub fn assess_all(values: &[f64]) -> Result<Vec<AqiReading>> {
    values.iter().map(|&v| assess(v)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AirGuardError;

    #[test]
    fn assess_bundles_index_and_category() {
        let reading = assess(42.0).unwrap();
        assert_eq!(reading.aqi, 117);
        assert_eq!(reading.category, AqiCategory::Unhealthy);
        assert_eq!(reading.epa_category, EpaCategory::UnhealthyForSensitiveGroups);

        let reading = assess(0.0).unwrap();
        assert_eq!(reading.category, AqiCategory::Good);
    }

    #[test]
    fn assess_all_fails_on_invalid_value() {
        let readings = assess_all(&[5.0, 20.0]).unwrap();
        assert_eq!(readings.len(), 2);
        assert_eq!(readings[1].category, AqiCategory::Moderate);

        assert!(matches!(
            assess_all(&[5.0, -1.0]),
            Err(AirGuardError::InvalidInput(_))
        ));
    }
}
