//! AQI categories.

use std::fmt;

/// Three-tier category used for alerting.
///
/// This is a simplification of the six-tier EPA scale; see [`EpaCategory`]
/// for the full scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AqiCategory {
    Good,
    Moderate,
    Unhealthy,
}

impl AqiCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::Unhealthy => "Unhealthy",
        }
    }
}

impl fmt::Display for AqiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Official six-tier EPA category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EpaCategory {
    Good,
    Moderate,
    UnhealthyForSensitiveGroups,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl EpaCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            Self::Unhealthy => "Unhealthy",
            Self::VeryUnhealthy => "Very Unhealthy",
            Self::Hazardous => "Hazardous",
        }
    }
}

impl fmt::Display for EpaCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Map an AQI score to the three-tier category.
pub fn classify(aqi: u32) -> AqiCategory {
    match aqi {
        0..=50 => AqiCategory::Good,
        51..=100 => AqiCategory::Moderate,
        _ => AqiCategory::Unhealthy,
    }
}

/// Map an AQI score to the six-tier EPA category.
pub fn classify_epa(aqi: u32) -> EpaCategory {
    match aqi {
        0..=50 => EpaCategory::Good,
        51..=100 => EpaCategory::Moderate,
        101..=150 => EpaCategory::UnhealthyForSensitiveGroups,
        151..=200 => EpaCategory::Unhealthy,
        201..=300 => EpaCategory::VeryUnhealthy,
        _ => EpaCategory::Hazardous,
    }
}
