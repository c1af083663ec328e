//! Forecast result structure for holding predictions.

/// A forecast result containing point predictions and optional intervals.
///
/// Steps are ordered: index 0 is one hour ahead of the seed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Forecast {
    point: Vec<f64>,
    lower: Option<Vec<f64>>,
    upper: Option<Vec<f64>>,
    /// Standard error per step (grows with horizon).
    std_errors: Option<Vec<f64>>,
    /// Confidence level the bounds were computed for.
    level: Option<f64>,
}

impl Forecast {
    /// Create an empty forecast.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a forecast from point predictions.
    pub fn from_values(values: Vec<f64>) -> Self {
        Self {
            point: values,
            ..Self::default()
        }
    }

    /// Create a forecast with prediction intervals and per-step standard errors.
    pub fn from_values_with_intervals(
        values: Vec<f64>,
        lower: Vec<f64>,
        upper: Vec<f64>,
        std_errors: Vec<f64>,
        level: f64,
    ) -> Self {
        Self {
            point: values,
            lower: Some(lower),
            upper: Some(upper),
            std_errors: Some(std_errors),
            level: Some(level),
        }
    }

    /// Get the forecast horizon (number of steps).
    pub fn horizon(&self) -> usize {
        self.point.len()
    }

    /// Check if forecast is empty.
    pub fn is_empty(&self) -> bool {
        self.point.is_empty()
    }

    /// Point predictions.
    pub fn values(&self) -> &[f64] {
        &self.point
    }

    /// Consume the forecast, returning the point predictions.
    pub fn into_values(self) -> Vec<f64> {
        self.point
    }

    /// Check if interval bounds are available.
    pub fn has_intervals(&self) -> bool {
        self.lower.is_some() && self.upper.is_some()
    }

    /// Lower interval bounds.
    pub fn lower(&self) -> Option<&[f64]> {
        self.lower.as_deref()
    }

    /// Upper interval bounds.
    pub fn upper(&self) -> Option<&[f64]> {
        self.upper.as_deref()
    }

    /// Per-step standard errors.
    pub fn std_errors(&self) -> Option<&[f64]> {
        self.std_errors.as_deref()
    }

    /// Confidence level of the interval bounds.
    pub fn level(&self) -> Option<f64> {
        self.level
    }

    /// Mean of the point predictions, `None` when empty.
    pub fn mean(&self) -> Option<f64> {
        if self.point.is_empty() {
            return None;
        }
        Some(self.point.iter().sum::<f64>() / self.point.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forecast_empty_state_reflects_missing_values() {
        let forecast = Forecast::new();
        assert!(forecast.is_empty());
        assert_eq!(forecast.horizon(), 0);
        assert!(forecast.mean().is_none());
        assert!(!forecast.has_intervals());
    }

    #[test]
    fn forecast_from_values() {
        let forecast = Forecast::from_values(vec![1.0, 2.0, 3.0, 4.0]);

        assert!(!forecast.is_empty());
        assert_eq!(forecast.horizon(), 4);
        assert_eq!(forecast.values(), &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(forecast.mean(), Some(2.5));
        assert!(forecast.lower().is_none());
        assert!(forecast.std_errors().is_none());
    }

    #[test]
    fn forecast_from_values_with_intervals() {
        let forecast = Forecast::from_values_with_intervals(
            vec![2.0, 3.0],
            vec![1.0, 2.0],
            vec![3.0, 4.0],
            vec![0.5, 0.7],
            0.95,
        );

        assert!(forecast.has_intervals());
        assert_eq!(forecast.values(), &[2.0, 3.0]);
        assert_eq!(forecast.lower().unwrap(), &[1.0, 2.0]);
        assert_eq!(forecast.upper().unwrap(), &[3.0, 4.0]);
        assert_eq!(forecast.std_errors().unwrap(), &[0.5, 0.7]);
        assert_eq!(forecast.level(), Some(0.95));
        assert_eq!(forecast.into_values(), vec![2.0, 3.0]);
    }
}
