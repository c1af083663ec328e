//! Sliding-window construction of supervised training pairs.

use crate::error::{AirGuardError, Result};

/// Lagged feature windows and the value that follows each window.
///
/// Built fresh for every training call and dropped afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingSet {
    window: usize,
    features: Vec<Vec<f64>>,
    targets: Vec<f64>,
}

impl TrainingSet {
    /// Slide a window of `window` values across `series` with stride 1.
    ///
    /// Pair `i` has features `series[i..i + window]` and target
    /// `series[i + window]`, giving `series.len() - window` pairs.
    ///
    /// # Errors
    /// * `InvalidParameter` if `window` is zero
    /// * `InsufficientData` if `series.len() <= window`
    pub fn build(series: &[f64], window: usize) -> Result<Self> {
        if window == 0 {
            return Err(AirGuardError::InvalidParameter(
                "window must be at least 1".to_string(),
            ));
        }
        if series.len() <= window {
            return Err(AirGuardError::InsufficientData {
                needed: window + 1,
                got: series.len(),
            });
        }

        let (features, targets): (Vec<Vec<f64>>, Vec<f64>) = series
            .windows(window + 1)
            .map(|w| (w[..window].to_vec(), w[window]))
            .unzip();

        Ok(Self {
            window,
            features,
            targets,
        })
    }

    pub fn window(&self) -> usize {
        self.window
    }

    /// Number of (features, target) pairs.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn features(&self) -> &[Vec<f64>] {
        &self.features
    }

    pub fn targets(&self) -> &[f64] {
        &self.targets
    }
}
