//! Ordinary Least Squares (OLS) regression over a dense design matrix.
//!
//! Used by the sliding-window forecaster: each row of the design matrix is a
//! window of past concentrations, the target is the value that follows it.
//! The intercept is fitted without penalty by centering features and targets
//! before solving the normal equations.

use crate::error::{AirGuardError, Result};

/// Relative ridge applied on the first factorisation attempt.
const INITIAL_RIDGE: f64 = 1e-10;
/// Largest relative ridge tried before giving up.
const MAX_RIDGE: f64 = 1e-2;

/// OLS regression coefficients and intercept.
#[derive(Debug, Clone, PartialEq)]
pub struct OLSResult {
    /// Regression coefficients (one per feature column).
    pub coefficients: Vec<f64>,
    /// Intercept term.
    pub intercept: f64,
    /// Absolute ridge added to the Gram diagonal to obtain a solution.
    pub ridge: f64,
}

impl OLSResult {
    /// Predict a single observation.
    pub fn predict_one(&self, features: &[f64]) -> Result<f64> {
        if features.len() != self.coefficients.len() {
            return Err(AirGuardError::DimensionMismatch {
                expected: self.coefficients.len(),
                got: features.len(),
            });
        }
        Ok(self.intercept
            + self
                .coefficients
                .iter()
                .zip(features)
                .map(|(b, x)| b * x)
                .sum::<f64>())
    }

    /// Predict every row of a design matrix.
    pub fn predict(&self, rows: &[Vec<f64>]) -> Result<Vec<f64>> {
        rows.iter().map(|row| self.predict_one(row)).collect()
    }

    /// Get the number of feature columns.
    pub fn num_features(&self) -> usize {
        self.coefficients.len()
    }
}

/// Fit OLS regression: y = intercept + X @ coefficients
///
/// Solves the centered normal equations with Cholesky decomposition. When the
/// Gram matrix is singular (collinear windows, constant series) a ridge term
/// is added and escalated tenfold until the factorisation succeeds, which
/// approximates the minimum-norm least-squares solution.
///
/// # Arguments
/// * `rows` - Design matrix, one row per observation, all rows equal length
/// * `y` - Target values (one per row)
pub fn ols_fit(rows: &[Vec<f64>], y: &[f64]) -> Result<OLSResult> {
    let n = y.len();

    if n == 0 {
        return Err(AirGuardError::InsufficientData { needed: 1, got: 0 });
    }

    if rows.len() != n {
        return Err(AirGuardError::DimensionMismatch {
            expected: n,
            got: rows.len(),
        });
    }

    let k = rows[0].len();
    for row in rows {
        if row.len() != k {
            return Err(AirGuardError::DimensionMismatch {
                expected: k,
                got: row.len(),
            });
        }
    }

    let y_mean = y.iter().sum::<f64>() / n as f64;
    if k == 0 {
        return Ok(OLSResult {
            coefficients: vec![],
            intercept: y_mean,
            ridge: 0.0,
        });
    }

    let mut x_mean = vec![0.0; k];
    for row in rows {
        for (m, x) in x_mean.iter_mut().zip(row) {
            *m += x;
        }
    }
    for m in &mut x_mean {
        *m /= n as f64;
    }

    // X'X and X'y over centered data
    let mut xtx = vec![vec![0.0; k]; k];
    let mut xty = vec![0.0; k];
    let mut centered = vec![0.0; k];

    for (row, &y_obs) in rows.iter().zip(y) {
        for j in 0..k {
            centered[j] = row[j] - x_mean[j];
        }
        let yc = y_obs - y_mean;
        for i in 0..k {
            let xi = centered[i];
            xty[i] += xi * yc;
            for j in 0..=i {
                xtx[i][j] += xi * centered[j];
            }
        }
    }
    for i in 0..k {
        for j in 0..i {
            xtx[j][i] = xtx[i][j];
        }
    }

    let mean_diag = (0..k).map(|i| xtx[i][i]).sum::<f64>() / k as f64;
    let scale = mean_diag.max(1.0);

    let mut relative = INITIAL_RIDGE;
    while relative <= MAX_RIDGE {
        let ridge = relative * scale;
        let mut a = xtx.clone();
        for (i, row) in a.iter_mut().enumerate() {
            row[i] += ridge;
        }

        if let Some(beta) = solve_symmetric(&a, &xty) {
            if beta.iter().all(|b| b.is_finite()) {
                let intercept = y_mean
                    - beta
                        .iter()
                        .zip(&x_mean)
                        .map(|(b, m)| b * m)
                        .sum::<f64>();
                return Ok(OLSResult {
                    coefficients: beta,
                    intercept,
                    ridge,
                });
            }
        }

        tracing::debug!(ridge, "normal equations not positive definite, escalating ridge");
        relative *= 10.0;
    }

    Err(AirGuardError::ComputationError(
        "OLS regression failed: normal equations could not be factorised".into(),
    ))
}

/// Solve symmetric positive definite system using Cholesky decomposition.
///
/// Solves A @ x = b where A is symmetric positive definite.
fn solve_symmetric(a: &[Vec<f64>], b: &[f64]) -> Option<Vec<f64>> {
    let n = b.len();
    if n == 0 || a.len() != n {
        return None;
    }

    // Cholesky decomposition A = L @ L'
    let mut l = vec![vec![0.0; n]; n];

    for i in 0..n {
        for j in 0..=i {
            let mut sum = a[i][j];
            for k in 0..j {
                sum -= l[i][k] * l[j][k];
            }

            if i == j {
                if sum <= 0.0 {
                    return None; // Not positive definite
                }
                l[i][j] = sum.sqrt();
            } else {
                l[i][j] = sum / l[j][j];
            }
        }
    }

    // Forward substitution: L @ y = b
    let mut y = vec![0.0; n];
    for i in 0..n {
        let mut sum = b[i];
        for j in 0..i {
            sum -= l[i][j] * y[j];
        }
        y[i] = sum / l[i][i];
    }

    // Backward substitution: L' @ x = y
    let mut x = vec![0.0; n];
    for i in (0..n).rev() {
        let mut sum = y[i];
        for j in (i + 1)..n {
            sum -= l[j][i] * x[j];
        }
        x[i] = sum / l[i][i];
    }

    Some(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn ols_fit_simple_linear() {
        // y = 2 + 3*x
        let rows: Vec<Vec<f64>> = (1..=5).map(|x| vec![x as f64]).collect();
        let y = vec![5.0, 8.0, 11.0, 14.0, 17.0];

        let result = ols_fit(&rows, &y).unwrap();

        assert_relative_eq!(result.intercept, 2.0, epsilon = 1e-6);
        assert_eq!(result.num_features(), 1);
        assert_relative_eq!(result.coefficients[0], 3.0, epsilon = 1e-6);
    }

    #[test]
    fn ols_fit_multiple_features() {
        // y = 1 + 2*x1 + 3*x2
        let x1 = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        let x2 = [0.5, 2.5, 1.0, 3.0, 1.5, 3.5, 2.0, 4.0];
        let rows: Vec<Vec<f64>> = x1.iter().zip(&x2).map(|(a, b)| vec![*a, *b]).collect();
        let y: Vec<f64> = rows.iter().map(|r| 1.0 + 2.0 * r[0] + 3.0 * r[1]).collect();

        let result = ols_fit(&rows, &y).unwrap();

        assert_relative_eq!(result.intercept, 1.0, epsilon = 1e-4);
        assert_relative_eq!(result.coefficients[0], 2.0, epsilon = 1e-4);
        assert_relative_eq!(result.coefficients[1], 3.0, epsilon = 1e-4);
    }

    #[test]
    fn ols_predict() {
        let rows: Vec<Vec<f64>> = (1..=5).map(|x| vec![x as f64]).collect();
        let y = vec![5.0, 8.0, 11.0, 14.0, 17.0];
        let result = ols_fit(&rows, &y).unwrap();

        let predictions = result
            .predict(&[vec![6.0], vec![7.0], vec![8.0]])
            .unwrap();

        assert_eq!(predictions.len(), 3);
        assert_relative_eq!(predictions[0], 20.0, epsilon = 1e-6);
        assert_relative_eq!(predictions[1], 23.0, epsilon = 1e-6);
        assert_relative_eq!(predictions[2], 26.0, epsilon = 1e-6);
    }

    #[test]
    fn collinear_features_still_fit() {
        // x2 is an exact copy of x1: Gram matrix is singular
        let rows: Vec<Vec<f64>> = (0..10).map(|i| vec![i as f64, i as f64]).collect();
        let y: Vec<f64> = (0..10).map(|i| 1.0 + 4.0 * i as f64).collect();

        let result = ols_fit(&rows, &y).unwrap();
        let fitted = result.predict(&rows).unwrap();

        for (f, t) in fitted.iter().zip(&y) {
            assert_relative_eq!(*f, *t, epsilon = 1e-4);
        }
        // Minimum-norm solution splits the weight evenly
        assert_relative_eq!(result.coefficients[0], 2.0, epsilon = 1e-4);
        assert_relative_eq!(result.coefficients[1], 2.0, epsilon = 1e-4);
    }

    #[test]
    fn constant_features_fall_back_to_mean() {
        let rows = vec![vec![3.0]; 4];
        let y = vec![1.0, 2.0, 3.0, 4.0];

        let result = ols_fit(&rows, &y).unwrap();
        assert_relative_eq!(result.predict_one(&[3.0]).unwrap(), 2.5, epsilon = 1e-6);
    }

    #[test]
    fn ols_fit_dimension_mismatch() {
        let rows = vec![vec![1.0], vec![2.0]];
        let y = vec![1.0, 2.0, 3.0];
        assert!(matches!(
            ols_fit(&rows, &y),
            Err(AirGuardError::DimensionMismatch { .. })
        ));

        let ragged = vec![vec![1.0], vec![2.0, 3.0]];
        assert!(ols_fit(&ragged, &[1.0, 2.0]).is_err());
    }

    #[test]
    fn ols_fit_empty() {
        assert!(matches!(
            ols_fit(&[], &[]),
            Err(AirGuardError::InsufficientData { needed: 1, got: 0 })
        ));
    }

    #[test]
    fn predict_one_rejects_wrong_width() {
        let rows: Vec<Vec<f64>> = (1..=5).map(|x| vec![x as f64]).collect();
        let y = vec![5.0, 8.0, 11.0, 14.0, 17.0];
        let result = ols_fit(&rows, &y).unwrap();

        assert!(result.predict_one(&[1.0, 2.0]).is_err());
    }

    #[test]
    fn ols_with_noise() {
        let n = 100;
        let rows: Vec<Vec<f64>> = (0..n).map(|i| vec![i as f64 * 0.1]).collect();
        let y: Vec<f64> = rows
            .iter()
            .enumerate()
            .map(|(i, r)| 2.5 + 1.7 * r[0] + (i as f64 * 0.13).sin() * 0.1)
            .collect();

        let result = ols_fit(&rows, &y).unwrap();

        assert_relative_eq!(result.intercept, 2.5, epsilon = 0.1);
        assert_relative_eq!(result.coefficients[0], 1.7, epsilon = 0.1);
    }
}
