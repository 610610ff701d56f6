//! # Return Projection
//!
//! $$
//! V_y = V_0\,(1+r)^y
//! $$
//!
//! Expected-return annualization and compound growth arithmetic for a fixed
//! weight vector.

use ndarray::Array1;
use ndarray::Array2;

/// Trading days used to annualize mean daily returns.
pub const TRADING_DAYS: f64 = 252.0;

/// Annualized expected portfolio return under `weights`.
///
/// Mean daily return per asset, dotted with the weights, scaled by the
/// trading-day count.
pub fn expected_annual_return(weights: &Array1<f64>, returns: &Array2<f64>) -> f64 {
  let t = returns.nrows();
  if t == 0 {
    return 0.0;
  }

  let mut acc = 0.0;
  for (j, &w) in weights.iter().enumerate().take(returns.ncols()) {
    acc += w * returns.column(j).sum() / t as f64;
  }

  acc * TRADING_DAYS
}

/// Projected portfolio values for years `0..=years` under annual
/// compounding.
pub fn growth_projection(initial: f64, annual_return: f64, years: u32) -> Vec<f64> {
  (0..=years)
    .map(|year| initial * (1.0 + annual_return).powi(year as i32))
    .collect()
}

#[cfg(test)]
mod tests {
  use approx::assert_abs_diff_eq;
  use ndarray::Array2;
  use ndarray::array;

  use super::*;

  #[test]
  fn annualizes_the_weighted_mean_daily_return() {
    let returns = array![[0.01, 0.03], [0.01, 0.03]];
    let weights = array![0.5, 0.5];

    let annual = expected_annual_return(&weights, &returns);
    assert_abs_diff_eq!(annual, 0.02 * 252.0, epsilon = 1e-12);
  }

  #[test]
  fn empty_history_projects_zero_return() {
    let returns = Array2::<f64>::zeros((0, 2));
    let weights = array![0.5, 0.5];
    assert_eq!(expected_annual_return(&weights, &returns), 0.0);
  }

  #[test]
  fn growth_curve_compounds_from_the_initial_value() {
    let curve = growth_projection(10_000.0, 0.05, 3);

    assert_eq!(curve.len(), 4);
    assert_abs_diff_eq!(curve[0], 10_000.0, epsilon = 1e-9);
    assert_abs_diff_eq!(curve[1], 10_500.0, epsilon = 1e-9);
    assert_abs_diff_eq!(curve[3], 10_000.0 * 1.05_f64.powi(3), epsilon = 1e-9);
  }
}
