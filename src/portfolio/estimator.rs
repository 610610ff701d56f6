//! # Covariance & Correlation Estimation
//!
//! $$
//! \hat\Sigma_{ij}=\frac{1}{T-1}\sum_{t=1}^{T}(r_{ti}-\bar r_i)(r_{tj}-\bar r_j)
//! $$
//!
//! Sample moment estimators over the columns of a T x N return matrix.

use ndarray::Array2;

const SIGMA_EPS: f64 = 1e-15;

/// Sample covariance matrix of the return-matrix columns.
pub fn covariance_matrix(returns: &Array2<f64>) -> Array2<f64> {
  let t = returns.nrows();
  let n = returns.ncols();
  let mut cov = Array2::<f64>::zeros((n, n));

  if t < 2 {
    return cov;
  }

  let means: Vec<f64> = (0..n)
    .map(|j| returns.column(j).sum() / t as f64)
    .collect();

  for i in 0..n {
    let col_i = returns.column(i);
    for j in i..n {
      let col_j = returns.column(j);
      let mut acc = 0.0;
      for k in 0..t {
        acc += (col_i[k] - means[i]) * (col_j[k] - means[j]);
      }
      let c = acc / (t - 1) as f64;
      cov[[i, j]] = c;
      cov[[j, i]] = c;
    }
  }

  cov
}

/// Correlation matrix derived from a covariance matrix.
///
/// The diagonal is pinned to exactly 1. Any entry involving a zero-variance
/// asset is set to 0 instead of dividing by a vanishing standard deviation;
/// off-diagonal entries are clamped to [-1, 1].
pub fn correlation_matrix(cov: &Array2<f64>) -> Array2<f64> {
  let n = cov.nrows();
  let sigmas: Vec<f64> = (0..n).map(|i| cov[[i, i]].max(0.0).sqrt()).collect();
  let mut corr = Array2::<f64>::zeros((n, n));

  for i in 0..n {
    corr[[i, i]] = 1.0;
    for j in (i + 1)..n {
      let denom = sigmas[i] * sigmas[j];
      let r = if denom < SIGMA_EPS {
        0.0
      } else {
        (cov[[i, j]] / denom).clamp(-1.0, 1.0)
      };
      corr[[i, j]] = r;
      corr[[j, i]] = r;
    }
  }

  corr
}
