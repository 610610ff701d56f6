//! # Correlation Distance
//!
//! $$
//! d_{ij}=\sqrt{\tfrac{1}{2}(1-\rho_{ij})}
//! $$
//!
//! Maps correlation into the metric distance consumed by the clusterer:
//! perfectly correlated assets sit at distance 0, perfectly anti-correlated
//! assets at 1.

use ndarray::Array2;

/// Distance matrix `sqrt((1 - corr) / 2)` with an exactly zero diagonal.
pub fn distance_matrix(corr: &Array2<f64>) -> Array2<f64> {
  let n = corr.nrows();
  let mut dist = Array2::<f64>::zeros((n, n));

  for i in 0..n {
    for j in (i + 1)..n {
      let d = ((1.0 - corr[[i, j]]).max(0.0) / 2.0).sqrt();
      dist[[i, j]] = d;
      dist[[j, i]] = d;
    }
  }

  dist
}
