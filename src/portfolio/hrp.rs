//! # Hierarchical Risk Parity
//!
//! $$
//! \mathbf{w}=\operatorname{HRP}(R),\qquad \sum_i w_i=1,\ w_i>0
//! $$
//!
//! The two public operations of the crate: correlation-distance analysis
//! and the full HRP allocation pipeline. Each call is a pure function of
//! its return matrix; nothing is cached or shared between calls.

use ndarray::Array1;
use ndarray::Array2;
use tracing::debug;

use super::bisection::recursive_bisection;
use super::cluster::leaf_order;
use super::cluster::single_linkage;
use super::distance::distance_matrix;
use super::error::AllocationError;
use super::estimator::correlation_matrix;
use super::estimator::covariance_matrix;

/// Covariance, correlation and distance matrices of one return matrix.
#[derive(Clone, Debug)]
pub struct CorrelationDistance {
  /// Sample covariance of the asset columns.
  pub covariance: Array2<f64>,
  /// Correlation with the zero-variance policy applied.
  pub correlation: Array2<f64>,
  /// Metric distance `sqrt((1 - corr) / 2)`.
  pub distance: Array2<f64>,
}

fn validate_returns(returns: &Array2<f64>) -> Result<(), AllocationError> {
  let (rows, cols) = returns.dim();
  if rows < 2 || cols < 2 {
    return Err(AllocationError::InvalidInputShape { rows, cols });
  }

  for ((row, col), &x) in returns.indexed_iter() {
    if !x.is_finite() {
      return Err(AllocationError::NonFiniteReturn { row, col });
    }
  }

  Ok(())
}

/// Covariance and correlation-distance matrices for a T x N return matrix.
pub fn compute_correlation_distance(
  returns: &Array2<f64>,
) -> Result<CorrelationDistance, AllocationError> {
  validate_returns(returns)?;

  let covariance = covariance_matrix(returns);
  let correlation = correlation_matrix(&covariance);
  let distance = distance_matrix(&correlation);

  Ok(CorrelationDistance {
    covariance,
    correlation,
    distance,
  })
}

/// Full HRP allocation: strictly positive weights summing to one.
pub fn hrp_allocate(returns: &Array2<f64>) -> Result<Array1<f64>, AllocationError> {
  let matrices = compute_correlation_distance(returns)?;
  let n = matrices.covariance.nrows();

  let dendrogram = single_linkage(&matrices.distance);
  let order = leaf_order(n, &dendrogram);
  debug!(assets = n, ?order, "quasi-diagonal ordering computed");

  let weights = recursive_bisection(&matrices.covariance, &order);
  debug!(sum = weights.sum(), "hrp weights allocated");

  Ok(weights)
}
