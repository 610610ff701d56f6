//! # Recursive Bisection
//!
//! $$
//! \alpha=1-\frac{V_{\text{left}}}{V_{\text{left}}+V_{\text{right}}}
//! $$
//!
//! Top-down capital split along the quasi-diagonal ordering: each cluster is
//! halved and its halves funded inversely to their risk.

use ndarray::Array1;
use ndarray::Array2;
use tracing::trace;

const VAR_EPS: f64 = 1e-30;
// Keeps both halves strictly funded when one half carries zero variance.
const ALPHA_FLOOR: f64 = 1e-12;

/// Equal-weighted portfolio variance of the assets in `members`.
///
/// Each of the `k` members carries weight `1/k`; the result is
/// `w' Cov_slice w` over the covariance sub-matrix of the members.
pub fn cluster_variance(cov: &Array2<f64>, members: &[usize]) -> f64 {
  let k = members.len();
  if k == 0 {
    return 0.0;
  }

  let w = 1.0 / k as f64;
  let mut var = 0.0;
  for &a in members {
    for &b in members {
      var += w * w * cov[[a, b]];
    }
  }

  var.max(0.0)
}

/// Recursive bisection over `order`, returning normalized weights.
///
/// Runs as a work-list of half-open index ranges over `order` rather than
/// by recursion; an odd-length cluster gives its left half the smaller
/// share. When both halves carry zero variance the split falls back to
/// equal, and the allocation factor is otherwise clamped away from 0 and 1
/// so a zero-variance half can never zero out its sibling.
pub fn recursive_bisection(cov: &Array2<f64>, order: &[usize]) -> Array1<f64> {
  let n = cov.nrows();
  let mut weights = Array1::<f64>::ones(n);
  let mut work = vec![(0usize, order.len())];

  while let Some((start, end)) = work.pop() {
    if end - start < 2 {
      continue;
    }

    let mid = start + (end - start) / 2;
    let left = &order[start..mid];
    let right = &order[mid..end];

    let left_var = cluster_variance(cov, left);
    let right_var = cluster_variance(cov, right);
    let denom = left_var + right_var;

    let alpha = if denom > VAR_EPS {
      (1.0 - left_var / denom).clamp(ALPHA_FLOOR, 1.0 - ALPHA_FLOOR)
    } else {
      0.5
    };
    trace!(start, end, alpha, "bisection split");

    for &i in left {
      weights[i] *= alpha;
    }
    for &i in right {
      weights[i] *= 1.0 - alpha;
    }

    work.push((start, mid));
    work.push((mid, end));
  }

  let total = weights.sum();
  if total > 0.0 {
    weights /= total;
  }

  weights
}

#[cfg(test)]
mod tests {
  use approx::assert_abs_diff_eq;
  use ndarray::Array2;
  use ndarray::array;

  use super::*;

  #[test]
  fn cluster_variance_uses_equal_member_weights() {
    let cov = array![[4.0, 1.0], [1.0, 1.0]];
    // w = [1/2, 1/2]: (4 + 1 + 1 + 1) / 4
    assert_abs_diff_eq!(cluster_variance(&cov, &[0, 1]), 1.75, epsilon = 1e-12);
    assert_abs_diff_eq!(cluster_variance(&cov, &[0]), 4.0, epsilon = 1e-12);
    assert_eq!(cluster_variance(&cov, &[]), 0.0);
  }

  #[test]
  fn two_assets_split_inversely_to_variance() {
    let cov = array![[4.0, 0.0], [0.0, 1.0]];
    let w = recursive_bisection(&cov, &[0, 1]);

    assert_abs_diff_eq!(w[0], 0.2, epsilon = 1e-12);
    assert_abs_diff_eq!(w[1], 0.8, epsilon = 1e-12);
  }

  #[test]
  fn odd_cluster_gives_left_half_the_smaller_share() {
    // Uncorrelated diag [1, 2, 4]: top split is {0} vs {1, 2} with
    // vars 1 and 1.5, then {1} vs {2} with vars 2 and 4.
    let cov = array![[1.0, 0.0, 0.0], [0.0, 2.0, 0.0], [0.0, 0.0, 4.0]];
    let w = recursive_bisection(&cov, &[0, 1, 2]);

    assert_abs_diff_eq!(w[0], 0.6, epsilon = 1e-12);
    assert_abs_diff_eq!(w[1], 0.4 * 2.0 / 3.0, epsilon = 1e-12);
    assert_abs_diff_eq!(w[2], 0.4 / 3.0, epsilon = 1e-12);
    assert_abs_diff_eq!(w.sum(), 1.0, epsilon = 1e-12);
  }

  #[test]
  fn all_zero_covariance_falls_back_to_equal_split() {
    let cov = Array2::<f64>::zeros((4, 4));
    let w = recursive_bisection(&cov, &[0, 1, 2, 3]);

    for &x in w.iter() {
      assert_abs_diff_eq!(x, 0.25, epsilon = 1e-12);
    }
  }

  #[test]
  fn zero_variance_half_keeps_sibling_strictly_funded() {
    let cov = array![[0.0, 0.0], [0.0, 1.0]];
    let w = recursive_bisection(&cov, &[0, 1]);

    assert!(w[1] > 0.0, "sibling of a riskless asset must keep weight");
    assert!(w[0] > w[1]);
    assert_abs_diff_eq!(w.sum(), 1.0, epsilon = 1e-12);
  }
}
