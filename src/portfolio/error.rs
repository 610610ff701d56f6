//! # Allocation Errors

use thiserror::Error;

/// Failures surfaced by the allocation entry points.
///
/// Degenerate variance and floating-point drift are recovered internally
/// (documented at the estimator and bisection stages) and never reach the
/// caller; only malformed input does.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum AllocationError {
  /// The return matrix is too small to estimate risk from: at least two
  /// observations of at least two assets are required.
  #[error("return matrix must be at least 2x2, got {rows}x{cols}")]
  InvalidInputShape { rows: usize, cols: usize },
  /// A NaN or infinite observation would poison every downstream matrix.
  #[error("non-finite return at observation {row}, asset {col}")]
  NonFiniteReturn { row: usize, col: usize },
}
