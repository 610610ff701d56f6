//! # Portfolio Allocation
//!
//! $$
//! \sigma_p^2 = \mathbf{w}^\top \Sigma \mathbf{w}
//! $$
//!
//! The Hierarchical Risk Parity pipeline: moment estimation, correlation
//! distance, single-linkage clustering and recursive bisection.

pub mod bisection;
pub mod cluster;
pub mod distance;
pub mod error;
pub mod estimator;
pub mod hrp;

pub use bisection::cluster_variance;
pub use bisection::recursive_bisection;
pub use cluster::MergeEvent;
pub use cluster::leaf_order;
pub use cluster::single_linkage;
pub use distance::distance_matrix;
pub use error::AllocationError;
pub use estimator::correlation_matrix;
pub use estimator::covariance_matrix;
pub use hrp::CorrelationDistance;
pub use hrp::compute_correlation_distance;
pub use hrp::hrp_allocate;
