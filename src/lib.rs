//! # hrp-rs
//!
//! $$
//! d_{ij}=\sqrt{\tfrac{1}{2}(1-\rho_{ij})},\qquad
//! \alpha=1-\frac{V_{\text{left}}}{V_{\text{left}}+V_{\text{right}}}
//! $$
//!
//! Hierarchical Risk Parity portfolio allocation: correlation-distance
//! clustering of assets followed by recursive risk-based bisection of
//! capital, plus static advisor profiles and projection arithmetic.

pub mod advisor;
pub mod portfolio;
pub mod sim;

pub use portfolio::AllocationError;
pub use portfolio::CorrelationDistance;
pub use portfolio::compute_correlation_distance;
pub use portfolio::hrp_allocate;
