//! # Synthetic Returns
//!
//! $$
//! r_{ti}\sim s\cdot\mathcal N(0,1)\quad\text{i.i.d.}
//! $$
//!
//! Seeded return-matrix fixtures for demos and tests. The seed is an
//! explicit parameter; the allocation pipeline itself never touches a
//! generator.

use ndarray::Array2;
use ndarray_rand::RandomExt;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::StandardNormal;

/// T x N matrix of i.i.d. standard-normal draws scaled by `scale`.
///
/// The same seed always yields the same matrix.
pub fn standard_returns(t: usize, n: usize, scale: f64, seed: u64) -> Array2<f64> {
  let mut rng = StdRng::seed_from_u64(seed);
  Array2::<f64>::random_using((t, n), StandardNormal, &mut rng) * scale
}
