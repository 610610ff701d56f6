//! # Advisor Profiles
//!
//! Static model portfolios over the ten-asset demo universe: a
//! risk-tolerance table and an age-banded lifecycle table, each normalized
//! into a weight vector.

use ndarray::Array1;

/// Display labels of the ten-asset model universe the profile tables cover.
pub const MODEL_UNIVERSE: [&str; 10] = [
  "Apple (AAPL)",
  "Microsoft (MSFT)",
  "Amazon (AMZN)",
  "Tesla (TSLA)",
  "Nvidia (NVDA)",
  "JPMorgan Chase (JPM)",
  "Johnson & Johnson (JNJ)",
  "ExxonMobil (XOM)",
  "Berkshire Hathaway (BRK.B)",
  "Meta Platforms (META)",
];

const LOW_PCT: [f64; 10] = [13.0, 13.0, 13.0, 6.0, 7.0, 11.0, 13.0, 13.0, 11.0, 0.0];
const MEDIUM_PCT: [f64; 10] = [10.0; 10];
const HIGH_PCT: [f64; 10] = [6.0, 6.0, 8.0, 15.0, 18.0, 8.0, 7.0, 8.0, 8.0, 6.0];

const EARLY_CAREER_PCT: [f64; 10] = [15.0, 14.0, 13.0, 10.0, 10.0, 8.0, 6.0, 6.0, 9.0, 9.0];
const MID_CAREER_PCT: [f64; 10] = [12.0, 12.0, 10.0, 8.0, 8.0, 10.0, 10.0, 10.0, 10.0, 10.0];
const LATE_CAREER_PCT: [f64; 10] = [10.0, 10.0, 8.0, 6.0, 6.0, 12.0, 14.0, 14.0, 10.0, 10.0];

/// Investor risk tolerance for the static advisor.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RiskTolerance {
  /// Income-tilted, avoids the most volatile names.
  Low,
  /// Equal spread across the universe.
  Medium,
  /// Growth-tilted toward high-volatility names.
  High,
}

impl RiskTolerance {
  /// Parse a string into a [`RiskTolerance`]; unknown inputs fall back to
  /// `Medium`.
  pub fn from_str(s: &str) -> Self {
    match s.to_lowercase().as_str() {
      "low" | "conservative" => Self::Low,
      "high" | "aggressive" => Self::High,
      _ => Self::Medium,
    }
  }
}

fn normalize(raw: &[f64]) -> Array1<f64> {
  let total: f64 = raw.iter().sum();
  Array1::from_iter(raw.iter().map(|&x| x / total))
}

/// Fixed allocation for a risk-tolerance bucket, normalized to sum 1.
pub fn static_weights(risk: RiskTolerance) -> Array1<f64> {
  match risk {
    RiskTolerance::Low => normalize(&LOW_PCT),
    RiskTolerance::Medium => normalize(&MEDIUM_PCT),
    RiskTolerance::High => normalize(&HIGH_PCT),
  }
}

/// Age-banded lifecycle allocation: growth-tilted below 30, balanced below
/// 50, income-tilted from 50 on.
pub fn lifecycle_weights(age: u32) -> Array1<f64> {
  if age < 30 {
    normalize(&EARLY_CAREER_PCT)
  } else if age < 50 {
    normalize(&MID_CAREER_PCT)
  } else {
    normalize(&LATE_CAREER_PCT)
  }
}

#[cfg(test)]
mod tests {
  use approx::assert_abs_diff_eq;

  use super::*;

  #[test]
  fn static_tables_normalize_to_one() {
    for risk in [RiskTolerance::Low, RiskTolerance::Medium, RiskTolerance::High] {
      let w = static_weights(risk);
      assert_eq!(w.len(), MODEL_UNIVERSE.len());
      assert_abs_diff_eq!(w.sum(), 1.0, epsilon = 1e-12);
    }
  }

  #[test]
  fn medium_profile_is_an_equal_spread() {
    let w = static_weights(RiskTolerance::Medium);
    for &x in w.iter() {
      assert_abs_diff_eq!(x, 0.1, epsilon = 1e-12);
    }
  }

  #[test]
  fn low_profile_excludes_its_zero_entry() {
    let w = static_weights(RiskTolerance::Low);
    assert_eq!(w[9], 0.0);
    assert_abs_diff_eq!(w[0], 0.13, epsilon = 1e-12);
  }

  #[test]
  fn high_profile_rescales_its_raw_percentages() {
    let w = static_weights(RiskTolerance::High);
    assert_abs_diff_eq!(w[4], 18.0 / 90.0, epsilon = 1e-12);
  }

  #[test]
  fn lifecycle_bands_switch_at_thirty_and_fifty() {
    assert_abs_diff_eq!(lifecycle_weights(29)[0], 0.15, epsilon = 1e-12);
    assert_abs_diff_eq!(lifecycle_weights(30)[0], 0.12, epsilon = 1e-12);
    assert_abs_diff_eq!(lifecycle_weights(49)[0], 0.12, epsilon = 1e-12);
    assert_abs_diff_eq!(lifecycle_weights(50)[0], 0.10, epsilon = 1e-12);
    assert_abs_diff_eq!(lifecycle_weights(50).sum(), 1.0, epsilon = 1e-12);
  }

  #[test]
  fn risk_tolerance_parses_leniently() {
    assert_eq!(RiskTolerance::from_str("LOW"), RiskTolerance::Low);
    assert_eq!(RiskTolerance::from_str("aggressive"), RiskTolerance::High);
    assert_eq!(RiskTolerance::from_str("whatever"), RiskTolerance::Medium);
  }
}
