use anyhow::Result;
use prettytable::Table;
use prettytable::row;

use hrp_rs::advisor::MODEL_UNIVERSE;
use hrp_rs::advisor::RiskTolerance;
use hrp_rs::advisor::expected_annual_return;
use hrp_rs::advisor::growth_projection;
use hrp_rs::advisor::lifecycle_weights;
use hrp_rs::advisor::static_weights;
use hrp_rs::hrp_allocate;
use hrp_rs::sim::standard_returns;

fn main() -> Result<()> {
  let returns = standard_returns(252, MODEL_UNIVERSE.len(), 0.01, 42);

  let static_w = static_weights(RiskTolerance::Medium);
  let lifecycle_w = lifecycle_weights(30);
  let hrp_w = hrp_allocate(&returns)?;

  let mut table = Table::new();
  table.add_row(row!["Asset", "Static %", "Lifecycle %", "HRP %"]);
  for (i, label) in MODEL_UNIVERSE.iter().enumerate() {
    table.add_row(row![
      label,
      format!("{:.2}", static_w[i] * 100.0),
      format!("{:.2}", lifecycle_w[i] * 100.0),
      format!("{:.2}", hrp_w[i] * 100.0),
    ]);
  }
  table.printstd();

  let annual = expected_annual_return(&hrp_w, &returns);
  println!("\nExpected annual return (HRP): {:.2}%", annual * 100.0);

  println!("Projected value of $10,000:");
  let curve = growth_projection(10_000.0, annual, 20);
  for (year, value) in curve.iter().enumerate().step_by(5) {
    println!("  year {year:>2}: {value:>12.2}");
  }

  Ok(())
}
