//! Decompose a synthetic quarterly GDP series with the Hodrick-Prescott
//! filter and print the first few trend/cycle values.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use trend_cycle::data::Dataset;
use trend_cycle::engine::{run_filters, FilterConfig, HpConfig};

fn main() -> trend_cycle::error::Result<()> {
    env_logger::init();

    let n = 60;
    let mut rng = StdRng::seed_from_u64(42);
    let noise = Normal::new(0.0, 0.4).unwrap();
    let gdp: Vec<f64> = (0..n)
        .map(|t| {
            100.0
                + 0.8 * t as f64
                + 5.0 * (t as f64 * 2.0 * std::f64::consts::PI / 20.0).sin()
                + noise.sample(&mut rng)
        })
        .collect();

    let dataset = Dataset::from_columns(&[("gdp", gdp)])?;
    let factors: Vec<String> = (0..n)
        .map(|t| format!("factor [DATE_=Q{} {}]", t % 4 + 1, 1990 + t / 4))
        .collect();

    let config = FilterConfig {
        hp: Some(HpConfig::new("gdp")),
        period_factors: factors,
        ..FilterConfig::default()
    };

    let report = run_filters(&dataset, &config);

    let result = report.hp.get("gdp").expect("HP result");
    println!("period     trend      cycle");
    for i in 0..8 {
        println!(
            "{:<8} {:>8.3} {:>10.3}",
            report.time_axis[i], result.trend[i], result.cycle[i]
        );
    }

    for warning in &report.warnings {
        eprintln!("warning: {}", warning);
    }

    Ok(())
}
