use approx::assert_abs_diff_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use trend_cycle::data::Dataset;
use trend_cycle::engine::{run_filters, BkConfig, CfConfig, FilterConfig, HpConfig};
use trend_cycle::period::PeriodLabel;

/// Synthetic macro series: linear trend, business-cycle wave, mild noise
fn synthetic_series(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = Normal::new(0.0, 0.2).unwrap();
    (0..n)
        .map(|t| {
            100.0
                + 0.6 * t as f64
                + 4.0 * (t as f64 * 2.0 * std::f64::consts::PI / 16.0).sin()
                + noise.sample(&mut rng)
        })
        .collect()
}

#[test]
fn test_full_run_over_quarterly_data() {
    let n = 48;
    let gdp = synthetic_series(n, 7);
    let cons = synthetic_series(n, 11);
    let dataset =
        Dataset::from_columns(&[("gdp", gdp.clone()), ("cons", cons.clone())]).unwrap();

    // Factor labels arrive shuffled; the engine must sort them
    let mut factors: Vec<String> = (0..n)
        .map(|t| format!("factor [DATE_=Q{} {}]", t % 4 + 1, 1990 + t / 4))
        .collect();
    factors.reverse();

    let config = FilterConfig {
        hp: Some(HpConfig::new("gdp")),
        bk: Some(BkConfig::new(vec!["gdp".to_string(), "cons".to_string()])),
        cf: Some(CfConfig::new(vec!["gdp".to_string(), "cons".to_string()])),
        period_factors: factors,
        ..FilterConfig::default()
    };

    let report = run_filters(&dataset, &config);

    // Clean run: no warnings, no failures
    assert!(report.warnings.is_empty(), "{:?}", report.warnings);
    assert!(!report.has_failures());

    // Time axis is parallel to the series and chronologically ordered
    assert_eq!(report.time_axis.len(), n);
    let keys: Vec<i64> = report
        .time_axis
        .iter()
        .map(|label| match PeriodLabel::parse(label) {
            PeriodLabel::Quarter { year, quarter } => year as i64 * 4 + quarter as i64 - 1,
            other => panic!("expected quarterly label, got {:?}", other),
        })
        .collect();
    assert!(keys.windows(2).all(|w| w[0] < w[1]));

    // HP reconstructs the input exactly
    let hp = report.hp.get("gdp").expect("HP result");
    assert_eq!(hp.len(), n);
    for i in 0..n {
        assert_abs_diff_eq!(hp.trend[i] + hp.cycle[i], gdp[i], epsilon = 1e-8);
    }

    // BK trims its truncation lag at both ends
    let bk_gdp = report.bk.get("gdp").expect("BK result");
    assert_eq!(bk_gdp.len(), n - 24);

    // CF is full length for every variable
    for variable in ["gdp", "cons"] {
        let cf = report.cf.get(variable).expect("CF result");
        assert_eq!(cf.len(), n);
    }

    // Observed inputs captured for presentation
    assert_eq!(report.observed.get("gdp"), Some(&gdp));
    assert_eq!(report.observed.get("cons"), Some(&cons));
}

#[test]
fn test_report_serializes_to_json() {
    let n = 20;
    let dataset = Dataset::from_columns(&[("gdp", synthetic_series(n, 3))]).unwrap();
    let config = FilterConfig {
        hp: Some(HpConfig::new("gdp")),
        period_factors: (0..n)
            .map(|t| format!("factor [DATE_=Q{} {}]", t % 4 + 1, 2000 + t / 4))
            .collect(),
        ..FilterConfig::default()
    };

    let report = run_filters(&dataset, &config);
    let json = serde_json::to_string(&report).unwrap();

    assert!(json.contains("\"time_axis\""));
    assert!(json.contains("\"gdp\""));
}
