use pretty_assertions::assert_eq;
use trend_cycle::data::Dataset;
use trend_cycle::engine::{run_filters, BkConfig, CfConfig, FilterConfig, HpConfig};
use trend_cycle::filters::FilterKind;

fn quarterly_factors(n: usize) -> Vec<String> {
    (0..n)
        .map(|t| format!("factor [DATE_=Q{} {}]", t % 4 + 1, 1990 + t / 4))
        .collect()
}

fn wave(n: usize, period: f64) -> Vec<f64> {
    (0..n)
        .map(|t| 100.0 + (t as f64 * 2.0 * std::f64::consts::PI / period).sin() * 3.0)
        .collect()
}

#[test]
fn test_missing_time_axis_stops_the_run_with_one_warning() {
    let dataset = Dataset::from_columns(&[("gdp", wave(10, 8.0))]).unwrap();
    let config = FilterConfig {
        hp: Some(HpConfig::new("gdp")),
        ..FilterConfig::default()
    };

    let report = run_filters(&dataset, &config);

    assert!(report.hp.is_empty());
    assert!(!report.has_failures());
    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].contains("No usable time axis"));
}

#[test]
fn test_time_axis_from_factors_is_cleaned_and_sorted() {
    let dataset = Dataset::from_columns(&[("gdp", wave(3, 8.0))]).unwrap();
    let config = FilterConfig {
        hp: Some(HpConfig::new("gdp")),
        period_factors: vec![
            "factor [DATE_=Q1 1999]".to_string(),
            "factor [DATE_=Q3 1998]".to_string(),
            "factor [DATE_=Q2 1998]".to_string(),
        ],
        ..FilterConfig::default()
    };

    let report = run_filters(&dataset, &config);

    assert_eq!(report.time_axis, vec!["Q2 1998", "Q3 1998", "Q1 1999"]);
    assert!(report.warnings.is_empty());
}

#[test]
fn test_time_axis_from_date_column_is_verbatim() {
    let mut dataset = Dataset::from_columns(&[("gdp", wave(3, 8.0))]).unwrap();
    dataset
        .add_label_column(
            "DATE_",
            vec!["b".to_string(), "a".to_string(), "c".to_string()],
        )
        .unwrap();
    let config = FilterConfig {
        hp: Some(HpConfig::new("gdp")),
        ..FilterConfig::default()
    };

    let report = run_filters(&dataset, &config);

    // Row order preserved, no sorting applied
    assert_eq!(report.time_axis, vec!["b", "a", "c"]);
}

#[test]
fn test_axis_length_mismatch_is_warned() {
    let dataset = Dataset::from_columns(&[("gdp", wave(3, 8.0))]).unwrap();
    let mut factors = quarterly_factors(3);
    factors[1] = "label without marker".to_string();
    let config = FilterConfig {
        hp: Some(HpConfig::new("gdp")),
        period_factors: factors,
        ..FilterConfig::default()
    };

    let report = run_filters(&dataset, &config);

    assert_eq!(report.time_axis.len(), 2);
    assert!(report
        .warnings
        .iter()
        .any(|w| w.contains("does not match case count")));
}

#[test]
fn test_hp_unknown_variable_is_a_silent_no_op() {
    let dataset = Dataset::from_columns(&[("gdp", wave(12, 8.0))]).unwrap();
    let config = FilterConfig {
        hp: Some(HpConfig::new("does_not_exist")),
        period_factors: quarterly_factors(12),
        ..FilterConfig::default()
    };

    let report = run_filters(&dataset, &config);

    assert!(report.hp.is_empty());
    assert!(report.warnings.is_empty());
    assert!(!report.has_failures());
}

#[test]
fn test_hp_nan_data_fails_without_blocking_other_passes() {
    let mut broken = wave(40, 8.0);
    broken[7] = f64::NAN;
    let dataset = Dataset::from_columns(&[("gdp", broken), ("cons", wave(40, 8.0))]).unwrap();
    let config = FilterConfig {
        hp: Some(HpConfig::new("gdp")),
        bk: Some(BkConfig::new(vec!["cons".to_string()])),
        period_factors: quarterly_factors(40),
        ..FilterConfig::default()
    };

    let report = run_filters(&dataset, &config);

    assert!(report.hp.is_empty());
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].filter, FilterKind::HodrickPrescott);
    assert_eq!(report.failures[0].variable, "gdp");
    // The Baxter-King pass still produced its result
    assert!(report.bk.contains_key("cons"));
}

#[test]
fn test_cf_isolates_per_variable_failures() {
    let mut broken = wave(20, 8.0);
    broken[3] = f64::INFINITY;
    let dataset = Dataset::from_columns(&[
        ("good", wave(20, 8.0)),
        ("bad", broken),
        ("other", wave(20, 12.0)),
    ])
    .unwrap();
    let config = FilterConfig {
        cf: Some(CfConfig::new(vec![
            "good".to_string(),
            "bad".to_string(),
            "other".to_string(),
        ])),
        period_factors: quarterly_factors(20),
        ..FilterConfig::default()
    };

    let report = run_filters(&dataset, &config);

    // The failing variable is recorded; the variables before and after it
    // both completed
    assert!(report.cf.contains_key("good"));
    assert!(report.cf.contains_key("other"));
    assert!(!report.cf.contains_key("bad"));
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].filter, FilterKind::ChristianoFitzgerald);
    assert_eq!(report.failures[0].variable, "bad");
}

#[test]
fn test_bk_parameter_violation_aborts_only_its_pass() {
    let dataset = Dataset::from_columns(&[("gdp", wave(30, 8.0))]).unwrap();
    let config = FilterConfig {
        bk: Some(BkConfig {
            variables: vec!["gdp".to_string()],
            low: 32.0,
            high: 6.0,
            k: 12,
        }),
        cf: Some(CfConfig::new(vec!["gdp".to_string()])),
        period_factors: quarterly_factors(30),
        ..FilterConfig::default()
    };

    let report = run_filters(&dataset, &config);

    assert!(report.bk.is_empty());
    assert!(report
        .warnings
        .iter()
        .any(|w| w.contains("Baxter-King pass skipped")));
    assert!(report.cf.contains_key("gdp"));
}

#[test]
fn test_cf_inverted_band_aborts_only_its_pass() {
    let dataset = Dataset::from_columns(&[("gdp", wave(30, 8.0))]).unwrap();
    let config = FilterConfig {
        hp: Some(HpConfig::new("gdp")),
        cf: Some(CfConfig {
            variables: vec!["gdp".to_string()],
            low: 32.0,
            high: 6.0,
            drift: None,
        }),
        period_factors: quarterly_factors(30),
        ..FilterConfig::default()
    };

    let report = run_filters(&dataset, &config);

    // No partial CF result for the variable; the HP pass is unaffected
    assert!(report.cf.is_empty());
    assert!(report
        .warnings
        .iter()
        .any(|w| w.contains("Christiano-Fitzgerald pass skipped")));
    assert!(report.hp.contains_key("gdp"));
}

#[test]
fn test_bk_skips_short_series_with_a_warning() {
    let dataset = Dataset::from_columns(&[("gdp", vec![1.0, 2.0])]).unwrap();
    let config = FilterConfig {
        bk: Some(BkConfig::new(vec!["gdp".to_string()])),
        period_factors: quarterly_factors(2),
        ..FilterConfig::default()
    };

    let report = run_filters(&dataset, &config);

    assert!(report.bk.is_empty());
    assert!(!report.has_failures());
    assert!(report.warnings.iter().any(|w| w.contains("skipped")));
}

#[test]
fn test_unknown_band_pass_variables_are_skipped() {
    let dataset = Dataset::from_columns(&[("gdp", wave(30, 8.0))]).unwrap();
    let config = FilterConfig {
        bk: Some(BkConfig::new(vec![
            "gdp".to_string(),
            "missing".to_string(),
        ])),
        period_factors: quarterly_factors(30),
        ..FilterConfig::default()
    };

    let report = run_filters(&dataset, &config);

    assert!(report.bk.contains_key("gdp"));
    assert!(!report.bk.contains_key("missing"));
    assert!(!report.has_failures());
}

#[test]
fn test_observed_series_are_captured_for_band_pass_variables() {
    let gdp = wave(16, 8.0);
    let dataset = Dataset::from_columns(&[("gdp", gdp.clone())]).unwrap();
    let config = FilterConfig {
        bk: Some(BkConfig::new(vec!["gdp".to_string()])),
        period_factors: quarterly_factors(16),
        ..FilterConfig::default()
    };

    let report = run_filters(&dataset, &config);

    assert_eq!(report.observed.get("gdp"), Some(&gdp));
}

#[test]
fn test_aligned_pair_truncates_to_shortest_series() {
    let n = 40;
    let k = 4;
    let dataset =
        Dataset::from_columns(&[("a", wave(n, 8.0)), ("b", wave(n, 12.0))]).unwrap();
    let config = FilterConfig {
        bk: Some(BkConfig {
            variables: vec!["a".to_string(), "b".to_string()],
            low: 6.0,
            high: 32.0,
            k: k as i64,
        }),
        period_factors: quarterly_factors(n),
        ..FilterConfig::default()
    };

    let report = run_filters(&dataset, &config);
    let pair = report
        .aligned_pair(FilterKind::BaxterKing, "a", "b")
        .unwrap();

    assert_eq!(pair.time_axis.len(), n - 2 * k);
    assert_eq!(pair.first.len(), n - 2 * k);
    assert_eq!(pair.second.len(), n - 2 * k);
}

#[test]
fn test_config_deserializes_with_defaults() {
    let config: FilterConfig =
        serde_json::from_str(r#"{"bk": {"variables": ["gdp"]}}"#).unwrap();

    let bk = config.bk.unwrap();
    assert_eq!(bk.variables, vec!["gdp"]);
    assert_eq!(bk.low, 6.0);
    assert_eq!(bk.high, 32.0);
    assert_eq!(bk.k, 12);
    assert!(config.hp.is_none());
    assert!(config.cf.is_none());
    assert!(config.period_factors.is_empty());
}

#[test]
fn test_hp_config_defaults_lambda() {
    let config: FilterConfig =
        serde_json::from_str(r#"{"hp": {"variable": "gdp"}}"#).unwrap();

    assert_eq!(config.hp.unwrap().lambda, 1600.0);
}
