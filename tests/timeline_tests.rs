use rachunki::models::BillingRecord;
use rachunki::timeline::{aggregate_to_quarters, build_monthly_timeline};

fn record(
    provider: &str,
    start: &str,
    end: Option<&str>,
    cost: Option<f64>,
    estimate: bool,
) -> BillingRecord {
    BillingRecord {
        provider: provider.to_string(),
        period_start: Some(start.to_string()),
        period_end: end.map(|s| s.to_string()),
        cost_gross: cost,
        is_estimate: estimate,
        ..Default::default()
    }
}

#[test]
fn test_single_month_record() {
    let records = vec![record(
        "eon",
        "2024-03-01",
        Some("2024-03-31"),
        Some(300.0),
        false,
    )];
    let timeline = build_monthly_timeline(&records);
    assert_eq!(timeline.len(), 1);
    assert_eq!(timeline[0].period, "2024-03");
    assert_eq!(timeline[0].cost_for("eon"), 300.0);
}

#[test]
fn test_multi_month_even_split() {
    // day components are ignored; a Jan 15 .. Feb 14 bill covers two months
    let records = vec![record(
        "pgnig",
        "2024-01-15",
        Some("2024-02-14"),
        Some(200.0),
        false,
    )];
    let timeline = build_monthly_timeline(&records);
    assert_eq!(timeline.len(), 2);
    assert_eq!(timeline[0].period, "2024-01");
    assert_eq!(timeline[0].cost_for("pgnig"), 100.0);
    assert_eq!(timeline[1].period, "2024-02");
    assert_eq!(timeline[1].cost_for("pgnig"), 100.0);
}

#[test]
fn test_allocation_conservation() {
    // 7 months, cost not divisible: contributions still sum to cost_gross
    let records = vec![record(
        "eon",
        "2023-11-01",
        Some("2024-05-31"),
        Some(100.0),
        false,
    )];
    let timeline = build_monthly_timeline(&records);
    assert_eq!(timeline.len(), 7);
    let total: f64 = timeline.iter().map(|r| r.cost_for("eon")).sum();
    assert!((total - 100.0).abs() < 1e-9);
}

#[test]
fn test_estimate_records_contribute_nothing() {
    let records = vec![record("eon", "2024-01", None, Some(100.0), true)];
    assert!(build_monthly_timeline(&records).is_empty());
}

#[test]
fn test_nonpositive_or_missing_cost_excluded() {
    let records = vec![
        record("eon", "2024-01-01", None, Some(0.0), false),
        record("eon", "2024-02-01", None, Some(-5.0), false),
        record("eon", "2024-03-01", None, None, false),
    ];
    assert!(build_monthly_timeline(&records).is_empty());
}

#[test]
fn test_missing_period_start_excluded() {
    let records = vec![BillingRecord {
        provider: "eon".to_string(),
        cost_gross: Some(100.0),
        ..Default::default()
    }];
    assert!(build_monthly_timeline(&records).is_empty());
}

#[test]
fn test_inverted_period_falls_back_to_start_month() {
    let records = vec![record(
        "mpwik",
        "2024-05-01",
        Some("2024-03-31"),
        Some(60.0),
        false,
    )];
    let timeline = build_monthly_timeline(&records);
    assert_eq!(timeline.len(), 1);
    assert_eq!(timeline[0].period, "2024-05");
    assert_eq!(timeline[0].cost_for("mpwik"), 60.0);
}

#[test]
fn test_contributions_accumulate_per_month() {
    let records = vec![
        record("eon", "2024-01-01", Some("2024-02-28"), Some(100.0), false),
        record("eon", "2024-02-01", Some("2024-02-28"), Some(40.0), false),
        record("pgnig", "2024-02-05", None, Some(25.0), false),
    ];
    let timeline = build_monthly_timeline(&records);
    assert_eq!(timeline.len(), 2);
    assert_eq!(timeline[1].period, "2024-02");
    assert_eq!(timeline[1].cost_for("eon"), 90.0);
    assert_eq!(timeline[1].cost_for("pgnig"), 25.0);
}

#[test]
fn test_unknown_providers_accumulate_under_their_key() {
    let records = vec![record("tauron", "2024-01-01", None, Some(77.0), false)];
    let timeline = build_monthly_timeline(&records);
    assert_eq!(timeline[0].cost_for("tauron"), 77.0);
}

#[test]
fn test_output_sorted_and_idempotent() {
    let records = vec![
        record("eon", "2024-11-01", None, Some(10.0), false),
        record("eon", "2023-02-01", None, Some(20.0), false),
        record("eon", "2024-01-01", None, Some(30.0), false),
    ];
    let first = build_monthly_timeline(&records);
    let periods: Vec<&str> = first.iter().map(|r| r.period.as_str()).collect();
    assert_eq!(periods, vec!["2023-02", "2024-01", "2024-11"]);
    // pure function: same input slice, same output
    assert_eq!(first, build_monthly_timeline(&records));
}

#[test]
fn test_quarter_totals_match_member_months() {
    let records = vec![
        record("eon", "2024-01-01", Some("2024-04-30"), Some(400.0), false),
        record("pgnig", "2024-02-01", None, Some(150.0), false),
        record("mpwik", "2024-06-01", None, Some(60.0), false),
    ];
    let months = build_monthly_timeline(&records);
    let quarters = aggregate_to_quarters(&months);

    assert_eq!(quarters.len(), 2);
    assert_eq!(quarters[0].period, "2024-Q1");
    assert_eq!(quarters[1].period, "2024-Q2");

    for (quarter, range) in [("2024-Q1", "2024-01".."2024-04"), ("2024-Q2", "2024-04".."2024-07")]
    {
        let qrow = quarters.iter().find(|q| q.period == quarter).unwrap();
        for provider in ["eon", "pgnig", "mpwik"] {
            let month_sum: f64 = months
                .iter()
                .filter(|m| m.period.as_str() >= range.start && m.period.as_str() < range.end)
                .map(|m| m.cost_for(provider))
                .sum();
            assert_eq!(qrow.cost_for(provider), month_sum, "{quarter}/{provider}");
        }
    }
}

#[test]
fn test_quarter_aggregation_empty_input() {
    assert!(aggregate_to_quarters(&[]).is_empty());
}
