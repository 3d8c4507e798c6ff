//! # Timeline Module
//!
//! Converts billing records into a dense monthly cost timeline per provider
//! and rolls monthly rows up to calendar quarters.
//!
//! A bill spanning several months is split evenly across them: a 2-month
//! invoice contributes half its gross cost to each month regardless of the
//! actual day counts. This is a deliberate approximation, not day-weighted
//! proration.

use std::collections::BTreeMap;

use crate::models::{BillingRecord, PeriodRow};
use crate::utils::{month_key, parse_year_month, shift_month};

/// Guard against corrupt `period_end` values producing runaway spans.
const MAX_SPAN_MONTHS: usize = 1200;

/// Build the monthly cost timeline from a set of billing records.
///
/// Excluded entirely: estimate records, records without a positive gross
/// cost, and records without a parsable `period_start`. Surviving records
/// have their cost split evenly across the inclusive month span from
/// `period_start` to `period_end` (defaulting to the start month) and
/// accumulated per month, per provider. Output is sorted ascending by the
/// zero-padded `YYYY-MM` key.
pub fn build_monthly_timeline(records: &[BillingRecord]) -> Vec<PeriodRow> {
    let mut buckets: BTreeMap<String, BTreeMap<String, f64>> = BTreeMap::new();

    for rec in records {
        if rec.is_estimate {
            continue;
        }
        let cost = match rec.cost_gross {
            Some(c) if c > 0.0 => c,
            _ => continue,
        };
        let Some(start) = rec.period_start.as_deref().and_then(parse_year_month) else {
            continue;
        };
        let end = rec
            .period_end
            .as_deref()
            .and_then(parse_year_month)
            .unwrap_or(start);

        let months = month_span(start, end);
        let per_month = cost / months.len() as f64;
        for (year, month) in months {
            *buckets
                .entry(month_key(year, month))
                .or_default()
                .entry(rec.provider.clone())
                .or_insert(0.0) += per_month;
        }
    }

    buckets
        .into_iter()
        .map(|(period, costs)| PeriodRow { period, costs })
        .collect()
}

/// Roll monthly rows up to calendar quarters (Q1=Jan-Mar .. Q4=Oct-Dec).
///
/// Sums raw per-provider values across the months of each quarter; rounding
/// stays a projection concern. Rows whose period key is not a valid
/// `YYYY-MM` are skipped. Empty input yields empty output.
pub fn aggregate_to_quarters(rows: &[PeriodRow]) -> Vec<PeriodRow> {
    let mut buckets: BTreeMap<String, BTreeMap<String, f64>> = BTreeMap::new();

    for row in rows {
        let Some(quarter) = quarter_key(&row.period) else {
            continue;
        };
        let bucket = buckets.entry(quarter).or_default();
        for (provider, cost) in &row.costs {
            *bucket.entry(provider.clone()).or_insert(0.0) += cost;
        }
    }

    buckets
        .into_iter()
        .map(|(period, costs)| PeriodRow { period, costs })
        .collect()
}

/// `YYYY-MM` -> `YYYY-Qn`. Zero-padded year keeps string order chronological.
pub fn quarter_key(month_key: &str) -> Option<String> {
    let (year, month) = parse_year_month(month_key)?;
    Some(format!("{year:04}-Q{}", month.div_ceil(3)))
}

/// Inclusive list of calendar months from `start` to `end`.
///
/// Always returns at least one month: an inverted range falls back to the
/// single start month rather than erroring.
fn month_span(start: (i32, u32), end: (i32, u32)) -> Vec<(i32, u32)> {
    let mut months = Vec::new();
    let (mut year, mut month) = start;
    while (year, month) <= end && months.len() < MAX_SPAN_MONTHS {
        months.push((year, month));
        (year, month) = shift_month(year, month, 1);
    }
    if months.is_empty() {
        months.push(start);
    }
    months
}
