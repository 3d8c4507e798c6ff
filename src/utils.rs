use chrono::{Datelike, NaiveDate};
use std::io::Read;

/// Provider columns shown when the caller does not configure a set.
pub const DEFAULT_TRACKED_PROVIDERS: &[&str] = &["eon", "pgnig", "mpwik"];

/// Extract `(year, month)` from a billing date string.
///
/// Accepts full `YYYY-MM-DD` dates and bare `YYYY-MM` prefixes; the day
/// component never matters for bucketing. Returns `None` for anything that
/// does not yield a plausible calendar month.
pub fn parse_year_month(s: &str) -> Option<(i32, u32)> {
    let s = s.trim();
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some((d.year(), d.month()));
    }
    let mut parts = s.splitn(3, '-');
    let year: i32 = parts.next()?.parse().ok()?;
    let month: u32 = parts.next()?.parse().ok()?;
    if !(1..=12).contains(&month) {
        return None;
    }
    Some((year, month))
}

/// Zero-padded `YYYY-MM` key. The padding is load-bearing: it keeps
/// lexicographic order equal to calendar order everywhere keys are compared.
pub fn month_key(year: i32, month: u32) -> String {
    format!("{year:04}-{month:02}")
}

/// Shift a calendar month by `delta` months, borrowing across years.
pub fn shift_month(year: i32, month: u32, delta: i32) -> (i32, u32) {
    let zero_based = year * 12 + month as i32 - 1 + delta;
    (zero_based.div_euclid(12), (zero_based.rem_euclid(12) + 1) as u32)
}

/// Round to 2 decimal places, half-up (currency style).
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Amounts are PLN throughout (cost_currency defaults to 'PLN' in the DB).
pub fn format_currency(v: f64) -> String {
    format!("{v:.2} zł")
}

/// Split a comma-separated provider list into trimmed, non-empty keys.
pub fn parse_provider_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(|p| p.trim().to_lowercase())
        .filter(|p| !p.is_empty())
        .collect()
}

pub fn read_stdin() -> anyhow::Result<Vec<u8>> {
    let mut buf = Vec::new();
    std::io::stdin().read_to_end(&mut buf)?;
    Ok(buf)
}
