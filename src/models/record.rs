use anyhow::Context;
use serde::{Deserialize, Deserializer, Serialize};

/// One billing record, covering a single invoice period for one provider.
///
/// Mirrors a row of the backend's `consumption_records` table and an element
/// of a chart-series `data` array. Missing fields degrade to "excluded from
/// aggregation" rather than a parse failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BillingRecord {
    #[serde(default)]
    pub provider: String,
    #[serde(default)]
    pub utility_type: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub period_start: Option<String>,
    #[serde(default)]
    pub period_end: Option<String>,
    #[serde(default)]
    pub cost_gross: Option<f64>,
    #[serde(default)]
    pub cost_net: Option<f64>,
    #[serde(default)]
    pub consumption_kwh: Option<f64>,
    #[serde(default)]
    pub consumption_value: Option<f64>,
    #[serde(default)]
    pub consumption_unit: Option<String>,
    /// SQLite stores this as 0/1; hand-written snapshots may use booleans.
    #[serde(default, deserialize_with = "flag_from_any")]
    pub is_estimate: bool,
}

/// One chart series from `/api/consumption/chart`: a (utility, location)
/// group with its records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartSeries {
    #[serde(default)]
    pub provider: String,
    #[serde(default)]
    pub utility_type: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub data: Vec<BillingRecord>,
}

impl ChartSeries {
    /// Flatten the series, copying series-level provider/utility/location
    /// onto records that do not carry their own.
    pub fn into_records(self) -> Vec<BillingRecord> {
        let ChartSeries {
            provider,
            utility_type,
            location,
            data,
        } = self;
        data.into_iter()
            .map(|mut rec| {
                if rec.provider.is_empty() {
                    rec.provider = provider.clone();
                }
                if rec.utility_type.is_none() {
                    rec.utility_type = utility_type.clone();
                }
                if rec.location.is_none() {
                    rec.location = location.clone();
                }
                rec
            })
            .collect()
    }
}

/// Response envelope of `/api/consumption/chart`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartResponse {
    #[serde(default)]
    pub series: Vec<ChartSeries>,
}

impl ChartResponse {
    pub fn into_records(self) -> Vec<BillingRecord> {
        self.series
            .into_iter()
            .flat_map(ChartSeries::into_records)
            .collect()
    }
}

/// Parse a JSON snapshot: either a chart response envelope or a bare array
/// of billing records.
pub fn parse_records_json(bytes: &[u8]) -> anyhow::Result<Vec<BillingRecord>> {
    let value: serde_json::Value =
        serde_json::from_slice(bytes).context("parse billing records json")?;
    if value.get("series").is_some() {
        let chart: ChartResponse =
            serde_json::from_value(value).context("parse chart response")?;
        Ok(chart.into_records())
    } else {
        serde_json::from_value(value).context("parse billing record array")
    }
}

/// Upstream narrowing before aggregation: utility type by equality,
/// location by substring, provider by exact key.
///
/// The location match is ASCII-case-insensitive so that snapshot input
/// behaves like the database path, where `LIKE '%...%'` already matched
/// without regard to ASCII case.
pub fn filter_records(
    records: &mut Vec<BillingRecord>,
    utility_type: Option<&str>,
    location: Option<&str>,
    provider: Option<&str>,
) {
    if let Some(utility) = utility_type {
        records.retain(|r| r.utility_type.as_deref() == Some(utility));
    }
    if let Some(location) = location {
        let needle = location.to_ascii_lowercase();
        records.retain(|r| {
            r.location
                .as_deref()
                .is_some_and(|l| l.to_ascii_lowercase().contains(&needle))
        });
    }
    if let Some(provider) = provider {
        records.retain(|r| r.provider == provider);
    }
}

fn flag_from_any<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match v {
        Some(serde_json::Value::Bool(b)) => b,
        Some(serde_json::Value::Number(n)) => n.as_i64().unwrap_or(0) != 0,
        _ => false,
    })
}
