//! HTTP client for the rachunki backend.
//!
//! Fetches pre-grouped chart series from `/api/consumption/chart` (flattened
//! into billing records) and the document listing from `/api/documents`.
//! The backend applies the same filters the SQLite path uses.

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use std::time::Duration;

use crate::models::{BillingRecord, ChartResponse, Document, DocumentsResponse};

static AGENT: Lazy<ureq::Agent> = Lazy::new(|| {
    ureq::AgentBuilder::new()
        .timeout_read(Duration::from_secs(10))
        .timeout_write(Duration::from_secs(10))
        .build()
});

/// Fetch billing records from the backend chart endpoint.
pub fn fetch_chart_records(
    base_url: &str,
    utility_type: Option<&str>,
    location: Option<&str>,
) -> Result<Vec<BillingRecord>> {
    let url = format!("{}/api/consumption/chart", base_url.trim_end_matches('/'));

    let mut request = AGENT.get(&url).set("Accept", "application/json");
    if let Some(utility) = utility_type {
        request = request.query("utility_type", utility);
    }
    if let Some(location) = location {
        request = request.query("location", location);
    }

    let response = request.call().with_context(|| format!("fetch {url}"))?;
    let chart: ChartResponse = response
        .into_json()
        .context("decode chart response json")?;
    Ok(chart.into_records())
}

/// Fetch imported invoice documents from the backend, newest first.
pub fn fetch_documents(base_url: &str, provider: Option<&str>) -> Result<Vec<Document>> {
    let url = format!("{}/api/documents", base_url.trim_end_matches('/'));

    let mut request = AGENT.get(&url).set("Accept", "application/json");
    if let Some(provider) = provider {
        request = request.query("provider", provider);
    }

    let response = request.call().with_context(|| format!("fetch {url}"))?;
    let listing: DocumentsResponse = response
        .into_json()
        .context("decode documents response json")?;
    Ok(listing.documents)
}
