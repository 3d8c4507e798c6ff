use std::collections::BTreeMap;

/// One row of a cost timeline: a period key (`YYYY-MM` for months,
/// `YYYY-Qn` for quarters) and raw, unrounded per-provider totals.
///
/// Costs accumulate under whatever provider key a record declares; limiting
/// output to a tracked provider set is a projection concern downstream.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodRow {
    pub period: String,
    pub costs: BTreeMap<String, f64>,
}

impl PeriodRow {
    /// Raw cost for one provider, 0 when the provider did not contribute.
    pub fn cost_for(&self, provider: &str) -> f64 {
        self.costs.get(provider).copied().unwrap_or(0.0)
    }
}

/// One presentation-ready row: rounded cost per tracked provider (in caller
/// order, zero-filled) plus an independently rounded total.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRow {
    pub period: String,
    pub costs: Vec<(String, f64)>,
    pub total: f64,
}

/// The visible slice of the monthly timeline, with pan availability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowBounds {
    /// First visible month key (inclusive).
    pub start: String,
    /// Last visible month key (inclusive).
    pub end: String,
    /// Months exist strictly before the window start.
    pub can_go_back: bool,
    /// Not already anchored to the most recent data.
    pub can_go_forward: bool,
}
