//! # Projection Module
//!
//! Filters the monthly timeline to the visible window and projects rows to
//! presentation shape against a configured tracked-provider set.

use crate::models::{DisplayRow, PeriodRow, WindowBounds};
use crate::timeline::aggregate_to_quarters;
use crate::utils::round2;

/// Roll-up granularity of the displayed timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregation {
    Month,
    Quarter,
}

/// Filter the timeline to the window and project to display rows.
///
/// The range check is an inclusive string comparison on `YYYY-MM` keys,
/// which is chronological thanks to zero padding. With `Quarter`, the
/// filtered months are rolled up before projection. Tracked providers are
/// zero-filled when absent; each per-provider cost and the row total are
/// rounded to 2 decimals independently, so a display total may differ from
/// the sum of the rounded parts by a cent.
pub fn filter_and_project(
    timeline: &[PeriodRow],
    window: &WindowBounds,
    aggregation: Aggregation,
    tracked: &[String],
) -> Vec<DisplayRow> {
    let filtered: Vec<PeriodRow> = timeline
        .iter()
        .filter(|row| row.period >= window.start && row.period <= window.end)
        .cloned()
        .collect();

    let rows = match aggregation {
        Aggregation::Month => filtered,
        Aggregation::Quarter => aggregate_to_quarters(&filtered),
    };

    rows.into_iter()
        .map(|row| {
            let costs: Vec<(String, f64)> = tracked
                .iter()
                .map(|p| (p.clone(), round2(row.cost_for(p))))
                .collect();
            let total = round2(tracked.iter().map(|p| row.cost_for(p)).sum());
            DisplayRow {
                period: row.period,
                costs,
                total,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn row(period: &str, costs: &[(&str, f64)]) -> PeriodRow {
        PeriodRow {
            period: period.to_string(),
            costs: costs
                .iter()
                .map(|(p, c)| (p.to_string(), *c))
                .collect::<BTreeMap<_, _>>(),
        }
    }

    fn tracked(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_inclusive_window_filter() {
        let tl = vec![
            row("2023-12", &[("eon", 10.0)]),
            row("2024-01", &[("eon", 20.0)]),
            row("2024-06", &[("eon", 30.0)]),
            row("2024-07", &[("eon", 40.0)]),
        ];
        let window = WindowBounds {
            start: "2024-01".to_string(),
            end: "2024-06".to_string(),
            can_go_back: true,
            can_go_forward: true,
        };
        let rows = filter_and_project(&tl, &window, Aggregation::Month, &tracked(&["eon"]));
        let periods: Vec<&str> = rows.iter().map(|r| r.period.as_str()).collect();
        assert_eq!(periods, vec!["2024-01", "2024-06"]);
    }

    #[test]
    fn test_zero_fill_and_untracked_exclusion() {
        let tl = vec![row("2024-01", &[("eon", 50.0), ("tauron", 99.0)])];
        let window = WindowBounds {
            start: "2024-01".to_string(),
            end: "2024-01".to_string(),
            can_go_back: false,
            can_go_forward: false,
        };
        let rows = filter_and_project(
            &tl,
            &window,
            Aggregation::Month,
            &tracked(&["eon", "pgnig"]),
        );
        assert_eq!(rows[0].costs, vec![
            ("eon".to_string(), 50.0),
            ("pgnig".to_string(), 0.0)
        ]);
        // untracked provider never surfaces, not even in the total
        assert_eq!(rows[0].total, 50.0);
    }

    #[test]
    fn test_independent_total_rounding() {
        // 0.005 + 0.005 rounds to 0.01 per provider, but the total rounds
        // the raw sum: accepted property, not a defect.
        let tl = vec![row("2024-01", &[("eon", 0.005), ("pgnig", 0.005)])];
        let window = WindowBounds {
            start: "2024-01".to_string(),
            end: "2024-01".to_string(),
            can_go_back: false,
            can_go_forward: false,
        };
        let rows = filter_and_project(
            &tl,
            &window,
            Aggregation::Month,
            &tracked(&["eon", "pgnig"]),
        );
        assert_eq!(rows[0].costs[0].1, 0.01);
        assert_eq!(rows[0].costs[1].1, 0.01);
        assert_eq!(rows[0].total, 0.01);
    }

    #[test]
    fn test_quarter_projection_rolls_up_filtered_months() {
        let tl = vec![
            row("2024-01", &[("eon", 10.0)]),
            row("2024-02", &[("eon", 20.0)]),
            row("2024-04", &[("eon", 40.0)]),
        ];
        let window = WindowBounds {
            start: "2024-01".to_string(),
            end: "2024-04".to_string(),
            can_go_back: false,
            can_go_forward: false,
        };
        let rows = filter_and_project(&tl, &window, Aggregation::Quarter, &tracked(&["eon"]));
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].period, "2024-Q1");
        assert_eq!(rows[0].total, 30.0);
        assert_eq!(rows[1].period, "2024-Q2");
        assert_eq!(rows[1].total, 40.0);
    }
}
