//! # Display Module
//!
//! Renders cost timelines and consumption detail as colored text tables or
//! machine-readable JSON.

#[cfg(feature = "colors")]
use owo_colors::OwoColorize;

// Provide a no-op color shim when "colors" feature is disabled
#[cfg(not(feature = "colors"))]
pub mod color_shim {
    use std::fmt::{self, Display, Formatter};

    #[derive(Clone)]
    pub struct Plain(pub String);

    impl Display for Plain {
        fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
            f.write_str(&self.0)
        }
    }

    pub trait ColorizeShim {
        fn as_str(&self) -> &str;

        fn bold(&self) -> Plain {
            Plain(self.as_str().to_string())
        }
        fn dimmed(&self) -> Plain {
            Plain(self.as_str().to_string())
        }
        fn cyan(&self) -> Plain {
            Plain(self.as_str().to_string())
        }
        fn yellow(&self) -> Plain {
            Plain(self.as_str().to_string())
        }
    }

    impl ColorizeShim for &str {
        fn as_str(&self) -> &str {
            self
        }
    }
    impl ColorizeShim for String {
        fn as_str(&self) -> &str {
            self.as_str()
        }
    }
    impl ColorizeShim for Plain {
        fn as_str(&self) -> &str {
            &self.0
        }
    }
}

#[cfg(not(feature = "colors"))]
use color_shim::ColorizeShim as OwoColorize;

use crate::models::{BillingRecord, DisplayRow, Document, WindowBounds};
use crate::utils::{format_currency, round2};

/// Machine-readable cost timeline output.
pub fn build_json_output(
    rows: &[DisplayRow],
    providers: &[String],
    window: Option<&WindowBounds>,
    aggregate_label: &str,
    source: &str,
) -> serde_json::Value {
    let window_json = window.map(|w| {
        serde_json::json!({
            "start": w.start,
            "end": w.end,
            "can_go_back": w.can_go_back,
            "can_go_forward": w.can_go_forward,
        })
    });
    let rows_json: Vec<serde_json::Value> = rows
        .iter()
        .map(|row| {
            let costs: serde_json::Map<String, serde_json::Value> = row
                .costs
                .iter()
                .map(|(p, c)| (p.clone(), serde_json::json!(c)))
                .collect();
            serde_json::json!({
                "period": row.period,
                "costs": costs,
                "total": row.total,
            })
        })
        .collect();

    serde_json::json!({
        "source": source,
        "aggregate": aggregate_label,
        "providers": providers,
        "window": window_json,
        "rows": rows_json,
    })
}

pub fn print_json_output(
    rows: &[DisplayRow],
    providers: &[String],
    window: Option<&WindowBounds>,
    aggregate_label: &str,
    source: &str,
) -> anyhow::Result<()> {
    let json = build_json_output(rows, providers, window, aggregate_label, source);
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}

/// Aligned cost table with a window header and pan hints.
pub fn print_text_output(
    rows: &[DisplayRow],
    providers: &[String],
    window: Option<&WindowBounds>,
    aggregate_label: &str,
    source: &str,
) {
    let Some(window) = window else {
        println!(
            "{} {}",
            "rachunki".bold(),
            "[no billing records]".dimmed()
        );
        return;
    };

    let mut hints = Vec::new();
    if window.can_go_back {
        hints.push("older: --page +1");
    }
    if window.can_go_forward {
        hints.push("newer: --page -1");
    }
    let range = format!("{}..{}", window.start, window.end);
    let hint_text = if hints.is_empty() {
        String::new()
    } else {
        format!("  ({})", hints.join(", "))
    };
    println!(
        "{} {} {}{}  {}",
        "rachunki".bold(),
        format!("[{aggregate_label}]").dimmed(),
        range.cyan(),
        hint_text.dimmed(),
        format!("source: {source}").dimmed()
    );

    if rows.is_empty() {
        println!("{}", "no costs in window".dimmed());
        return;
    }

    // column widths: header vs widest cell
    let period_width = rows
        .iter()
        .map(|r| r.period.len())
        .chain(["period".len()])
        .max()
        .unwrap_or(6);
    let mut widths: Vec<usize> = providers.iter().map(|p| p.len().max(8)).collect();
    for row in rows {
        for ((_, cost), width) in row.costs.iter().zip(widths.iter_mut()) {
            *width = (*width).max(format!("{cost:.2}").len());
        }
    }
    let total_width = rows
        .iter()
        .map(|r| format!("{:.2}", r.total).len())
        .chain(["total".len()])
        .max()
        .unwrap_or(5);

    let mut header = format!("{:<period_width$}", "period");
    for (provider, width) in providers.iter().zip(widths.iter().copied()) {
        header.push_str(&format!("  {provider:>width$}"));
    }
    header.push_str(&format!("  {:>total_width$}", "total"));
    println!("{}", header.dimmed());

    let mut window_total = 0.0;
    for row in rows {
        let mut line = format!("{:<period_width$}", row.period);
        for ((_, cost), width) in row.costs.iter().zip(widths.iter().copied()) {
            line.push_str(&format!("  {:>width$}", format!("{cost:.2}")));
        }
        let total = format!("{:>total_width$}", format!("{:.2}", row.total));
        println!("{line}  {}", total.bold());
        window_total += row.total;
    }
    println!(
        "{} {}",
        "window total:".dimmed(),
        format_currency(round2(window_total)).bold()
    );
}

/// Machine-readable consumption detail output.
pub fn build_consumption_json(records: &[BillingRecord]) -> anyhow::Result<serde_json::Value> {
    Ok(serde_json::json!({
        "records": serde_json::to_value(records)?,
    }))
}

pub fn print_consumption_json(records: &[BillingRecord]) -> anyhow::Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&build_consumption_json(records)?)?
    );
    Ok(())
}

/// Per-invoice consumption detail table, most recent period first.
pub fn print_consumption_table(records: &[BillingRecord]) {
    if records.is_empty() {
        println!(
            "{} {}",
            "rachunki".bold(),
            "[no consumption records]".dimmed()
        );
        return;
    }
    println!(
        "{} {}",
        "rachunki".bold(),
        "[consumption]".dimmed()
    );
    println!(
        "{}",
        format!(
            "{:<23}  {:<8}  {:<12}  {:>14}  {:>10}  {:>11}",
            "period", "provider", "utility", "consumption", "kWh", "cost"
        )
        .dimmed()
    );
    for rec in records {
        let period = match (&rec.period_start, &rec.period_end) {
            (Some(start), Some(end)) if start != end => format!("{start}..{end}"),
            (Some(start), _) => start.clone(),
            _ => "-".to_string(),
        };
        let consumption = match (rec.consumption_value, rec.consumption_unit.as_deref()) {
            (Some(v), Some(unit)) => format!("{v:.1} {unit}"),
            (Some(v), None) => format!("{v:.1}"),
            _ => "-".to_string(),
        };
        let kwh = rec
            .consumption_kwh
            .map(|v| format!("{v:.1}"))
            .unwrap_or_else(|| "-".to_string());
        let cost = rec
            .cost_gross
            .map(format_currency)
            .unwrap_or_else(|| "-".to_string());
        let marker = if rec.is_estimate { " (est)" } else { "" };
        println!(
            "{:<23}  {:<8}  {:<12}  {:>14}  {:>10}  {:>11}{}",
            period,
            rec.provider,
            rec.utility_type.as_deref().unwrap_or("-"),
            consumption,
            kwh,
            cost,
            marker.yellow()
        );
    }
}

/// Machine-readable document listing output.
pub fn build_documents_json(documents: &[Document]) -> anyhow::Result<serde_json::Value> {
    Ok(serde_json::json!({
        "documents": serde_json::to_value(documents)?,
    }))
}

pub fn print_documents_json(documents: &[Document]) -> anyhow::Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&build_documents_json(documents)?)?
    );
    Ok(())
}

/// Imported document listing, newest issue date first.
pub fn print_documents_table(documents: &[Document]) {
    if documents.is_empty() {
        println!("{} {}", "rachunki".bold(), "[no documents]".dimmed());
        return;
    }
    println!("{} {}", "rachunki".bold(), "[documents]".dimmed());
    println!(
        "{}",
        format!(
            "{:<10}  {:<8}  {:<22}  {:<14}  {:>11}  {:<10}  {:<8}",
            "issued", "provider", "type", "number", "amount", "due", "status"
        )
        .dimmed()
    );
    for doc in documents {
        let amount = doc
            .amount_pln
            .map(format_currency)
            .unwrap_or_else(|| "-".to_string());
        let status = doc.payment_status.as_deref().unwrap_or("-");
        let line = format!(
            "{:<10}  {:<8}  {:<22}  {:<14}  {:>11}  {:<10}  {:<8}",
            doc.issue_date.as_deref().unwrap_or("-"),
            doc.provider,
            doc.doc_type.as_deref().unwrap_or("-"),
            doc.doc_number.as_deref().unwrap_or("-"),
            amount,
            doc.due_date.as_deref().unwrap_or("-"),
            status,
        );
        if status == "unpaid" {
            println!("{}", line.yellow());
        } else {
            println!("{line}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_output_tolerates_mismatched_cost_rows() {
        // hand-built rows may carry more (or fewer) cost cells than provider
        // columns; width calculation must never index past either side
        let window = WindowBounds {
            start: "2024-01".to_string(),
            end: "2024-12".to_string(),
            can_go_back: false,
            can_go_forward: false,
        };
        let rows = vec![DisplayRow {
            period: "2024-01".to_string(),
            costs: vec![
                ("eon".to_string(), 1234.56),
                ("pgnig".to_string(), 78.9),
            ],
            total: 1313.46,
        }];
        // one provider column, two cost cells
        print_text_output(&rows, &["eon".to_string()], Some(&window), "month", "test");
        // two provider columns, row with a single cost cell
        let providers = vec!["eon".to_string(), "pgnig".to_string()];
        let short = vec![DisplayRow {
            period: "2024-02".to_string(),
            costs: vec![("eon".to_string(), 10.0)],
            total: 10.0,
        }];
        print_text_output(&short, &providers, Some(&window), "month", "test");
    }
}
