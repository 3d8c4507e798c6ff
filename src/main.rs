use anyhow::{bail, Context, Result};
use std::fs;
use std::path::PathBuf;

use rachunki::api;
use rachunki::cli::{AggregateArg, Args, ViewArg};
use rachunki::db::{self, RecordFilter};
use rachunki::display::{
    print_consumption_json, print_consumption_table, print_documents_json, print_documents_table,
    print_json_output, print_text_output,
};
use rachunki::models::{filter_records, parse_records_json, BillingRecord};
use rachunki::project::{filter_and_project, Aggregation};
use rachunki::timeline::build_monthly_timeline;
use rachunki::utils::read_stdin;
use rachunki::window::{compute_window, pan_stride};

fn main() -> Result<()> {
    let args = Args::parse();

    match args.view {
        ViewArg::Costs => {
            let (records, source) = load_records(&args)?;
            render_costs(&records, &args, &source)
        }
        ViewArg::Consumption => {
            let (records, _) = load_records(&args)?;
            render_consumption(records, &args)
        }
        ViewArg::Documents => render_documents(&args),
    }
}

/// Load records from the configured source: snapshot file/stdin, the backend
/// HTTP API, or the SQLite database (default).
///
/// Location/utility/provider narrowing happens before allocation. The DB and
/// API sources already filter utility/location server-side; re-applying
/// client-side keeps snapshot input on the same footing.
fn load_records(args: &Args) -> Result<(Vec<BillingRecord>, String)> {
    let utility = args.utility_type.map(|u| u.as_str());
    let location = args.location.as_deref();
    let provider = args.provider.as_deref();

    let (mut records, source) = if let Some(file) = args.file.as_deref() {
        let bytes = if file == "-" {
            read_stdin()?
        } else {
            fs::read(file).with_context(|| format!("read snapshot {file}"))?
        };
        let source = if file == "-" { "stdin" } else { file };
        (parse_records_json(&bytes)?, source.to_string())
    } else if let Some(url) = args.url.as_deref() {
        (
            api::fetch_chart_records(url, utility, location)?,
            url.to_string(),
        )
    } else {
        let path = db_path(args)?;
        let records = db::load_records(
            &path,
            &RecordFilter {
                utility_type: utility,
                location,
            },
        )?;
        (records, path.display().to_string())
    };

    filter_records(&mut records, utility, location, provider);
    Ok((records, source))
}

fn db_path(args: &Args) -> Result<PathBuf> {
    match args.db.as_deref() {
        Some(p) => Ok(PathBuf::from(p)),
        None => db::default_db_path(),
    }
}

fn render_costs(records: &[BillingRecord], args: &Args, source: &str) -> Result<()> {
    let timeline = build_monthly_timeline(records);
    let width = args.window.width_months();
    // panning is meaningless on an unbounded window
    let offset = if width == 0 {
        0
    } else {
        args.offset_months
            .unwrap_or_else(|| args.page * pan_stride(width))
    };

    let window = compute_window(&timeline, width, offset);
    let (aggregation, aggregate_label) = match args.aggregate {
        AggregateArg::Month => (Aggregation::Month, "month"),
        AggregateArg::Quarter => (Aggregation::Quarter, "quarter"),
    };
    let tracked = args.tracked_providers();
    let rows = window
        .as_ref()
        .map(|w| filter_and_project(&timeline, w, aggregation, &tracked))
        .unwrap_or_default();

    if args.json {
        print_json_output(&rows, &tracked, window.as_ref(), aggregate_label, source)?;
    } else {
        print_text_output(&rows, &tracked, window.as_ref(), aggregate_label, source);
    }
    Ok(())
}

fn render_consumption(mut records: Vec<BillingRecord>, args: &Args) -> Result<()> {
    if !args.include_estimates {
        records.retain(|r| !r.is_estimate);
    }
    // most recent period first, like the documents view
    records.sort_by(|a, b| b.period_start.cmp(&a.period_start));

    if args.json {
        print_consumption_json(&records)?;
    } else {
        print_consumption_table(&records);
    }
    Ok(())
}

fn render_documents(args: &Args) -> Result<()> {
    if args.file.is_some() {
        bail!("the documents view needs --db or --url; snapshot files only carry billing records");
    }
    let provider = args.provider.as_deref();
    let documents = if let Some(url) = args.url.as_deref() {
        api::fetch_documents(url, provider)?
    } else {
        db::load_documents(&db_path(args)?, provider)?
    };

    if args.json {
        print_documents_json(&documents)?;
    } else {
        print_documents_table(&documents);
    }
    Ok(())
}
