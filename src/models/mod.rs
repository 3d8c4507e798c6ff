pub mod document;
pub mod record;
pub mod row;

pub use document::{Document, DocumentsResponse};
pub use record::{filter_records, parse_records_json, BillingRecord, ChartResponse, ChartSeries};
pub use row::{DisplayRow, PeriodRow, WindowBounds};
