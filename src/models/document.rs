use serde::{Deserialize, Serialize};

/// One imported invoice document, as tracked by the backend's `documents`
/// table: payment metadata (due date, status) rather than consumption.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub provider: String,
    #[serde(default)]
    pub doc_type: Option<String>,
    #[serde(default)]
    pub doc_number: Option<String>,
    #[serde(default)]
    pub issue_date: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub amount_pln: Option<f64>,
    #[serde(default)]
    pub payment_status: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

/// Response envelope of `/api/documents`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentsResponse {
    #[serde(default)]
    pub documents: Vec<Document>,
}
