use contracts::domain::invoice::InvoiceDto;

use crate::shared::http;

pub async fn fetch_all() -> Result<Vec<InvoiceDto>, String> {
    http::get_json("/api/invoices").await
}

/// Path of the original invoice document
pub fn document_path(id: &str) -> String {
    format!("/api/invoices/{}/document", id)
}
