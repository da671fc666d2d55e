use contracts::domain::rfq::RfqDto;

use crate::shared::http;

pub async fn fetch_all() -> Result<Vec<RfqDto>, String> {
    http::get_json("/api/rfqs").await
}

/// Path of the exported quote comparison sheet
pub fn comparison_sheet_path(id: &str) -> String {
    format!("/api/rfqs/{}/comparison", id)
}
