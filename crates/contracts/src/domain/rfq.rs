use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub mod status {
    pub const DRAFT: &str = "draft";
    pub const PUBLISHED: &str = "published";
    pub const QUOTES_RECEIVED: &str = "quotes_received";
    pub const UNDER_EVALUATION: &str = "under_evaluation";
    pub const AWARDED: &str = "awarded";
    pub const CLOSED: &str = "closed";
    pub const CANCELLED: &str = "cancelled";
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RfqDto {
    pub id: String,
    pub number: String,
    pub title: String,
    pub requisition_id: Option<String>,
    pub status: String,
    pub quote_deadline: Option<NaiveDate>,
    pub quotes_count: u32,
    pub created_at: String,
}

/// Supplier-facing view of an RFQ, resolved from an external quote token.
/// No session is required to fetch or answer it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalQuoteRequestDto {
    pub rfq_number: String,
    pub title: String,
    pub description: String,
    pub quote_deadline: Option<NaiveDate>,
    pub supplier_name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubmitQuoteDto {
    pub total_price: f64,
    pub currency: String,
    pub lead_time_days: u32,
    pub notes: Option<String>,
}
