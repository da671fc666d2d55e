use serde::{Deserialize, Serialize};

pub mod status {
    pub const SUBMITTED: &str = "submitted";
    pub const UNDER_REVIEW: &str = "under_review";
    pub const APPROVED: &str = "approved";
    pub const PAID: &str = "paid";
    pub const DISPUTED: &str = "disputed";
    pub const REJECTED: &str = "rejected";
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceDto {
    pub id: String,
    pub number: String,
    pub supplier: String,
    pub purchase_order: Option<String>,
    pub amount: f64,
    pub currency: String,
    pub status: String,
    pub due_date: Option<String>,
    pub created_at: String,
}
