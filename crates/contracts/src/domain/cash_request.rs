use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Workflow statuses of a petty-cash request.
///
/// The pipeline is owned by the backend; the client only displays whatever
/// status string comes back and never validates transitions.
pub mod status {
    pub const PENDING_SUPERVISOR: &str = "pending_supervisor";
    pub const PENDING_FINANCE: &str = "pending_finance";
    pub const APPROVED: &str = "approved";
    pub const DISBURSED: &str = "disbursed";
    pub const CLOSED: &str = "closed";
    pub const REJECTED: &str = "rejected";
    pub const CANCELLED: &str = "cancelled";
}

pub mod urgency {
    pub const LOW: &str = "low";
    pub const MEDIUM: &str = "medium";
    pub const HIGH: &str = "high";
    pub const CRITICAL: &str = "critical";
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashRequestDto {
    pub id: String,
    pub number: String,
    pub requester: String,
    pub department: Option<String>,
    pub amount: f64,
    pub currency: String,
    pub purpose: String,
    pub urgency: String,
    pub status: String,
    pub needed_by: Option<NaiveDate>,
    pub created_at: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateCashRequestDto {
    pub amount: f64,
    pub currency: String,
    pub purpose: String,
    pub urgency: String,
    pub needed_by: Option<NaiveDate>,
}

/// Approve / reject action submitted from the approval screens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashRequestDecisionDto {
    pub request_id: String,
    pub approve: bool,
    pub comment: Option<String>,
}
