use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub mod status {
    pub const PENDING_SUPERVISOR: &str = "pending_supervisor";
    pub const PENDING_HR: &str = "pending_hr";
    pub const APPROVED: &str = "approved";
    pub const REJECTED: &str = "rejected";
    pub const CANCELLED: &str = "cancelled";
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveRequestDto {
    pub id: String,
    pub number: String,
    pub employee: String,
    pub leave_type: String,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub status: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateLeaveRequestDto {
    pub leave_type: String,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
    pub reason: Option<String>,
}
