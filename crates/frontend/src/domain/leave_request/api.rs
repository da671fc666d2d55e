use contracts::domain::leave_request::{CreateLeaveRequestDto, LeaveRequestDto};
use serde::Serialize;

use crate::shared::http;

#[derive(Debug, Clone, Serialize)]
pub struct LeaveDecisionDto {
    pub request_id: String,
    pub approve: bool,
    pub comment: Option<String>,
}

pub async fn fetch_my() -> Result<Vec<LeaveRequestDto>, String> {
    http::get_json("/api/leave-requests/my").await
}

/// Requests at the caller's approval stage (supervisor or HR)
pub async fn fetch_pending_approvals() -> Result<Vec<LeaveRequestDto>, String> {
    http::get_json("/api/leave-requests/pending-approvals").await
}

pub async fn create(dto: &CreateLeaveRequestDto) -> Result<LeaveRequestDto, String> {
    http::post_json("/api/leave-requests", dto).await
}

pub async fn decide(dto: &LeaveDecisionDto) -> Result<(), String> {
    http::post_json_no_content("/api/leave-requests/decision", dto).await
}
