use contracts::domain::cash_request::{
    CashRequestDecisionDto, CashRequestDto, CreateCashRequestDto,
};

use crate::shared::http;

/// Cash requests created by the current user
pub async fn fetch_my() -> Result<Vec<CashRequestDto>, String> {
    http::get_json("/api/cash-requests/my").await
}

/// Cash requests waiting on the current user's approval stage
pub async fn fetch_pending_approvals() -> Result<Vec<CashRequestDto>, String> {
    http::get_json("/api/cash-requests/pending-approvals").await
}

pub async fn create(dto: &CreateCashRequestDto) -> Result<CashRequestDto, String> {
    http::post_json("/api/cash-requests", dto).await
}

pub async fn decide(dto: &CashRequestDecisionDto) -> Result<(), String> {
    http::post_json_no_content("/api/cash-requests/decision", dto).await
}

/// Employee cancellation of a request that has not been approved yet
pub async fn cancel(id: &str) -> Result<(), String> {
    http::delete(&format!("/api/cash-requests/{}", id)).await
}

/// Path of the disbursement voucher document for a request
pub fn voucher_path(id: &str) -> String {
    format!("/api/cash-requests/{}/voucher", id)
}
