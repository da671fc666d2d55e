use contracts::domain::purchase_requisition::PurchaseRequisitionDto;
use serde::Serialize;

use crate::shared::http;

#[derive(Debug, Clone, Serialize)]
pub struct RequisitionDecisionDto {
    pub requisition_id: String,
    pub approve: bool,
    pub comment: Option<String>,
}

pub async fn fetch_my() -> Result<Vec<PurchaseRequisitionDto>, String> {
    http::get_json("/api/requisitions/my").await
}

/// Requisitions at the supervisor approval stage for the current user
pub async fn fetch_pending_approvals() -> Result<Vec<PurchaseRequisitionDto>, String> {
    http::get_json("/api/requisitions/pending-approvals").await
}

/// Requisitions at the supply chain review stage
pub async fn fetch_pending_review() -> Result<Vec<PurchaseRequisitionDto>, String> {
    http::get_json("/api/requisitions/pending-review").await
}

pub async fn decide(dto: &RequisitionDecisionDto) -> Result<(), String> {
    http::post_json_no_content("/api/requisitions/decision", dto).await
}
