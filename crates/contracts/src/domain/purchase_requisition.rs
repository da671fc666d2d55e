use serde::{Deserialize, Serialize};

/// Purchase requisition pipeline statuses.
pub mod status {
    pub const PENDING_SUPERVISOR: &str = "pending_supervisor";
    pub const PENDING_SUPPLY_CHAIN_REVIEW: &str = "pending_supply_chain_review";
    pub const PENDING_FINANCE: &str = "pending_finance";
    pub const APPROVED: &str = "approved";
    pub const IN_PROCUREMENT: &str = "in_procurement";
    pub const DELIVERED: &str = "delivered";
    pub const SUPPLY_CHAIN_REJECTED: &str = "supply_chain_rejected";
    pub const FINANCE_REJECTED: &str = "finance_rejected";
    pub const REJECTED: &str = "rejected";
    pub const CANCELLED: &str = "cancelled";
}

pub mod priority {
    pub const LOW: &str = "Low";
    pub const MEDIUM: &str = "Medium";
    pub const HIGH: &str = "High";
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseRequisitionDto {
    pub id: String,
    pub number: String,
    pub requester: String,
    pub department: Option<String>,
    pub description: String,
    pub estimated_cost: f64,
    pub currency: String,
    pub priority: String,
    pub status: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequisitionLineDto {
    pub id: String,
    pub item: String,
    pub quantity: f64,
    pub unit: String,
    pub estimated_unit_price: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePurchaseRequisitionDto {
    pub description: String,
    pub estimated_cost: f64,
    pub currency: String,
    pub priority: String,
    pub lines: Vec<CreateRequisitionLineDto>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateRequisitionLineDto {
    pub item: String,
    pub quantity: f64,
    pub unit: String,
    pub estimated_unit_price: f64,
}
