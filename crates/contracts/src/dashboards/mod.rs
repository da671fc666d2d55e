use serde::{Deserialize, Serialize};

/// Role dashboard summary served by `/api/dashboard/{role}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardSummaryDto {
    pub open_items: u32,
    pub pending_approvals: u32,
    pub monthly_total: f64,
    pub currency: Option<String>,
    pub recent: Vec<RecentItemDto>,
}

/// A recent domain record of any kind, for the dashboard activity feed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentItemDto {
    pub kind: String,
    pub number: String,
    pub title: String,
    pub status: String,
    pub created_at: String,
}
