use serde::{Deserialize, Serialize};

pub mod status {
    pub const OPEN: &str = "open";
    pub const IN_PROGRESS: &str = "in_progress";
    pub const ON_HOLD: &str = "on_hold";
    pub const RESOLVED: &str = "resolved";
    pub const CLOSED: &str = "closed";
}

pub mod priority {
    pub const LOW: &str = "low";
    pub const MEDIUM: &str = "medium";
    pub const HIGH: &str = "high";
    pub const URGENT: &str = "urgent";
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItTicketDto {
    pub id: String,
    pub number: String,
    pub reporter: String,
    pub subject: String,
    pub category: Option<String>,
    pub priority: String,
    pub status: String,
    pub assignee: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateItTicketDto {
    pub subject: String,
    pub description: String,
    pub category: Option<String>,
    pub priority: String,
}
