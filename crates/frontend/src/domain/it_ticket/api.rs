use contracts::domain::it_ticket::{CreateItTicketDto, ItTicketDto};

use crate::shared::http;

pub async fn fetch_my() -> Result<Vec<ItTicketDto>, String> {
    http::get_json("/api/it-tickets/my").await
}

/// Full queue, IT staff only
pub async fn fetch_queue() -> Result<Vec<ItTicketDto>, String> {
    http::get_json("/api/it-tickets/queue").await
}

pub async fn create(dto: &CreateItTicketDto) -> Result<ItTicketDto, String> {
    http::post_json("/api/it-tickets", dto).await
}
