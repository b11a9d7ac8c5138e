use axum::response::Json;

use crate::types::MessageResponse;

pub const HEALTHY_MESSAGE: &str = "Service is healthy";

/// Health check endpoint
pub async fn health_check() -> Json<MessageResponse> {
    Json(MessageResponse::now(HEALTHY_MESSAGE))
}
