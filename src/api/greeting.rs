use axum::response::Json;

use crate::types::MessageResponse;

pub const GREETING_MESSAGE: &str = "Hello from Go API";

pub async fn greet() -> Json<MessageResponse> {
    Json(MessageResponse::now(GREETING_MESSAGE))
}
