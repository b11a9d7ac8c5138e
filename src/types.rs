use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// JSON body returned by every endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl MessageResponse {
    /// Stamp `message` with the current wall-clock time
    pub fn now(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}
