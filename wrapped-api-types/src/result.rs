use serde::{Deserialize, Serialize};

/// Error envelope for JSON API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonError {
    pub error_message: String,
}
