use serde::{Deserialize, Serialize};

/// The authenticated session user as returned by `/api/user`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserData {
    pub id: u64,
    pub username: String,
    pub avatar: String,
}
