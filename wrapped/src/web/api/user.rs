use axum::extract::{Path, State};
use axum::Json;
use wrapped_api_types::user_data::UserData;
use wrapped_api_types::UserRecord;
use wrapped_backend::BackendClient;

use crate::web::error::ApiError;
use crate::web::oauth::AuthGithubUser;

pub(crate) async fn current_user(user: AuthGithubUser) -> Json<UserData> {
    Json(UserData {
        id: user.id,
        username: user.login,
        avatar: user.avatar_url,
    })
}

pub(crate) async fn get_stats(
    State(backend): State<BackendClient>,
    Path(username): Path<String>,
) -> Result<Json<UserRecord>, ApiError> {
    Ok(Json(backend.get_user(&username).await?))
}

/// Upsert of the caller's own row. Replays of the same payload land on the
/// same stored row.
pub(crate) async fn upsert_stats(
    State(backend): State<BackendClient>,
    user: AuthGithubUser,
    Json(record): Json<UserRecord>,
) -> Result<Json<UserRecord>, ApiError> {
    if record.username != user.login {
        return Err(ApiError::UsernameMismatch);
    }
    Ok(Json(backend.upsert_user(&record).await?))
}
