use axum::{
    response::{IntoResponse, Redirect, Response},
    Json,
};
use oauth2::{
    basic::BasicErrorResponseType, RequestTokenError, StandardErrorResponse,
};
use axum::http::StatusCode;
use thiserror::Error;
use tracing::error;
use wrapped_api_types::result::JsonError;
use wrapped_api_types::UnknownStat;

type TokenExchangeError = RequestTokenError<
    oauth2::reqwest::Error<reqwest::Error>,
    StandardErrorResponse<BasicErrorResponseType>,
>;

/// Errors surfaced by the JSON API.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not authorized to view this page")]
    NotAuthenticated,
    #[error("Stored token was not valid")]
    TokenInvalid,
    #[error("Signed-in user does not own this row")]
    UsernameMismatch,
    #[error("{0}")]
    UnknownStat(#[from] UnknownStat),
    #[error("Backend error {0}")]
    BackendError(#[from] wrapped_backend::Error),
    #[error("Generic error {0}")]
    AnyhowError(#[from] anyhow::Error),
    #[error("Error making an internal HTTP request {0}")]
    ReqwestError(#[from] reqwest::Error),
    #[error("Internal HTTP Error {0}")]
    AxumError(#[from] axum::http::Error),
    #[error("JSON error {0}")]
    JsonError(#[from] serde_json::Error),
}

impl ApiError {
    fn as_status_code(&self) -> StatusCode {
        match self {
            ApiError::NotAuthenticated | ApiError::TokenInvalid => StatusCode::UNAUTHORIZED,
            ApiError::UsernameMismatch => StatusCode::FORBIDDEN,
            ApiError::UnknownStat(_) => StatusCode::BAD_REQUEST,
            ApiError::BackendError(wrapped_backend::Error::RowNotFound { .. }) => {
                StatusCode::NOT_FOUND
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("error {}", self);
        let e = format!("{self}");

        (self.as_status_code(), Json(JsonError { error_message: e })).into_response()
    }
}

/// Errors surfaced by the HTML pages.
#[derive(Debug, Error)]
pub enum WebError {
    #[error("Not authorized to view this page")]
    NotAuthenticated,
    #[error("OAuth state did not match the login cookie")]
    StateMismatch,
    #[error("Error creating oauth token {0}")]
    TokenError(#[from] TokenExchangeError),
    #[error("{0}")]
    UnknownStat(#[from] UnknownStat),
    #[error("Backend error {0}")]
    BackendError(#[from] wrapped_backend::Error),
    #[error("Generic error {0}")]
    AnyhowError(#[from] anyhow::Error),
    #[error("Error making an internal HTTP request {0}")]
    ReqwestError(#[from] reqwest::Error),
    #[error("Internal HTTP Error {0}")]
    AxumError(#[from] axum::http::Error),
    #[error("JSON error {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Image error {0}")]
    Image(#[from] image::ImageError),
}

impl WebError {
    fn as_status_code(&self) -> StatusCode {
        match self {
            WebError::NotAuthenticated => StatusCode::UNAUTHORIZED,
            WebError::StateMismatch | WebError::UnknownStat(_) => StatusCode::BAD_REQUEST,
            WebError::BackendError(wrapped_backend::Error::RowNotFound { .. }) => {
                StatusCode::NOT_FOUND
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        error!("Error returned {self:?}");
        if let WebError::NotAuthenticated = self {
            return Redirect::to("/login").into_response();
        }
        (self.as_status_code(), format!("{self}")).into_response()
    }
}
