use crate::models::UnknownLabel;
use axum::http::StatusCode;
use thiserror::Error;

/// Failure talking to the classification service. Any variant aborts the
/// whole submission.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("classification request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("classification service responded with status {0}")]
    Status(u16),

    #[error("classification service returned {actual} results for {expected} reviews")]
    ResultCount { expected: usize, actual: usize },

    #[error("invalid classification payload: {0}")]
    Label(#[from] UnknownLabel),
}

/// Blank submission, caught before anything reaches the network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ValidationError(pub &'static str);

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::internal(err)
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
