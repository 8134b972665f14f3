use axum::{
    response::{IntoResponse, Response},
    http::StatusCode,
};

use crate::api::response;

/// Rejections raised before any network activity.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter a URL")]
    Empty,

    #[error("Please enter a valid URL")]
    Invalid,
}

/// Failures of the outbound webhook call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    #[error("HTTP error! status: {0}")]
    Status(u16),

    #[error("No summary received from the server")]
    EmptySummary,

    #[error("{0}")]
    Transport(String),
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Request(#[from] RequestError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Request(_) => StatusCode::BAD_GATEWAY,
            AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        response::error::<()>(self.status_code(), self.to_string()).into_response()
    }
}

impl From<reqwest::Error> for RequestError {
    fn from(err: reqwest::Error) -> Self {
        RequestError::Transport(err.to_string())
    }
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_what_the_form_shows() {
        assert_eq!(ValidationError::Empty.to_string(), "Please enter a URL");
        assert_eq!(ValidationError::Invalid.to_string(), "Please enter a valid URL");
        assert_eq!(RequestError::Status(500).to_string(), "HTTP error! status: 500");
        assert_eq!(
            RequestError::EmptySummary.to_string(),
            "No summary received from the server"
        );
    }

    #[test]
    fn wrapped_errors_keep_their_message() {
        let err = AppError::from(RequestError::Status(404));
        assert_eq!(err.to_string(), "HTTP error! status: 404");
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);

        let err = AppError::from(ValidationError::Invalid);
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
