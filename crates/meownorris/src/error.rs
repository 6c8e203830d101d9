use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use meownorris_core::error::ServiceError;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Service(ServiceError::ServiceUnavailable { .. }) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            Self::Service(ServiceError::UnknownCategory(_)) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = serde_json::json!({ "detail": self.to_string() });

        (status, Json(body)).into_response()
    }
}
