use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use visionrelay_core::analyze::RequestError;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{0}")]
    BadRequest(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Model API returned HTTP {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("Failed to parse model API response: {0}")]
    InvalidResponse(String),

    #[error("Model returned an empty reply")]
    EmptyReply,
}

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::BadRequest(_) => StatusCode::BAD_REQUEST,
            Error::EmptyReply => StatusCode::BAD_GATEWAY,
            Error::Config(_)
            | Error::Network(_)
            | Error::Upstream { .. }
            | Error::InvalidResponse(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<RequestError> for Error {
    fn from(err: RequestError) -> Self {
        Error::BadRequest(err.to_string())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("Error: {self}");
        } else {
            log::warn!("Rejected request: {self}");
        }

        let body = serde_json::json!({
            "error": self.to_string(),
            "success": false,
        });

        (status, Json(body)).into_response()
    }
}
