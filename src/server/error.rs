use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::foundation::error::BlueboardError;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
}

/// A `BlueboardError` on its way to an HTTP client.
#[derive(Debug)]
pub struct ApiError(pub BlueboardError);

impl ApiError {
    pub fn from_rejection(rejection: JsonRejection) -> Self {
        Self(BlueboardError::validation(rejection.body_text()))
    }

    pub fn status(&self) -> StatusCode {
        match &self.0 {
            BlueboardError::Validation(_) => StatusCode::BAD_REQUEST,
            BlueboardError::NotFound(_) => StatusCode::NOT_FOUND,
            BlueboardError::RemoteGeneration(_) => StatusCode::BAD_GATEWAY,
            BlueboardError::Render(_)
            | BlueboardError::Storage(_)
            | BlueboardError::Serde(_)
            | BlueboardError::Startup(_)
            | BlueboardError::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<BlueboardError> for ApiError {
    fn from(err: BlueboardError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = match &self.0 {
            BlueboardError::Storage(detail) => {
                tracing::error!(%detail, "storage failure");
                "internal storage error".to_string()
            }
            BlueboardError::Other(err) => {
                tracing::error!(error = %err, "unhandled failure");
                "internal error".to_string()
            }
            BlueboardError::RemoteGeneration(_) => {
                tracing::warn!(error = %self.0, "generation failed");
                self.0.to_string()
            }
            other => other.to_string(),
        };
        let body = ErrorBody {
            success: false,
            error,
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/server/error.rs"]
mod tests;
