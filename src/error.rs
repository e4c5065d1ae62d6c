use axum::{
    extract::rejection::{BytesRejection, JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use hct_theme::{ParseColorError, PixelDataError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Invalid color: {0}")]
    InvalidColor(#[from] ParseColorError),

    #[error("Image error: {0}")]
    Image(#[from] ImageError),

    #[error("Internal error: {0}")]
    Internal(String),

    /// An extractor rejected the request; keeps axum's status
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        ApiError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to fetch image: {0}")]
    Fetch(String),

    #[error("Image URL returned HTTP {0}")]
    Status(u16),

    #[error("PNG decode error: {0}")]
    Decode(String),

    #[error("Unsupported image format: {0}")]
    Unsupported(String),

    #[error("Image too large: {size} bytes (max {max})")]
    TooLarge { size: usize, max: usize },

    #[error("Pixel data error: {0}")]
    PixelData(#[from] PixelDataError),

    #[error("Image task failed: {0}")]
    Task(String),
}

impl ImageError {
    /// HTTP status for this error when it reaches a client.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ImageError::Decode(_) | ImageError::Unsupported(_) | ImageError::PixelData(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ImageError::Fetch(_) | ImageError::Status(_) | ImageError::TooLarge { .. } => {
                StatusCode::BAD_REQUEST
            }
            ImageError::Io { .. } | ImageError::Task(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::InvalidColor(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::Image(e) => (e.status_code(), e.to_string()),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
            ApiError::Rejected { status, message } => (*status, message.clone()),
        };

        if status.is_server_error() {
            tracing::error!(error = %message, "Request failed");
        }

        let body = Json(json!({
            "status": status.as_u16(),
            "error": message,
        }));

        (status, body).into_response()
    }
}
