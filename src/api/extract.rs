use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, QueryRejection},
        Query, State,
    },
    response::Json,
};
use hct_theme::Extraction;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

use crate::error::ApiError;
use crate::models::AppConfig;
use crate::services::{ImageLoader, ImageSource};

/// Largest accepted `count`
pub const MAX_CANDIDATES: usize = 32;

/// Accept a candidate count in `1..=MAX_CANDIDATES`
pub fn check_count(count: usize) -> Result<usize, ApiError> {
    if count == 0 || count > MAX_CANDIDATES {
        return Err(ApiError::BadRequest(format!(
            "count must be between 1 and {MAX_CANDIDATES}"
        )));
    }
    Ok(count)
}

/// Query for /api/extract
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ExtractQuery {
    /// Number of candidates (defaults to the configured count)
    pub count: Option<usize>,
}

/// Response from the /api/extract endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct ExtractResponse {
    /// Distinct colors, most frequent first
    pub candidates: Vec<String>,
    /// Best seed among the candidates, `#6750A4` when there are none
    pub primary: String,
}

impl From<&Extraction> for ExtractResponse {
    fn from(extraction: &Extraction) -> Self {
        Self {
            candidates: extraction.candidates.iter().map(|c| c.to_hex()).collect(),
            primary: extraction.primary.to_hex(),
        }
    }
}

/// Extract seed colors from an image
///
/// Upload a PNG as the request body. Fully transparent images yield no
/// candidates and the default seed.
#[utoipa::path(
    post,
    path = "/api/extract",
    params(ExtractQuery),
    request_body(content = Vec<u8>, description = "PNG image", content_type = "image/png"),
    responses(
        (status = 200, description = "Colors extracted", body = ExtractResponse),
        (status = 400, description = "Empty body or bad count"),
        (status = 413, description = "Image larger than extraction.max_image_bytes"),
        (status = 422, description = "Body is not a decodable PNG"),
    ),
    tag = "Extraction"
)]
pub async fn handle_extract(
    State(config): State<Arc<AppConfig>>,
    State(loader): State<Arc<ImageLoader>>,
    query: Result<Query<ExtractQuery>, QueryRejection>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ExtractResponse>, ApiError> {
    let Query(query) = query?;
    let body = body?;
    if body.is_empty() {
        return Err(ApiError::BadRequest("Request body must be a PNG image".into()));
    }

    let count = check_count(query.count.unwrap_or(config.extraction.candidates))?;

    let extractor = config.extraction.extractor().candidates(count);
    let extraction = loader
        .extract(ImageSource::Bytes(body.to_vec()), &extractor)
        .await?;

    tracing::info!(
        bytes = body.len(),
        candidates = extraction.candidates.len(),
        primary = %extraction.primary,
        "Extracted colors from upload"
    );

    Ok(Json(ExtractResponse::from(&extraction)))
}
