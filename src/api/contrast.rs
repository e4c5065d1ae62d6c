use axum::{
    extract::{rejection::QueryRejection, Query},
    response::Json,
};
use hct_theme::{accessible_text_color, contrast_ratio, Rgb, WCAG_AA_NORMAL};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::ApiError;

/// Query for /api/contrast
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ContrastQuery {
    /// Text color as `#RRGGBB`
    pub foreground: Option<String>,
    /// Background color as `#RRGGBB`
    pub background: Option<String>,
}

/// Response from the /api/contrast endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct ContrastResponse {
    /// WCAG contrast ratio, 1.0 to 21.0
    pub ratio: f64,
    /// Ratio is at least 4.5
    pub meets_aa: bool,
    /// Black or white, whichever is readable on the background
    pub text_color: String,
}

impl ContrastResponse {
    pub fn new(foreground: Rgb, background: Rgb) -> Self {
        let ratio = contrast_ratio(foreground, background);
        Self {
            ratio,
            meets_aa: ratio >= WCAG_AA_NORMAL,
            text_color: accessible_text_color(background).to_hex(),
        }
    }
}

fn required(value: Option<&str>, name: &str) -> Result<Rgb, ApiError> {
    let hex = value
        .ok_or_else(|| ApiError::BadRequest(format!("Missing required query parameter: {name}")))?;
    Ok(hex.parse()?)
}

/// Check color contrast
///
/// Computes the WCAG contrast ratio of two colors and suggests a text color
/// for the background.
#[utoipa::path(
    get,
    path = "/api/contrast",
    params(ContrastQuery),
    responses(
        (status = 200, description = "Contrast computed", body = ContrastResponse),
        (status = 400, description = "Missing or invalid color"),
    ),
    tag = "Contrast"
)]
pub async fn handle_contrast(
    query: Result<Query<ContrastQuery>, QueryRejection>,
) -> Result<Json<ContrastResponse>, ApiError> {
    let Query(query) = query?;
    let foreground = required(query.foreground.as_deref(), "foreground")?;
    let background = required(query.background.as_deref(), "background")?;

    Ok(Json(ContrastResponse::new(foreground, background)))
}
