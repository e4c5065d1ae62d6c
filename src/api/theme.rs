use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
    Json as JsonExtractor,
};
use hct_theme::{Rgb, Theme};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use super::scheme::RoleMap;
use crate::error::ApiError;
use crate::models::AppConfig;
use crate::services::{ImageLoader, ImageSource, ThemeStore};

/// Current theme
#[derive(Debug, Serialize, ToSchema)]
pub struct ThemeResponse {
    pub seed: String,
    #[schema(value_type = Object)]
    pub light: RoleMap,
    #[schema(value_type = Object)]
    pub dark: RoleMap,
    /// Extraction candidates, present when the theme came from an image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidates: Option<Vec<String>>,
}

impl ThemeResponse {
    pub fn new(theme: &Theme) -> Self {
        Self {
            seed: theme.seed.to_hex(),
            light: RoleMap::from_scheme(&theme.light),
            dark: RoleMap::from_scheme(&theme.dark),
            candidates: None,
        }
    }
}

/// Request body for replacing the current theme
///
/// Exactly one of `seed` and `image_url` must be given.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateThemeRequest {
    /// New seed as `#RRGGBB`
    pub seed: Option<String>,
    /// URL of a PNG wallpaper to extract the seed from
    pub image_url: Option<String>,
}

/// Get the current theme
#[utoipa::path(
    get,
    path = "/api/theme",
    responses(
        (status = 200, description = "Current light and dark schemes", body = ThemeResponse),
    ),
    tag = "Theme"
)]
pub async fn handle_get_theme<S: ThemeStore>(
    State(store): State<Arc<S>>,
) -> Result<Json<ThemeResponse>, ApiError> {
    let theme = store.current().await?;
    Ok(Json(ThemeResponse::new(&theme)))
}

/// Replace the current theme
///
/// Sets a new seed directly, or extracts one from a PNG at `image_url`.
#[utoipa::path(
    put,
    path = "/api/theme",
    request_body = UpdateThemeRequest,
    responses(
        (status = 200, description = "Theme replaced", body = ThemeResponse),
        (status = 400, description = "Invalid request, seed or image URL"),
        (status = 422, description = "Image is not a decodable PNG"),
    ),
    tag = "Theme"
)]
pub async fn handle_put_theme<S: ThemeStore>(
    State(config): State<Arc<AppConfig>>,
    State(store): State<Arc<S>>,
    State(loader): State<Arc<ImageLoader>>,
    request: Result<JsonExtractor<UpdateThemeRequest>, JsonRejection>,
) -> Result<Json<ThemeResponse>, ApiError> {
    let JsonExtractor(request) = request?;
    match (request.seed, request.image_url) {
        (Some(seed), None) => {
            let seed: Rgb = seed.parse()?;
            let theme = store.replace(Theme::from_seed(seed)).await?;
            Ok(Json(ThemeResponse::new(&theme)))
        }
        (None, Some(url)) => {
            let source = match ImageSource::parse(&url) {
                source @ ImageSource::Url(_) => source,
                _ => {
                    return Err(ApiError::BadRequest(
                        "image_url must be an http(s) URL".into(),
                    ))
                }
            };
            let extraction = loader
                .extract(source, &config.extraction.extractor())
                .await?;
            tracing::info!(url = %url, primary = %extraction.primary, "Theme seed extracted from image");

            let theme = store.replace(Theme::from_seed(extraction.primary)).await?;
            let mut response = ThemeResponse::new(&theme);
            response.candidates = Some(extraction.candidates.iter().map(|c| c.to_hex()).collect());
            Ok(Json(response))
        }
        _ => Err(ApiError::BadRequest(
            "Provide exactly one of seed or image_url".into(),
        )),
    }
}
