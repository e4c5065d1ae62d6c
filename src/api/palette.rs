use axum::{
    extract::{rejection::QueryRejection, Query},
    response::Json,
};
use hct_theme::{Hct, Rgb, TonalPalette};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::ApiError;

/// Query for /api/palette
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaletteQuery {
    /// Seed color as `#RRGGBB`
    pub seed: Option<String>,
}

/// One tone stop
#[derive(Debug, Serialize, ToSchema)]
pub struct ToneEntry {
    pub tone: u8,
    pub color: String,
}

/// Response from the /api/palette endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct PaletteResponse {
    pub seed: String,
    /// Seed hue in degrees
    pub hue: f64,
    pub chroma: f64,
    pub tone: f64,
    /// 13 stops from 0 (darkest) to 100 (lightest)
    pub tones: Vec<ToneEntry>,
}

impl PaletteResponse {
    pub fn new(seed: Rgb) -> Self {
        let hct = Hct::from(seed);
        let palette = TonalPalette::from_hct(hct);
        Self {
            seed: seed.to_hex(),
            hue: hct.hue(),
            chroma: hct.chroma(),
            tone: hct.tone(),
            tones: palette
                .iter()
                .map(|(tone, color)| ToneEntry {
                    tone,
                    color: color.to_hex(),
                })
                .collect(),
        }
    }
}

/// Generate a tonal palette
///
/// Returns the seed's HCT coordinates and its 13-stop tonal palette.
#[utoipa::path(
    get,
    path = "/api/palette",
    params(PaletteQuery),
    responses(
        (status = 200, description = "Palette generated", body = PaletteResponse),
        (status = 400, description = "Missing or invalid seed"),
    ),
    tag = "Palette"
)]
pub async fn handle_palette(
    query: Result<Query<PaletteQuery>, QueryRejection>,
) -> Result<Json<PaletteResponse>, ApiError> {
    let Query(query) = query?;
    let seed = query
        .seed
        .as_deref()
        .ok_or_else(|| ApiError::BadRequest("Missing required query parameter: seed".into()))?
        .parse::<Rgb>()?;

    Ok(Json(PaletteResponse::new(seed)))
}
