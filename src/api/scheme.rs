use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Json,
};
use hct_theme::{Rgb, Scheme};
use serde::{Deserialize, Serialize, Serializer};
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

use crate::error::ApiError;
use crate::models::AppConfig;
use crate::services::ThemeStore;

/// Query for /api/scheme
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SchemeQuery {
    /// Seed color as `#RRGGBB` (defaults to the current theme's seed)
    pub seed: Option<String>,
    /// Dark variant (defaults to the configured mode)
    pub dark: Option<bool>,
}

/// Role name to `#RRGGBB`, serialized as an object in role order
#[derive(Debug, Clone, PartialEq)]
pub struct RoleMap(pub Vec<(&'static str, String)>);

impl RoleMap {
    pub fn from_scheme(scheme: &Scheme) -> Self {
        Self(scheme.to_hex_map())
    }

    pub fn get(&self, role: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(name, _)| *name == role)
            .map(|(_, hex)| hex.as_str())
    }
}

impl Serialize for RoleMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(name, hex)| (*name, hex)))
    }
}

/// Response from the /api/scheme endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct SchemeResponse {
    /// Seed the scheme was generated from
    pub seed: String,
    /// Whether this is the dark variant
    pub dark: bool,
    /// All 28 roles, camelCase name to `#RRGGBB`
    #[schema(value_type = Object)]
    pub roles: RoleMap,
}

impl SchemeResponse {
    pub fn new(seed: Rgb, scheme: &Scheme) -> Self {
        Self {
            seed: seed.to_hex(),
            dark: scheme.is_dark(),
            roles: RoleMap::from_scheme(scheme),
        }
    }
}

/// Generate a color scheme
///
/// Returns every scheme role for a seed color in light or dark mode. Without
/// a seed, the current theme's seed is used.
#[utoipa::path(
    get,
    path = "/api/scheme",
    params(SchemeQuery),
    responses(
        (status = 200, description = "Scheme generated", body = SchemeResponse),
        (status = 400, description = "Seed is not a #RRGGBB color"),
    ),
    tag = "Scheme"
)]
pub async fn handle_scheme<S: ThemeStore>(
    State(config): State<Arc<AppConfig>>,
    State(store): State<Arc<S>>,
    query: Result<Query<SchemeQuery>, QueryRejection>,
) -> Result<Json<SchemeResponse>, ApiError> {
    let Query(query) = query?;
    let dark = query.dark.unwrap_or(config.theme.dark);

    let seed = match query.seed.as_deref() {
        Some(hex) => hex.parse::<Rgb>()?,
        None => store.current().await?.seed,
    };

    tracing::debug!(seed = %seed, dark, "Scheme request");

    let scheme = Scheme::from_seed(seed, dark);
    Ok(Json(SchemeResponse::new(seed, &scheme)))
}
