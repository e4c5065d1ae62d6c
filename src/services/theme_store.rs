use crate::error::ApiError;
use async_trait::async_trait;
use hct_theme::Theme;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Trait for the current-theme holder
#[async_trait]
pub trait ThemeStore: Send + Sync {
    /// The theme currently in effect
    async fn current(&self) -> Result<Arc<Theme>, ApiError>;

    /// Replace the current theme, returning the new one
    async fn replace(&self, theme: Theme) -> Result<Arc<Theme>, ApiError>;
}

/// In-memory current theme
pub struct InMemoryThemeStore {
    theme: Arc<RwLock<Arc<Theme>>>,
}

impl InMemoryThemeStore {
    pub fn new(initial: Theme) -> Self {
        Self {
            theme: Arc::new(RwLock::new(Arc::new(initial))),
        }
    }
}

#[async_trait]
impl ThemeStore for InMemoryThemeStore {
    async fn current(&self) -> Result<Arc<Theme>, ApiError> {
        let theme = self.theme.read().await;
        Ok(theme.clone())
    }

    async fn replace(&self, theme: Theme) -> Result<Arc<Theme>, ApiError> {
        let theme = Arc::new(theme);
        let mut current = self.theme.write().await;
        *current = theme.clone();
        tracing::info!(seed = %theme.seed, "Current theme replaced");
        Ok(theme)
    }
}
