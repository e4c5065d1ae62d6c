pub mod config;

pub use config::{AppConfig, ExtractionConfig, ServerConfig, ThemeConfig, DEFAULT_CONFIG_FILE};
