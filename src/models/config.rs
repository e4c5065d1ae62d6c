use hct_theme::{ExtractOptions, ParseColorError, Rgb, SeedExtractor, DEFAULT_SEED};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Config file used when `CONFIG_FILE` is not set.
pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Initial current theme
    #[serde(default)]
    pub theme: ThemeConfig,

    /// Wallpaper extraction settings
    #[serde(default)]
    pub extraction: ExtractionConfig,
}

/// HTTP server settings
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Listen address (overridden by `BIND_ADDR`)
    #[serde(default = "default_bind")]
    pub bind: String,
}

fn default_bind() -> String {
    "0.0.0.0:3000".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

/// Theme the server starts with
#[derive(Debug, Deserialize, Clone)]
pub struct ThemeConfig {
    /// Seed color as `#RRGGBB`
    #[serde(default = "default_seed")]
    pub seed: String,

    /// Mode used by `/api/scheme` when the request does not specify one
    #[serde(default)]
    pub dark: bool,
}

fn default_seed() -> String {
    DEFAULT_SEED.to_hex()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            dark: false,
        }
    }
}

/// Wallpaper extraction settings
#[derive(Debug, Deserialize, Clone)]
pub struct ExtractionConfig {
    /// Number of distinct candidates to extract
    #[serde(default = "default_candidates")]
    pub candidates: usize,

    /// Largest accepted encoded image, in bytes
    #[serde(default = "default_max_image_bytes")]
    pub max_image_bytes: usize,

    /// Timeout for fetching images by URL
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_secs: u64,
}

fn default_candidates() -> usize {
    hct_theme::extract::DEFAULT_CANDIDATES
}

fn default_max_image_bytes() -> usize {
    20 * 1024 * 1024
}

fn default_fetch_timeout() -> u64 {
    10
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            candidates: default_candidates(),
            max_image_bytes: default_max_image_bytes(),
            fetch_timeout_secs: default_fetch_timeout(),
        }
    }
}

impl ExtractionConfig {
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    /// Extractor configured with the candidate count.
    pub fn extractor(&self) -> SeedExtractor {
        SeedExtractor::new(ExtractOptions::new().candidates(self.candidates))
    }
}

impl AppConfig {
    /// Load configuration from `CONFIG_FILE` (or `config.yaml`), then apply
    /// the `BIND_ADDR` override.
    pub fn from_env() -> Self {
        let explicit = std::env::var("CONFIG_FILE").ok().map(PathBuf::from);
        let mut config = match explicit {
            Some(path) => Self::load(&path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::load(path)
                } else {
                    tracing::debug!("No config.yaml found, using defaults");
                    Self::default()
                }
            }
        };

        if let Ok(bind) = std::env::var("BIND_ADDR") {
            config.server.bind = bind;
        }
        config
    }

    /// Load configuration from a YAML file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::parse(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        seed = %config.theme.seed,
                        candidates = config.extraction.candidates,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Parse configuration from YAML text
    pub fn parse(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Configured initial seed
    pub fn seed(&self) -> Result<Rgb, ParseColorError> {
        self.theme.seed.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.server.bind, "0.0.0.0:3000");
        assert_eq!(config.theme.seed, "#6750A4");
        assert!(!config.theme.dark);
        assert_eq!(config.extraction.candidates, 5);
        assert_eq!(config.extraction.max_image_bytes, 20 * 1024 * 1024);
        assert_eq!(config.extraction.fetch_timeout(), Duration::from_secs(10));
        assert_eq!(config.seed().unwrap(), DEFAULT_SEED);
    }

    #[test]
    fn test_deserialize_config() {
        let yaml = r##"
server:
  bind: "127.0.0.1:8080"
theme:
  seed: "#336699"
  dark: true
extraction:
  candidates: 8
  max_image_bytes: 1048576
  fetch_timeout_secs: 3
"##;

        let config = AppConfig::parse(yaml).unwrap();

        assert_eq!(config.server.bind, "127.0.0.1:8080");
        assert_eq!(config.seed().unwrap(), Rgb::new(0x33, 0x66, 0x99));
        assert!(config.theme.dark);
        assert_eq!(config.extraction.candidates, 8);
        assert_eq!(config.extraction.max_image_bytes, 1_048_576);
        assert_eq!(config.extraction.fetch_timeout_secs, 3);
        assert_eq!(config.extraction.extractor().options().candidates, 8);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = AppConfig::parse("theme:\n  dark: true\n").unwrap();

        assert!(config.theme.dark);
        assert_eq!(config.theme.seed, "#6750A4");
        assert_eq!(config.server.bind, "0.0.0.0:3000");
        assert_eq!(config.extraction.candidates, 5);
    }

    #[test]
    fn test_empty_document_is_default() {
        // serde_yaml reads an empty document as unit, not an empty map
        let config = AppConfig::parse("{}").unwrap();
        assert_eq!(config.extraction.fetch_timeout_secs, 10);
    }

    #[test]
    fn test_invalid_seed_is_reported() {
        let config = AppConfig::parse("theme:\n  seed: purple\n").unwrap();
        assert!(config.seed().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "theme:\n  seed: \"#ff0000\"\n").unwrap();

        let config = AppConfig::load(&path);
        assert_eq!(config.seed().unwrap(), Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_load_malformed_file_falls_back() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "theme: [not, a, map]\n").unwrap();

        let config = AppConfig::load(&path);
        assert_eq!(config.theme.seed, "#6750A4");
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let config = AppConfig::load(Path::new("/nonexistent/chromaseed/config.yaml"));
        assert_eq!(config.theme.seed, "#6750A4");
    }
}
