use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::warn;

pub mod branding;

pub use branding::{
    current, install, BrandingError, BrandingOverrides, BrandingProfile, DEFAULT_BRANDING,
};

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub branding: BrandingOverrides,
}

pub fn config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string())
}

pub fn load_default() -> Result<AppConfig> {
    load_from_file(&config_path())
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).with_context(|| format!("cannot read {path}"))?;
    load_from_str(&content).with_context(|| format!("invalid config in {path}"))
}

/// Like [`load_from_file`], but a file that does not exist yields the
/// built-in configuration. Unreadable or malformed files are still errors.
pub fn load_or_default(path: &str) -> Result<AppConfig> {
    if !std::path::Path::new(path).exists() {
        warn!(%path, "config file not found; using built-in branding");
        return Ok(AppConfig::default());
    }
    load_from_file(path)
}

pub fn load_from_str(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Apply environment overrides and merge over the built-in profile.
    pub fn branding_profile(&self) -> BrandingProfile {
        let mut overrides = self.branding.clone();
        overrides.normalize_from_env();
        overrides.resolve()
    }
}
