//! White-label branding profile.
//!
//! The built-in profile is a `const`; deployments may override individual
//! fields through the `[branding]` table of `config.toml` or `BRANDING_*`
//! environment variables. The resolved profile is installed once at startup
//! and read by reference for the rest of the process.

use std::borrow::Cow;

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

/// Visual and textual constants that customize the application's appearance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandingProfile {
    /// Display name shown in UI chrome.
    pub app_name: Cow<'static, str>,
    /// Relative resource path of the logo image.
    pub logo_path: Cow<'static, str>,
    /// Relative resource path of the favicon.
    pub favicon_path: Cow<'static, str>,
    pub primary_color: Cow<'static, str>,
    pub secondary_color: Cow<'static, str>,
    pub accent_color: Cow<'static, str>,
    /// Absolute URL of the support documentation.
    pub support_url: Cow<'static, str>,
}

pub const DEFAULT_BRANDING: BrandingProfile = BrandingProfile {
    app_name: Cow::Borrowed("CodingSoft Open WebUI"),
    logo_path: Cow::Borrowed("/branding/logo.png"),
    favicon_path: Cow::Borrowed("/branding/favicon.png"),
    primary_color: Cow::Borrowed("#3b82f6"),
    secondary_color: Cow::Borrowed("#1e40af"),
    accent_color: Cow::Borrowed("#60a5fa"),
    support_url: Cow::Borrowed("https://docs.webui.codingsoft.org"),
};

impl Default for BrandingProfile {
    fn default() -> Self {
        DEFAULT_BRANDING
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BrandingError {
    #[error("branding profile already installed")]
    AlreadyInstalled,
}

static BRANDING: OnceCell<BrandingProfile> = OnceCell::new();

/// Install the process-wide profile. Only the first call succeeds.
pub fn install(profile: BrandingProfile) -> Result<&'static BrandingProfile, BrandingError> {
    match BRANDING.try_insert(profile) {
        Ok(installed) => {
            info!(app_name = %installed.app_name, "branding profile installed");
            Ok(installed)
        }
        Err(_) => Err(BrandingError::AlreadyInstalled),
    }
}

/// The installed profile, or the built-in one when nothing was installed.
/// Falling back seals the slot, so later `install` calls fail.
pub fn current() -> &'static BrandingProfile {
    BRANDING.get_or_init(|| {
        debug!("no branding profile installed; using built-in defaults");
        BrandingProfile::default()
    })
}

/// Per-field overrides from the `[branding]` table.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct BrandingOverrides {
    #[serde(default)]
    pub app_name: Option<String>,
    #[serde(default)]
    pub logo_path: Option<String>,
    #[serde(default)]
    pub favicon_path: Option<String>,
    #[serde(default)]
    pub primary_color: Option<String>,
    #[serde(default)]
    pub secondary_color: Option<String>,
    #[serde(default)]
    pub accent_color: Option<String>,
    #[serde(default)]
    pub support_url: Option<String>,
}

impl BrandingOverrides {
    /// Fill fields left unset (or blank) in TOML from `BRANDING_*` variables.
    pub fn normalize_from_env(&mut self) {
        self.apply_env_with(|key| std::env::var(key).ok());
    }

    pub fn apply_env_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let slots = [
            ("BRANDING_APP_NAME", &mut self.app_name),
            ("BRANDING_LOGO_PATH", &mut self.logo_path),
            ("BRANDING_FAVICON_PATH", &mut self.favicon_path),
            ("BRANDING_PRIMARY_COLOR", &mut self.primary_color),
            ("BRANDING_SECONDARY_COLOR", &mut self.secondary_color),
            ("BRANDING_ACCENT_COLOR", &mut self.accent_color),
            ("BRANDING_SUPPORT_URL", &mut self.support_url),
        ];
        for (key, slot) in slots {
            if !is_blank(slot) {
                continue;
            }
            if let Some(value) = lookup(key) {
                debug!(%key, "branding field taken from environment");
                *slot = Some(value);
            }
        }
    }

    /// Merge over the built-in profile. Blank values fall back to the default.
    pub fn resolve(self) -> BrandingProfile {
        let d = DEFAULT_BRANDING;
        BrandingProfile {
            app_name: pick(self.app_name, d.app_name),
            logo_path: pick(self.logo_path, d.logo_path),
            favicon_path: pick(self.favicon_path, d.favicon_path),
            primary_color: pick(self.primary_color, d.primary_color),
            secondary_color: pick(self.secondary_color, d.secondary_color),
            accent_color: pick(self.accent_color, d.accent_color),
            support_url: pick(self.support_url, d.support_url),
        }
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}

fn pick(value: Option<String>, fallback: Cow<'static, str>) -> Cow<'static, str> {
    match value {
        Some(v) if !v.trim().is_empty() => Cow::Owned(v.trim().to_string()),
        _ => fallback,
    }
}
