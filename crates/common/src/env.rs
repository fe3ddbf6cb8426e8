//! Environment/runtime helpers
//!
//! Sanity checks that branding assets are present at startup.

use std::path::{Path, PathBuf};

use configs::BrandingProfile;
use tracing::warn;

/// Warn for each branding image missing under `static_dir`; returns the
/// missing paths. Absolute URLs are served elsewhere and skipped. Never fails.
pub async fn check_assets(static_dir: &str, profile: &BrandingProfile) -> Vec<PathBuf> {
    let mut missing = Vec::new();
    for asset in [&profile.logo_path, &profile.favicon_path] {
        if asset.contains("://") {
            continue;
        }
        let path = Path::new(static_dir).join(asset.trim_start_matches('/'));
        if tokio::fs::metadata(&path).await.is_err() {
            warn!(path = %path.display(), "branding asset not found; it may 404");
            missing.push(path);
        }
    }
    missing
}
