//! Rendering helpers that turn a [`BrandingProfile`] into page fragments.

use std::fmt::Write;

use clap::ValueEnum;
use configs::BrandingProfile;

/// Output shape of [`render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Template context as pretty-printed JSON.
    Json,
    /// `:root` custom properties.
    Css,
    /// `<title>` and favicon tags.
    Head,
}

pub fn render(format: Format, profile: &BrandingProfile) -> serde_json::Result<String> {
    Ok(match format {
        Format::Json => {
            let mut json = serde_json::to_string_pretty(&template_context(profile)?)?;
            json.push('\n');
            json
        }
        Format::Css => css_variables(profile),
        Format::Head => head_tags(profile),
    })
}

/// `:root` block exposing the palette as CSS custom properties.
pub fn css_variables(profile: &BrandingProfile) -> String {
    let mut css = String::from(":root {\n");
    for (name, value) in [
        ("primary", &profile.primary_color),
        ("secondary", &profile.secondary_color),
        ("accent", &profile.accent_color),
    ] {
        let _ = writeln!(css, "  --brand-{name}: {value};");
    }
    css.push_str("}\n");
    css
}

/// `<title>` and favicon `<link>` for the document head.
pub fn head_tags(profile: &BrandingProfile) -> String {
    format!(
        "<title>{}</title>\n<link rel=\"icon\" href=\"{}\">\n",
        escape_html(&profile.app_name),
        escape_html(&profile.favicon_path),
    )
}

pub fn page_title(profile: &BrandingProfile, section: Option<&str>) -> String {
    match section.map(str::trim) {
        Some(s) if !s.is_empty() => format!("{s} • {}", profile.app_name),
        _ => profile.app_name.to_string(),
    }
}

/// camelCase object for template engines.
pub fn template_context(profile: &BrandingProfile) -> serde_json::Result<serde_json::Value> {
    serde_json::to_value(profile)
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
