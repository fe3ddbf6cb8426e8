use configs::{BrandingProfile, DEFAULT_BRANDING};
use regex::Regex;
use url::Url;

fn fields(p: &BrandingProfile) -> Vec<(&'static str, &str)> {
    vec![
        ("appName", &*p.app_name),
        ("logoPath", &*p.logo_path),
        ("faviconPath", &*p.favicon_path),
        ("primaryColor", &*p.primary_color),
        ("secondaryColor", &*p.secondary_color),
        ("accentColor", &*p.accent_color),
        ("supportUrl", &*p.support_url),
    ]
}

#[test]
fn serialized_profile_has_exactly_the_expected_keys() {
    let v = serde_json::to_value(&DEFAULT_BRANDING).expect("serialize");
    let obj = v.as_object().expect("object");
    let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
    keys.sort_unstable();
    let mut expected: Vec<&str> = fields(&DEFAULT_BRANDING).into_iter().map(|(k, _)| k).collect();
    expected.sort_unstable();
    assert_eq!(keys, expected);
    assert!(obj.values().all(|v| v.is_string()));
}

#[test]
fn every_field_is_non_empty() {
    for (name, value) in fields(&DEFAULT_BRANDING) {
        assert!(!value.trim().is_empty(), "{name} is empty");
    }
}

#[test]
fn colors_are_hex() {
    let hex = Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").unwrap();
    for c in [
        &DEFAULT_BRANDING.primary_color,
        &DEFAULT_BRANDING.secondary_color,
        &DEFAULT_BRANDING.accent_color,
    ] {
        assert!(hex.is_match(c), "{c} is not a hex color");
    }
}

#[test]
fn support_url_is_absolute() {
    let url = Url::parse(&DEFAULT_BRANDING.support_url).expect("support url parses");
    assert_eq!(url.scheme(), "https");
    assert_eq!(url.host_str(), Some("docs.webui.codingsoft.org"));
}

#[test]
fn asset_paths_are_rooted_resources() {
    assert!(DEFAULT_BRANDING.logo_path.starts_with('/'));
    assert!(DEFAULT_BRANDING.favicon_path.starts_with('/'));
}
