//! Query parameters -> badge configuration.
//!
//! Every field has a default and malformed values fall back to it, with one
//! exception: `links` must be a JSON array of strings when present, and a
//! bad value fails the request.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{HitBadgeError, Result};
use crate::number::{apply_delta, group_thousands, parse_delta};

use super::style::BadgeStyle;

pub const DEFAULT_LABEL: &str = "Total Hits";
pub const DEFAULT_COLOR: &str = "#9f9f9f";
pub const DEFAULT_LABEL_COLOR: &str = "#555";
pub const DEFAULT_LINK: &str = "https://github.com/hitbadge/hitbadge";
pub const DEFAULT_ICON_CDN: &str = "https://cdn.simpleicons.org";

/// Deployment-level defaults the builder needs but the caller cannot set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeDefaults {
    /// Link used when the request has no `links` parameter.
    pub link: String,
    /// Base URL icon names are resolved against.
    pub icon_cdn: String,
}

impl Default for BadgeDefaults {
    fn default() -> Self {
        Self {
            link: DEFAULT_LINK.to_string(),
            icon_cdn: DEFAULT_ICON_CDN.to_string(),
        }
    }
}

/// Everything the rasterizer needs to draw one badge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeConfig {
    pub label: String,
    pub message: String,
    pub color: String,
    pub label_color: String,
    pub style: BadgeStyle,
    /// Either an embedded `data:image/...` URI or an icon CDN URL. Empty means no logo.
    pub logo_base64: String,
    pub links: Vec<String>,
}

impl BadgeConfig {
    /// Build the configuration for a request whose counter now stands at `persisted`.
    pub fn build(
        query: &HashMap<String, String>,
        persisted: u64,
        defaults: &BadgeDefaults,
    ) -> Result<Self> {
        let param = |name: &str| query.get(name).map(String::as_str);

        let effective = match param("add").map(|raw| (raw, parse_delta(raw))) {
            Some((_, Some(delta))) => apply_delta(persisted, delta),
            Some((raw, None)) => {
                debug!(add = %raw, "ignoring malformed add parameter");
                persisted as i128
            }
            None => persisted as i128,
        };

        let links = match param("links") {
            Some(raw) => parse_links(raw)?,
            None => vec![defaults.link.clone()],
        };

        Ok(Self {
            label: param("label").unwrap_or(DEFAULT_LABEL).to_string(),
            message: group_thousands(effective),
            color: param("color").unwrap_or(DEFAULT_COLOR).to_string(),
            label_color: param("labelColor").unwrap_or(DEFAULT_LABEL_COLOR).to_string(),
            style: BadgeStyle::parse(param("style")),
            logo_base64: logo_source(param("logo"), param("logoColor"), &defaults.icon_cdn),
            links,
        })
    }
}

fn parse_links(raw: &str) -> Result<Vec<String>> {
    serde_json::from_str::<Vec<String>>(raw).map_err(|e| {
        HitBadgeError::MalformedLinks(format!("expected a JSON array of strings: {e}"))
    })
}

/// Resolve the `logo` parameter into something an `<image href>` can load.
fn logo_source(logo: Option<&str>, logo_color: Option<&str>, icon_cdn: &str) -> String {
    let Some(logo) = logo.filter(|l| !l.is_empty()) else {
        return String::new();
    };
    if logo.starts_with("data:image/") {
        return logo.to_string();
    }

    let mut url = format!(
        "{}/{}?viewbox=auto",
        icon_cdn.trim_end_matches('/'),
        encode_component(logo)
    );
    if let Some(color) = logo_color
        .map(|c| c.trim_start_matches('#'))
        .filter(|c| !c.is_empty())
    {
        url.push_str("&color=");
        url.push_str(&encode_component(color));
    }
    url
}

/// Percent-encode everything outside the RFC 3986 unreserved set.
fn encode_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for b in raw.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(b as char)
            }
            _ => out.push_str(&format!("%{b:02X}")),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_reserved_bytes() {
        assert_eq!(encode_component("github"), "github");
        assert_eq!(encode_component("a b/c"), "a%20b%2Fc");
    }

    #[test]
    fn empty_logo_means_none() {
        assert_eq!(logo_source(Some(""), Some("fff"), DEFAULT_ICON_CDN), "");
        assert_eq!(logo_source(None, None, DEFAULT_ICON_CDN), "");
    }

    #[test]
    fn cdn_trailing_slash_is_ignored() {
        assert_eq!(
            logo_source(Some("rust"), None, "https://icons.example/"),
            "https://icons.example/rust?viewbox=auto"
        );
    }
}
