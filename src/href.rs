//! Centralized href parsing for the `page.html#anchor` convention.
//!
//! Tree nodes and index entries both use the same link syntax: a relative
//! page path, optionally followed by `#` and a fragment identifying a
//! sub-section of that page. This module provides the single splitting
//! function every consumer (validation, site checks, display) goes through.

/// Result of splitting an href like `vec3u_8h.html#a463ffa74…`.
#[derive(Debug, Clone, PartialEq)]
pub struct HrefParts {
    /// Page path before `#`. Empty for a bare-fragment href like `#sec`.
    pub page: String,
    /// Fragment after `#`, if present. `Some("")` for a trailing `#`.
    pub fragment: Option<String>,
}

/// Split an href into page and fragment at the first `#`.
///
/// Handles these patterns:
/// - `"aabb_8h.html"` → page="aabb_8h.html", fragment=None
/// - `"vec3u_8h.html#a463ffa74…"` → page="vec3u_8h.html", fragment=Some("a463ffa74…")
/// - `"#autotoc_md1"` → page="", fragment=Some("autotoc_md1")
/// - `"index.html#"` → page="index.html", fragment=Some("")
pub fn split_href(href: &str) -> HrefParts {
    match href.split_once('#') {
        Some((page, fragment)) => HrefParts {
            page: page.to_string(),
            fragment: Some(fragment.to_string()),
        },
        None => HrefParts {
            page: href.to_string(),
            fragment: None,
        },
    }
}

impl HrefParts {
    /// Whether this parses as a valid relative path, optionally with a
    /// fragment: non-empty page, not absolute, no URL scheme, and no
    /// stray `#` inside the fragment.
    pub fn is_valid_relative(&self) -> bool {
        !self.page.is_empty()
            && !self.page.starts_with('/')
            && !self.page.contains("://")
            && self.fragment.as_deref().is_none_or(|f| !f.contains('#'))
    }
}
