//! Labelled link entries shared by `[menu]`, `[widgets]` and locale overrides.
//!
//! # Example
//!
//! ```toml
//! links = [
//!     ["RGOODS", "https://rgoods.com/"],            # (label, url) pair
//!     { label = "Docs", url = "https://docs.rs/" },  # table form
//! ]
//! items = [{ label = "About", path = "/about/" }]   # `path` for menu entries
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath, util};

/// An ordered `(label, url)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "LinkEntry")]
pub struct Link {
    pub label: String,
    pub url: String,
}

/// Accepted TOML shapes for a link.
#[derive(Deserialize)]
#[serde(untagged)]
enum LinkEntry {
    /// `["label", "url"]`
    Pair(String, String),
    /// `{ label = "...", url = "..." }`
    Full {
        label: String,
        #[serde(alias = "path")]
        url: String,
    },
}

impl From<LinkEntry> for Link {
    fn from(entry: LinkEntry) -> Self {
        match entry {
            LinkEntry::Pair(label, url) | LinkEntry::Full { label, url } => Self { label, url },
        }
    }
}

impl Link {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

/// What a link list may point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LinkTarget {
    /// External widgets: absolute http(s)/mailto URLs only.
    External,
    /// Menu entries: site paths or absolute URLs.
    SiteOrExternal,
}

/// Check every entry of a link list, reporting by index.
pub(crate) fn validate_links(
    links: &[Link],
    target: LinkTarget,
    field: FieldPath,
    diag: &mut ConfigDiagnostics,
) {
    for (idx, link) in links.iter().enumerate() {
        if link.label.trim().is_empty() {
            diag.error(field, format!("[{idx}] label is empty"));
        }

        let ok = match target {
            LinkTarget::External => util::is_absolute_url(&link.url),
            LinkTarget::SiteOrExternal => {
                util::is_absolute_url(&link.url) || util::is_site_path(&link.url)
            }
        };
        if !ok {
            let hint = match target {
                LinkTarget::External => "use an absolute URL like https://example.com/",
                LinkTarget::SiteOrExternal => "use a site path like /about/ or an absolute URL",
            };
            diag.error_with_hint(
                field,
                format!("[{idx}] '{}' is not a well-formed link target", link.url),
                hint,
            );
        }
    }
}
