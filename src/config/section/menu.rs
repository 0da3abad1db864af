//! `[menu]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [menu]
//! display_categories = false
//! items = [["Blog", "/blog/"], ["About", "/pages/about.html"]]
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};

use super::{Link, LinkTarget, validate_links};
use crate::config::ConfigDiagnostics;

/// Navigation menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "menu")]
pub struct MenuConfig {
    /// Show article categories as menu entries.
    #[config(inline_doc)]
    pub display_categories: bool,

    /// Extra entries as (label, path) pairs, rendered in order.
    /// Example: [["About", "/about/"], ["Jobs", "https://jobs.example.com/"]]
    pub items: Vec<Link>,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            display_categories: true,
            items: Vec::new(),
        }
    }
}

impl MenuConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        validate_links(
            &self.items,
            LinkTarget::SiteOrExternal,
            Self::FIELDS.items,
            diag,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert!(config.menu.display_categories);
        assert!(config.menu.items.is_empty());
    }

    #[test]
    fn test_items_keep_order() {
        let config = test_parse_config(
            "[menu]\nitems = [[\"Blog\", \"/blog/\"], [\"About\", \"/about/\"], [\"Jobs\", \"https://jobs.example.com/\"]]",
        );
        let labels: Vec<_> = config.menu.items.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, ["Blog", "About", "Jobs"]);

        let mut diag = ConfigDiagnostics::new();
        config.menu.validate(&mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_malformed_item() {
        let config = test_parse_config("[menu]\nitems = [[\"Up\", \"../secret\"]]");
        let mut diag = ConfigDiagnostics::new();
        config.menu.validate(&mut diag);
        assert_eq!(diag.errors()[0].field, MenuConfig::FIELDS.items);
    }
}
