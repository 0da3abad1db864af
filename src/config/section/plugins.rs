//! `[plugins]` section configuration.
//!
//! Plugin order is kept as written: later plugins may override what
//! earlier ones register.
//!
//! # Example
//!
//! ```toml
//! [plugins]
//! paths = ["plugins"]
//! enabled = ["i18n_subsites", "sitemap"]
//! ```

use macros::Config;
use regex::Regex;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::LazyLock;

use crate::config::ConfigDiagnostics;

/// Python-style dotted module name or package name with dashes.
static PLUGIN_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_\-]*(?:\.[A-Za-z_][A-Za-z0-9_\-]*)*$").unwrap());

/// Generator plugins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "plugins")]
pub struct PluginsConfig {
    /// Extra directories searched for plugins.
    #[config(inline_doc)]
    pub paths: Vec<PathBuf>,

    /// Plugin identifiers, loaded in order.
    #[config(inline_doc)]
    pub enabled: Vec<String>,
}

impl PluginsConfig {
    pub fn is_empty(&self) -> bool {
        self.enabled.is_empty()
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let mut seen = FxHashSet::default();
        for (idx, name) in self.enabled.iter().enumerate() {
            if !PLUGIN_NAME_RE.is_match(name) {
                diag.error_with_hint(
                    Self::FIELDS.enabled,
                    format!("[{idx}] '{name}' is not a valid plugin identifier"),
                    "use a module name like \"sitemap\" or \"pelican.plugins.i18n_subsites\"",
                );
            } else if !seen.insert(name.as_str()) {
                diag.warn(
                    Self::FIELDS.enabled,
                    format!("[{idx}] '{name}' is listed more than once"),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_order_preserved() {
        let config = test_parse_config(
            "[plugins]\nenabled = [\"sitemap\", \"i18n_subsites\", \"pelican.plugins.seo\"]",
        );
        assert_eq!(
            config.plugins.enabled,
            ["sitemap", "i18n_subsites", "pelican.plugins.seo"]
        );
        let mut diag = ConfigDiagnostics::new();
        config.plugins.validate(&mut diag);
        assert!(diag.is_empty());
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn test_invalid_and_duplicate() {
        let config =
            test_parse_config("[plugins]\nenabled = [\"sitemap\", \"\", \"bad name\", \"sitemap\"]");
        let mut diag = ConfigDiagnostics::new();
        config.plugins.validate(&mut diag);
        assert_eq!(diag.len(), 2);
        assert_eq!(diag.warnings().len(), 1);
    }

    #[test]
    fn test_empty_list() {
        let config = test_parse_config("");
        assert!(config.plugins.is_empty());
        assert!(config.plugins.paths.is_empty());
    }
}
