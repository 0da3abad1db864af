//! Configuration file generation.
//!
//! The template is assembled from each section's `#[derive(Config)]`
//! output, so it always matches the structs the loader reads.

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::config::{
    FeedConfig, MenuConfig, PluginsConfig, SiteInfoConfig, StaticConfig, ThemeConfig,
    WidgetsConfig,
};

/// Commented example for per-language overrides.
const LOCALES_EXAMPLE: &str = "\
# Per-language overrides, keyed by language code. Unset keys fall back to
# the values above.
# [locales.fr]
# name = \"Mon blog\"
# subtitle = \"Notes en <em>français</em>\"
# locale = \"fr_FR\"
# menu_items = [[\"À propos\", \"/fr/a-propos/\"]]
";

/// Generate site.toml content with comments
pub fn generate_config_template() -> String {
    let sections = [
        SiteInfoConfig::template_with_header(),
        MenuConfig::template_with_header(),
        WidgetsConfig::template_with_header(),
        FeedConfig::template_with_header(),
        ThemeConfig::template_with_header(),
        PluginsConfig::template_with_header(),
        StaticConfig::template_with_header(),
    ];

    let mut out = format!(
        "# siteconf configuration file (v{})\n\n",
        env!("CARGO_PKG_VERSION")
    );
    for section in sections {
        out.push_str(&section);
        out.push('\n');
    }
    out.push_str(LOCALES_EXAMPLE);
    out
}

/// Write default site.toml configuration, creating parent directories.
pub fn write_config(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory '{}'", parent.display()))?;
    }

    fs::write(path, generate_config_template())
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use tempfile::TempDir;

    #[test]
    fn test_template_parses_to_defaults() {
        let template = generate_config_template();
        let (config, ignored) = SiteConfig::parse_with_ignored(&template).unwrap();
        assert!(ignored.is_empty(), "template has unknown fields: {ignored:?}");
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_template_has_all_sections() {
        let template = generate_config_template();
        for header in [
            "[site]", "[menu]", "[widgets]", "[feed]", "[theme]", "[plugins]", "[static]",
        ] {
            assert!(template.contains(header), "missing {header}");
        }
        assert!(template.contains("# [locales.fr]"));
    }

    #[test]
    fn test_write_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("blog/site.toml");
        write_config(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("# siteconf configuration file"));
        assert!(SiteConfig::from_str(&content).is_ok());
    }
}
