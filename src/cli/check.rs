//! Configuration check command.
//!
//! Re-reads the config file so unknown keys can be reported (or rejected
//! with `--strict`), runs every section check, then resolves each
//! configured language once.

use anyhow::{Result, bail};
use std::path::Path;

use crate::config::{ConfigError, FeedKind, SiteConfig};
use crate::{debug, log};

/// Summary of a configuration that passed every check.
#[derive(Debug, PartialEq, Eq)]
pub struct CheckSummary {
    pub languages: Vec<String>,
    pub plugins: usize,
    pub feeds: Vec<FeedKind>,
    pub unknown_fields: Vec<String>,
}

/// Check the config file named by `--config`.
pub fn check_site(config_name: &Path, strict: bool) -> Result<()> {
    let path = SiteConfig::locate(config_name)?;
    let summary = check_file(&path, strict)?;

    log!(
        "check";
        "{} is valid: {}, {}, {}",
        path.display(),
        plural_count(summary.languages.len(), "language"),
        plural_count(summary.plugins, "plugin"),
        plural_count(summary.feeds.len(), "feed")
    );
    debug!("check"; "languages: {}", summary.languages.join(", "));
    Ok(())
}

/// Load, validate and resolve a config file.
pub fn check_file(path: &Path, strict: bool) -> Result<CheckSummary> {
    let (config, unknown_fields) = SiteConfig::read(path)?;

    if !unknown_fields.is_empty() {
        if strict {
            bail!(ConfigError::Validation(format!(
                "unknown fields: {}",
                unknown_fields.join(", ")
            )));
        }
        log!("warning"; "unknown fields, ignoring: {}", unknown_fields.join(", "));
    }

    config.validate()?;

    let languages: Vec<String> = config.languages().into_iter().map(String::from).collect();
    for lang in &languages {
        let effective = config.resolve(lang)?;
        debug!("check"; "[{lang}] name = {:?}", effective.site.name);
    }

    Ok(CheckSummary {
        languages,
        plugins: config.plugins.enabled.len(),
        feeds: config.feed.enabled().collect(),
        unknown_fields,
    })
}

fn plural_count(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_site(content: &str) -> (TempDir, std::path::PathBuf) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("site.toml");
        fs::write(&path, content).unwrap();
        (temp, path)
    }

    const VALID: &str = r#"
[site]
name = "RGOODS Engineering"
author = "RGOODS Tech team"
url = "https://engineering.rgoods.com"
default_lang = "fr"

[feed]
all_atom = true

[plugins]
enabled = ["i18n_subsites", "sitemap"]

[locales.en]
name = "RGOODS Engineering (EN)"
"#;

    #[test]
    fn test_check_valid() {
        let (_temp, path) = write_site(VALID);
        let summary = check_file(&path, true).unwrap();
        assert_eq!(summary.languages, ["fr", "en"]);
        assert_eq!(summary.plugins, 2);
        assert_eq!(summary.feeds, [FeedKind::AllAtom]);
        assert!(summary.unknown_fields.is_empty());
    }

    #[test]
    fn test_check_unknown_fields() {
        let content = format!("{VALID}\n[extra]\nkey = 1\n");
        let (_temp, path) = write_site(&content);

        let summary = check_file(&path, false).unwrap();
        assert_eq!(summary.unknown_fields, ["extra"]);

        let err = check_file(&path, true).unwrap_err();
        assert!(err.to_string().contains("extra"));
    }

    #[test]
    fn test_check_reports_validation_errors() {
        let (_temp, path) = write_site("[site]\nname = \"\"\n[feed]\nall_atom = true\n");
        let err = check_file(&path, false).unwrap_err();
        let display = err.to_string();
        assert!(display.contains("site.name"));
        assert!(display.contains("site.url"));
    }

    #[test]
    fn test_check_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = check_site(&temp.path().join("site.toml"), false).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::NotFound(_))
        ));
    }

    #[test]
    fn test_plural_count() {
        assert_eq!(plural_count(1, "plugin"), "1 plugin");
        assert_eq!(plural_count(0, "plugin"), "0 plugins");
    }
}
