//! Language codes and per-locale configuration resolution.
//!
//! `[locales.<lang>]` tables hold sparse overrides. Resolving a language
//! takes each override value where present and the base value otherwise:
//!
//! ```toml
//! [site]
//! name = "RGOODS Engineering"
//! default_lang = "fr"
//!
//! [locales.en]
//! name = "RGOODS Engineering (EN)"
//! menu_items = [["About", "/en/about/"]]
//! ```

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use super::section::{
    FeedConfig, Link, LinkTarget, MenuConfig, PluginsConfig, SiteInfoConfig, StaticConfig,
    ThemeConfig, WidgetsConfig, validate_links,
};
use super::{ConfigDiagnostics, ConfigError, FieldPath, SiteConfig};

static LANG_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]{2,3}(?:[-_][A-Za-z0-9]{2,8})*$").unwrap());

const LOCALES: FieldPath = FieldPath::new("locales");

/// Check that `code` is a language tag such as `fr`, `pt-BR` or `zh_Hant`.
pub fn is_valid_lang_code(code: &str) -> bool {
    LANG_CODE_RE.is_match(code)
}

/// Sparse per-language override of the base record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleOverride {
    pub name: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub default_lang: Option<String>,
    pub locale: Option<String>,
    pub menu_items: Option<Vec<Link>>,
    pub links: Option<Vec<Link>>,
}

impl LocaleOverride {
    /// True when no field is overridden.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Configuration as seen when rendering one language.
///
/// Has no locale table: overrides are already merged in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectiveConfig {
    /// Language this view was resolved for
    pub lang: String,
    pub site: SiteInfoConfig,
    pub menu: MenuConfig,
    pub widgets: WidgetsConfig,
    pub feed: FeedConfig,
    pub theme: ThemeConfig,
    pub plugins: PluginsConfig,
    #[serde(rename = "static")]
    pub static_files: StaticConfig,
}

impl SiteConfig {
    /// Default language first, then every overridden language.
    pub fn languages(&self) -> Vec<&str> {
        let default = self.site.default_lang.as_str();
        std::iter::once(default)
            .chain(self.locales.keys().map(String::as_str).filter(|l| *l != default))
            .collect()
    }

    /// Override table for `lang`, if any.
    pub fn locale_override(&self, lang: &str) -> Option<&LocaleOverride> {
        self.locales.get(lang)
    }

    /// Merge the base record with the override for `lang`.
    ///
    /// A well-formed language without an override resolves to the base values.
    pub fn resolve(&self, lang: &str) -> Result<EffectiveConfig, ConfigError> {
        if !is_valid_lang_code(lang) {
            return Err(ConfigError::InvalidLanguage(lang.to_string()));
        }

        let mut effective = EffectiveConfig {
            lang: lang.to_string(),
            site: self.site.clone(),
            menu: self.menu.clone(),
            widgets: self.widgets.clone(),
            feed: self.feed.clone(),
            theme: self.theme.clone(),
            plugins: self.plugins.clone(),
            static_files: self.static_files.clone(),
        };

        if let Some(ov) = self.locale_override(lang) {
            let site = &mut effective.site;
            override_with(&mut site.name, &ov.name);
            override_with(&mut site.title, &ov.title);
            override_with(&mut site.subtitle, &ov.subtitle);
            override_with(&mut site.default_lang, &ov.default_lang);
            if ov.locale.is_some() {
                site.locale.clone_from(&ov.locale);
            }
            override_with(&mut effective.menu.items, &ov.menu_items);
            override_with(&mut effective.widgets.links, &ov.links);
        }

        Ok(effective)
    }

    /// Resolve for the configured default language.
    pub fn resolve_default(&self) -> Result<EffectiveConfig, ConfigError> {
        self.resolve(&self.site.default_lang)
    }

    pub(super) fn validate_locales(&self, diag: &mut ConfigDiagnostics) {
        for (lang, ov) in &self.locales {
            if !is_valid_lang_code(lang) {
                diag.error_with_hint(
                    LOCALES,
                    format!("[{lang}] is not a valid language code"),
                    "use a code like \"en\", \"fr\" or \"pt-BR\" as the table key",
                );
            }

            if let Some(default_lang) = &ov.default_lang
                && !is_valid_lang_code(default_lang)
            {
                diag.error(
                    LOCALES,
                    format!("[{lang}] default_lang '{default_lang}' is not a valid language code"),
                );
            }

            if let Some(items) = &ov.menu_items {
                validate_links(items, LinkTarget::SiteOrExternal, LOCALES, diag);
            }
            if let Some(links) = &ov.links {
                validate_links(links, LinkTarget::External, LOCALES, diag);
            }

            if ov.is_empty() {
                diag.warn(LOCALES, format!("[{lang}] overrides nothing"));
            } else if *lang == self.site.default_lang {
                diag.hint(
                    LOCALES,
                    format!("[{lang}] is the default language, its overrides replace the base values"),
                );
            }
        }
    }
}

/// Replace `base` with the override value when one is present.
fn override_with<T: Clone>(base: &mut T, value: &Option<T>) {
    if let Some(value) = value {
        base.clone_from(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_lang_codes() {
        for code in ["en", "fr", "pt-BR", "zh_Hant", "ast", "sr-Latn-RS"] {
            assert!(is_valid_lang_code(code), "{code} should be valid");
        }
        for code in ["", "e", "EN", "French", "fr-", "fr FR", "english"] {
            assert!(!is_valid_lang_code(code), "{code} should be invalid");
        }
    }

    #[test]
    fn test_resolve_override() {
        let config = test_parse_config(
            "subtitle = \"base\"\ntimezone = \"Europe/Paris\"\n[locales.fr]\nname = \"Test-FR\"",
        );

        let fr = config.resolve("fr").unwrap();
        assert_eq!(fr.lang, "fr");
        assert_eq!(fr.site.name, "Test-FR");
        assert_eq!(fr.site.subtitle, "base");
        assert_eq!(fr.site.author, "Tester");
        assert_eq!(fr.site.timezone, "Europe/Paris");
        assert_eq!(fr.theme, config.theme);
        assert_eq!(fr.menu, config.menu);
    }

    #[test]
    fn test_resolve_without_override_is_base() {
        let config = test_parse_config("[locales.fr]\nname = \"Test-FR\"");
        let de = config.resolve("de").unwrap();
        assert_eq!(de.site, config.site);
        assert_eq!(de.widgets, config.widgets);
    }

    #[test]
    fn test_resolve_menu_links_and_locale() {
        let config = test_parse_config(
            r#"locale = "fr_FR"
default_lang = "fr"
[menu]
items = [["Blog", "/blog/"]]
[widgets]
links = [["RGOODS", "https://rgoods.com/"]]
[locales.en]
locale = "en_US"
default_lang = "en"
menu_items = [["News", "/en/blog/"]]
links = []
"#,
        );

        let en = config.resolve("en").unwrap();
        assert_eq!(en.site.locale.as_deref(), Some("en_US"));
        assert_eq!(en.site.default_lang, "en");
        assert_eq!(en.menu.items, [Link::new("News", "/en/blog/")]);
        assert!(en.widgets.links.is_empty());
        // Untouched sections keep base values
        assert_eq!(en.menu.display_categories, config.menu.display_categories);

        let base = config.resolve_default().unwrap();
        assert_eq!(base.site.locale.as_deref(), Some("fr_FR"));
        assert_eq!(base.menu.items, [Link::new("Blog", "/blog/")]);
    }

    #[test]
    fn test_resolve_invalid_code() {
        let config = test_parse_config("");
        assert!(matches!(
            config.resolve("French"),
            Err(ConfigError::InvalidLanguage(code)) if code == "French"
        ));
    }

    #[test]
    fn test_languages() {
        let config = test_parse_config("default_lang = \"fr\"\n[locales.en]\nname = \"EN\"\n[locales.fr]\nname = \"FR\"");
        assert_eq!(config.languages(), ["fr", "en"]);
    }

    #[test]
    fn test_validate_locales() {
        let config = test_parse_config(
            "[locales.French]\nname = \"x\"\n[locales.de]\ndefault_lang = \"German\"\n[locales.es]\n",
        );
        let mut diag = ConfigDiagnostics::new();
        config.validate_locales(&mut diag);
        assert_eq!(diag.len(), 2);
        assert_eq!(diag.warnings().len(), 1);
        assert!(diag.errors().iter().all(|e| e.field.as_str() == "locales"));
        assert!(diag.hints().is_empty());
    }

    #[test]
    fn test_default_lang_override_hint() {
        let config = test_parse_config("[locales.en]\nname = \"Test (EN)\"\n[locales.fr]\nname = \"FR\"");
        let mut diag = ConfigDiagnostics::new();
        config.validate_locales(&mut diag);
        assert!(diag.is_empty());
        assert_eq!(diag.hints().len(), 1);
        assert!(diag.hints()[0].message.contains("[en]"));
        assert_eq!(config.resolve_default().unwrap().site.name, "Test (EN)");
    }
}
