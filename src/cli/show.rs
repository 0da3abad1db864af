//! Print the configuration resolved for one language.
//!
//! Data goes to stdout; notes about the resolution go to stderr.

use anyhow::{Context, Result};

use super::OutputFormat;
use crate::config::{EffectiveConfig, SiteConfig};
use crate::log;

/// Resolve `lang` (or the default language) and print it.
pub fn show_config(config: &SiteConfig, lang: Option<&str>, format: OutputFormat) -> Result<()> {
    if let Some(lang) = lang
        && lang != config.site.default_lang
        && config.locale_override(lang).is_none()
    {
        log!("hint"; "no [locales.{lang}] table, showing base values");
    }

    print!("{}", render(config, lang, format)?);
    Ok(())
}

/// Render the resolved configuration as `format`.
pub fn render(config: &SiteConfig, lang: Option<&str>, format: OutputFormat) -> Result<String> {
    let effective = match lang {
        Some(lang) => config.resolve(lang)?,
        None => config.resolve_default()?,
    };
    serialize(&effective, format)
}

fn serialize(effective: &EffectiveConfig, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Toml => {
            toml::to_string_pretty(effective).context("Failed to serialize config as TOML")
        }
        OutputFormat::Json => serde_json::to_string_pretty(effective)
            .map(|json| json + "\n")
            .context("Failed to serialize config as JSON"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigError, test_parse_config};

    fn config() -> SiteConfig {
        test_parse_config(
            r#"default_lang = "fr"
[menu]
items = [["Blog", "/blog/"]]
[locales.en]
name = "Test (EN)"
menu_items = [["News", "/en/blog/"]]
"#,
        )
    }

    #[test]
    fn test_render_toml_default_lang() {
        let out = render(&config(), None, OutputFormat::Toml).unwrap();
        let value: toml::Value = toml::from_str(&out).unwrap();
        assert_eq!(value["lang"].as_str(), Some("fr"));
        assert_eq!(value["site"]["name"].as_str(), Some("Test"));
        assert!(value.get("locales").is_none());
        assert!(value.get("static").is_some());
    }

    #[test]
    fn test_render_json_override() {
        let out = render(&config(), Some("en"), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["lang"], "en");
        assert_eq!(value["site"]["name"], "Test (EN)");
        assert_eq!(value["site"]["author"], "Tester");
        assert_eq!(value["menu"]["items"][0]["label"], "News");
    }

    #[test]
    fn test_render_roundtrips_effective_config() {
        let config = config();
        let out = render(&config, Some("en"), OutputFormat::Toml).unwrap();
        let parsed: EffectiveConfig = toml::from_str(&out).unwrap();
        assert_eq!(parsed, config.resolve("en").unwrap());
    }

    #[test]
    fn test_render_invalid_lang() {
        let err = render(&config(), Some("English"), OutputFormat::Toml).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::InvalidLanguage(_))
        ));
    }
}
