//! `[site]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [site]
//! author = "RGOODS Tech team"
//! name = "RGOODS Engineering"
//! subtitle = "Notes from the <em>platform</em> team"
//! url = "https://engineering.rgoods.com"
//! timezone = "Europe/Paris"
//! default_lang = "fr"
//! locale = "fr_FR"
//! ```

use macros::Config;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, de::Error as _};
use std::path::PathBuf;
use std::sync::LazyLock;

use crate::config::{ConfigDiagnostics, is_valid_lang_code};

/// IANA zone name: `UTC`, `CET`, `EST5EDT`, `Japan` or `Area/Location[/Sublocation]`.
static TIMEZONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z][A-Za-z0-9_+\-]*(?:/[A-Za-z0-9_+\-]+){0,2}$").unwrap()
});

/// Site identity and regional settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site")]
pub struct SiteInfoConfig {
    /// Author name.
    #[config(inline_doc)]
    pub author: String,

    /// Site name shown in page headers.
    #[config(inline_doc)]
    pub name: String,

    /// Browser title, themes fall back to the name when empty.
    #[config(inline_doc)]
    pub title: String,

    /// Tagline under the site name. Raw markup is passed through.
    #[config(inline_doc)]
    pub subtitle: String,

    /// Public URL of the deployed site. Leave unset for local development.
    #[config(default = "https://example.com")]
    pub url: Option<String>,

    /// IANA time zone for article dates.
    #[config(default = "UTC", inline_doc)]
    pub timezone: String,

    /// Language of untranslated content.
    #[config(default = "en", inline_doc)]
    pub default_lang: String,

    /// System locale used for date formatting.
    #[config(default = "en_US", inline_doc)]
    pub locale: Option<String>,

    /// Content directory (relative to site root).
    #[config(default = "content", inline_doc)]
    pub content: PathBuf,

    /// Metadata key linking translations of the same article.
    #[config(default = "slug", inline_doc)]
    pub translation_id: String,

    /// Emit document-relative URLs (handy when previewing from disk).
    #[config(inline_doc)]
    pub relative_urls: bool,

    /// Articles per index page. Unset or `false` disables pagination.
    #[config(default = "10", inline_doc)]
    #[serde(deserialize_with = "deserialize_pagination")]
    pub pagination: Option<u32>,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            author: String::new(),
            name: String::new(),
            title: String::new(),
            subtitle: String::new(),
            url: None,
            timezone: "UTC".into(),
            default_lang: "en".into(),
            locale: None,
            content: "content".into(),
            translation_id: "slug".into(),
            relative_urls: false,
            pagination: None,
        }
    }
}

/// `pagination` accepts a page size or `false`.
#[derive(Deserialize)]
#[serde(untagged)]
enum PaginationValue {
    Toggle(bool),
    PerPage(u32),
}

fn deserialize_pagination<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    match PaginationValue::deserialize(deserializer)? {
        PaginationValue::Toggle(false) => Ok(None),
        PaginationValue::Toggle(true) => Err(D::Error::custom(
            "pagination = true has no page size, use a number like 10",
        )),
        PaginationValue::PerPage(size) => Ok(Some(size)),
    }
}

impl SiteInfoConfig {
    /// Validate site configuration.
    ///
    /// # Checks
    /// - `name` must be set
    /// - `url` must be a valid http(s) URL with a host
    /// - `timezone` must look like an IANA zone name
    /// - `default_lang` must be a language code
    /// - `pagination` must be non-zero
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.name.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.name,
                "site name is empty",
                format!("set {}, e.g.: \"My Blog\"", Self::FIELDS.name),
            );
        }

        if let Some(url_str) = &self.url {
            match url::Url::parse(url_str) {
                Ok(parsed) => {
                    if !matches!(parsed.scheme(), "http" | "https") {
                        diag.error_with_hint(
                            Self::FIELDS.url,
                            format!(
                                "scheme '{}' not supported, must be http or https",
                                parsed.scheme()
                            ),
                            "use format like https://example.com",
                        );
                    }
                    if parsed.host_str().is_none() {
                        diag.error_with_hint(
                            Self::FIELDS.url,
                            "URL must have a valid host",
                            "use format like https://example.com",
                        );
                    }
                }
                Err(e) => {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        format!("invalid URL: {}", e),
                        "use format like https://example.com",
                    );
                }
            }
        }

        if !TIMEZONE_RE.is_match(&self.timezone) {
            diag.error_with_hint(
                Self::FIELDS.timezone,
                format!("'{}' is not an IANA time zone name", self.timezone),
                "use a name like \"Europe/Paris\" or \"UTC\"",
            );
        }

        if !is_valid_lang_code(&self.default_lang) {
            diag.error_with_hint(
                Self::FIELDS.default_lang,
                format!("'{}' is not a valid language code", self.default_lang),
                "use a code like \"en\", \"fr\" or \"pt-BR\"",
            );
        }

        if self.pagination == Some(0) {
            diag.error_with_hint(
                Self::FIELDS.pagination,
                "pagination must be at least 1",
                format!("remove {} to disable pagination", Self::FIELDS.pagination),
            );
        }
    }
}
