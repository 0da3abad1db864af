//! `[feed]` section configuration.
//!
//! Each feed kind is a tri-state toggle: `true` generates it, `false`
//! disables it explicitly, and leaving it out defers to the generator.
//!
//! # Example
//!
//! ```toml
//! [feed]
//! all_atom = true
//! author_rss = false
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::ConfigDiagnostics;
use crate::config::section::SiteInfoConfig;

/// Syndication feed variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedKind {
    AllAtom,
    CategoryAtom,
    TranslationAtom,
    AuthorAtom,
    AuthorRss,
}

impl FeedKind {
    pub const ALL: [Self; 5] = [
        Self::AllAtom,
        Self::CategoryAtom,
        Self::TranslationAtom,
        Self::AuthorAtom,
        Self::AuthorRss,
    ];

    /// Key name in `[feed]`.
    pub const fn key(self) -> &'static str {
        match self {
            Self::AllAtom => "all_atom",
            Self::CategoryAtom => "category_atom",
            Self::TranslationAtom => "translation_atom",
            Self::AuthorAtom => "author_atom",
            Self::AuthorRss => "author_rss",
        }
    }
}

impl fmt::Display for FeedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Feed generation toggles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "feed")]
pub struct FeedConfig {
    /// Feed of every article.
    #[config(default = "true", inline_doc)]
    pub all_atom: Option<bool>,

    /// One feed per category.
    #[config(default = "true", inline_doc)]
    pub category_atom: Option<bool>,

    /// One feed per translation language.
    #[config(default = "true", inline_doc)]
    pub translation_atom: Option<bool>,

    /// One Atom feed per author.
    #[config(default = "true", inline_doc)]
    pub author_atom: Option<bool>,

    /// One RSS feed per author.
    #[config(default = "true", inline_doc)]
    pub author_rss: Option<bool>,
}

impl FeedConfig {
    /// Toggle value for one feed kind (`None` when unset).
    pub const fn toggle(&self, kind: FeedKind) -> Option<bool> {
        match kind {
            FeedKind::AllAtom => self.all_atom,
            FeedKind::CategoryAtom => self.category_atom,
            FeedKind::TranslationAtom => self.translation_atom,
            FeedKind::AuthorAtom => self.author_atom,
            FeedKind::AuthorRss => self.author_rss,
        }
    }

    /// Feed kinds explicitly switched on.
    pub fn enabled(&self) -> impl Iterator<Item = FeedKind> + '_ {
        FeedKind::ALL
            .into_iter()
            .filter(|kind| self.toggle(*kind) == Some(true))
    }

    /// Feeds carry absolute links, so any enabled feed needs `site.url`.
    pub fn validate(&self, site_url: Option<&str>, diag: &mut ConfigDiagnostics) {
        if site_url.is_some() {
            return;
        }
        let enabled: Vec<_> = self.enabled().map(FeedKind::key).collect();
        if !enabled.is_empty() {
            diag.error_with_hint(
                SiteInfoConfig::FIELDS.url,
                format!(
                    "feeds [{}] are enabled but {} is not configured",
                    enabled.join(", "),
                    SiteInfoConfig::FIELDS.url
                ),
                format!(
                    "set {}, or pass --site-url when generating",
                    SiteInfoConfig::FIELDS.url
                ),
            );
        }
    }
}
