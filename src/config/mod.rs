//! Site configuration management for `site.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # One struct per TOML section
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   ├── field      # FieldPath
//! │   └── handle     # Global config handle
//! ├── locale.rs      # Language codes and per-locale resolution
//! ├── util.rs        # Config file discovery, value checks
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section            | Purpose                                         |
//! |--------------------|-------------------------------------------------|
//! | `[site]`           | Author, name, url, timezone, default language   |
//! | `[menu]`           | Menu items, category display                    |
//! | `[widgets]`        | Blogroll links and social links                 |
//! | `[feed]`           | Per-kind feed toggles                           |
//! | `[theme]`          | Theme name or path                              |
//! | `[plugins]`        | Ordered plugin list, plugin search paths        |
//! | `[static]`         | Passthrough asset paths and their metadata      |
//! | `[locales.<lang>]` | Sparse per-language overrides                   |

mod locale;
pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use locale::{EffectiveConfig, LocaleOverride, is_valid_lang_code};
pub use section::{
    FeedConfig, FeedKind, Link, MenuConfig, PathMetadata, PluginsConfig, SiteInfoConfig,
    StaticConfig, ThemeConfig, WidgetsConfig,
};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath, cfg, init_config};

use crate::{
    cli::{Cli, Commands},
    log,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

/// Config file name searched for by [`SiteConfig::load`].
pub const DEFAULT_CONFIG_FILE: &str = "site.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing site.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site identity and regional settings
    pub site: SiteInfoConfig,

    /// Navigation menu
    pub menu: MenuConfig,

    /// Link widgets
    pub widgets: WidgetsConfig,

    /// Feed toggles
    pub feed: FeedConfig,

    /// Rendering theme
    pub theme: ThemeConfig,

    /// Generator plugins
    pub plugins: PluginsConfig,

    /// Static passthrough paths
    #[serde(rename = "static")]
    pub static_files: StaticConfig,

    /// Per-language overrides keyed by language code
    pub locales: BTreeMap<String, LocaleOverride>,
}

impl SiteConfig {
    /// Load `site.toml`, searching upward from the current directory.
    pub fn load() -> Result<Self> {
        let path = Self::locate(Path::new(DEFAULT_CONFIG_FILE))?;
        Self::load_from(&path)
    }

    /// Find `config_name` in cwd or its ancestors (or as given, if absolute).
    pub fn locate(config_name: &Path) -> Result<PathBuf, ConfigError> {
        find_config_file(config_name).ok_or_else(|| ConfigError::NotFound(config_name.into()))
    }

    /// Load configuration for a CLI invocation.
    ///
    /// `init` never reads a file; every other command searches upward from
    /// cwd for the `--config` file name.
    pub fn load_for(cli: &Cli) -> Result<Self> {
        let mut config = if let Commands::Init { name, .. } = &cli.command {
            let cwd = std::env::current_dir().context("Failed to get current working directory")?;
            let root = name.as_ref().map_or_else(|| cwd.clone(), |n| cwd.join(n));
            Self {
                config_path: root.join(&cli.config),
                root,
                ..Self::default()
            }
        } else {
            Self::load_from(&Self::locate(&cli.config)?)?
        };

        config.apply_command_options(cli);
        Ok(config)
    }

    /// Load configuration from a file path, warning about unknown fields.
    pub fn load_from(path: &Path) -> Result<Self> {
        let (config, ignored) = Self::read(path)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }
        Ok(config)
    }

    /// Read a config file, returning the record and its unknown field paths.
    pub fn read(path: &Path) -> Result<(Self, Vec<String>)> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)
            .with_context(|| format!("Failed to parse '{}'", path.display()))?;

        let config_path = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
        config.root = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        config.config_path = config_path;

        crate::debug!("config"; "loaded {}", config.config_path.display());
        Ok((config, ignored))
    }

    /// Parse configuration from TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Serialize back to `site.toml` format.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, cli: &Cli) {
        if let Commands::Show { site_url, .. } = &cli.command {
            // CI deployments pass the production URL without editing site.toml
            Self::update_option(&mut self.site.url, site_url.clone().map(Some).as_ref());
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration, printing warnings and returning all errors.
    pub fn validate(&self) -> Result<()> {
        let diag = self.diagnostics();
        diag.print_hints_and_warnings();
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Run every section check and collect the results.
    pub fn diagnostics(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        self.feed.validate(self.site.url.as_deref(), &mut diag);
        self.menu.validate(&mut diag);
        self.widgets.validate(&mut diag);
        self.theme.validate(self.get_root(), &mut diag);
        self.plugins.validate(&mut diag);
        self.static_files.validate(&mut diag);
        self.validate_locales(&mut diag);

        diag
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with minimal required `[site]` fields.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!("[site]\nname = \"Test\"\nauthor = \"Tester\"\n{extra}");
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
