//! Typed settings loader for static site generators.
//!
//! One `site.toml` holds site metadata, menus, link widgets, feed toggles,
//! theme and plugin selection, static paths and per-language overrides.
//!
//! ```no_run
//! use siteconf::SiteConfig;
//!
//! let config = SiteConfig::load()?;
//! config.validate()?;
//! let fr = config.resolve("fr")?;
//! println!("{}", fr.site.name);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod logger;

pub use config::{ConfigError, EffectiveConfig, LocaleOverride, SiteConfig};
