//! Site initialization module.
//!
//! Writes a commented `site.toml` with every section at its default value.
//!
//! # Module Structure
//!
//! - [`validate`]: Pre-initialization validation
//! - [`structure`]: Directory structure creation
//! - [`config`]: Configuration template generation

mod config;
mod structure;
mod validate;

use crate::{config::SiteConfig, log};
use anyhow::Result;

pub use config::generate_config_template;

/// Create a new site configuration
///
/// # Steps
/// 1. Validate target config path
/// 2. Create content directories
/// 3. Write `site.toml`
///
/// If `dry_run` is true, only prints the config template to stdout
pub fn new_site(site_config: &SiteConfig, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", generate_config_template());
        return Ok(());
    }

    validate::validate_target(&site_config.config_path)?;

    let defaults = SiteConfig::default();
    structure::create_structure(site_config.get_root(), &defaults)?;
    config::write_config(&site_config.config_path)?;

    log!("init"; "wrote {}", site_config.config_path.display());
    Ok(())
}
