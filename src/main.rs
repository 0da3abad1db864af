//! siteconf - write, check and inspect `site.toml`.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use siteconf::cli::{self, Cli, Commands};
use siteconf::config::{SiteConfig, init_config};
use siteconf::logger;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    match &cli.command {
        Commands::Init { dry, .. } => {
            let config = SiteConfig::load_for(&cli)?;
            cli::init::new_site(&config, *dry)
        }
        Commands::Check { strict } => cli::check::check_site(&cli.config, *strict),
        Commands::Show { lang, format, .. } => {
            let config = init_config(SiteConfig::load_for(&cli)?);
            config.validate()?;
            cli::show::show_config(&config, lang.as_deref(), *format)
        }
    }
}
