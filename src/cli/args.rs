//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Typed settings loader for static site generators
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: site.toml)
    #[arg(short = 'C', long, global = true, default_value = crate::config::DEFAULT_CONFIG_FILE, value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a commented site.toml template
    #[command(visible_alias = "i")]
    Init {
        /// Site directory name/path (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,

        /// Print the template to stdout instead of writing files
        #[arg(long)]
        dry: bool,
    },

    /// Load and validate the configuration
    #[command(visible_alias = "c")]
    Check {
        /// Treat unknown fields as errors
        #[arg(short, long)]
        strict: bool,
    },

    /// Print the configuration resolved for one language
    #[command(visible_alias = "s")]
    Show {
        /// Language to resolve (default: site.default_lang)
        #[arg(short, long)]
        lang: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Toml)]
        format: OutputFormat,

        /// Override site URL for deployment.
        ///
        /// Useful for CI/CD deployments where the production URL differs from local development.
        /// This avoids modifying site.toml, keeping the source file clean.
        #[arg(short = 'U', long = "site-url", value_hint = clap::ValueHint::Url)]
        site_url: Option<String>,
    },
}

/// Serialization format for `show`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Toml,
    Json,
}
