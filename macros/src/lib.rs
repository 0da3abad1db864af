//! Proc macros for siteconf.
//!
//! # Config derive macro
//!
//! Generates field path accessors and a commented TOML template for one
//! section of `site.toml`.
//!
//! ```ignore
//! #[derive(Config)]
//! #[config(section = "site")]
//! /// Site identity.
//! pub struct SiteInfoConfig {
//!     /// Site name shown in page headers.
//!     pub name: String,
//!
//!     /// Default language code.
//!     #[config(default = "en", inline_doc)]
//!     pub default_lang: String,
//!
//!     /// Deployment URL, absent during local development.
//!     #[config(default = "https://example.com")]
//!     pub url: Option<String>,
//! }
//!
//! // Generates:
//! // - SiteInfoConfig::FIELDS.name -> FieldPath("site.name")
//! // - SiteInfoConfig::template() -> TOML string with comments
//! // - SiteInfoConfig::template_with_header() -> with [section] header
//! ```
//!
//! # Attributes
//!
//! Struct-level:
//! - `#[config(section = "path")]` - TOML section path
//!
//! Field-level:
//! - `#[config(hidden)]` - Keep in FIELDS, hide from template output
//! - `#[config(default = "x")]` - Value written to the template
//! - `#[config(inline_doc)]` - Render the doc comment after the value
//!
//! # Section inference
//!
//! Without `section` attribute, inferred from struct name:
//! - `MenuConfig` → `menu`
//! - `StaticFilesConfig` → `static_files`

mod config;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive macro that generates FIELDS and template().
#[proc_macro_derive(Config, attributes(config))]
pub fn derive_config(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    config::derive(&input).into()
}
