//! `[static]` section configuration.
//!
//! Static paths are copied to the output untouched. Individual files can be
//! given a different output location through `extra_path_metadata`.
//!
//! # Example
//!
//! ```toml
//! [static]
//! paths = ["images", "extra"]
//!
//! [static.extra_path_metadata."extra/favicon.ico"]
//! path = "favicon.ico"                      # → output/favicon.ico
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Component, Path};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Output override for one static file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathMetadata {
    /// Output path relative to the output root.
    pub path: String,
}

/// Static passthrough paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "static")]
pub struct StaticConfig {
    /// Directories or files copied as-is (relative to the content directory).
    #[config(inline_doc)]
    pub paths: BTreeSet<String>,

    /// Per-file output overrides, keyed by source path.
    #[config(hidden)]
    pub extra_path_metadata: BTreeMap<String, PathMetadata>,
}

impl Default for StaticConfig {
    fn default() -> Self {
        Self {
            paths: BTreeSet::from(["images".to_string()]),
            extra_path_metadata: BTreeMap::new(),
        }
    }
}

impl StaticConfig {
    /// Check if a source path lies in one of the static paths.
    pub fn contains_source(&self, source: &str) -> bool {
        let source = Path::new(source);
        self.paths.iter().any(|p| source.starts_with(p))
    }

    /// Output path for a static source file.
    pub fn output_path<'a>(&'a self, source: &'a str) -> &'a str {
        self.extra_path_metadata
            .get(source)
            .map_or(source, |meta| meta.path.as_str())
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for path in &self.paths {
            Self::validate_path_safety(path, Self::FIELDS.paths, diag);
        }

        for (source, meta) in &self.extra_path_metadata {
            Self::validate_path_safety(source, Self::FIELDS.extra_path_metadata, diag);
            Self::validate_path_safety(&meta.path, Self::FIELDS.extra_path_metadata, diag);

            if !self.contains_source(source) {
                diag.warn(
                    Self::FIELDS.extra_path_metadata,
                    format!("'{source}' is not inside any static path, metadata is unused"),
                );
            }
        }
    }

    /// Check a single path for unsafe components (`..` or absolute).
    fn validate_path_safety(path: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
        if path.trim().is_empty() {
            diag.error(field, "empty path");
            return;
        }

        for comp in Path::new(path).components() {
            let msg = match comp {
                Component::ParentDir => Some("parent directory '..' not allowed"),
                Component::Prefix(_) | Component::RootDir => Some("absolute paths not allowed"),
                _ => None,
            };
            if let Some(reason) = msg {
                diag.error(field, format!("path '{path}': {reason}"));
                return;
            }
        }
    }
}
