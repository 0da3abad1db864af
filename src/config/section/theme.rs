//! `[theme]` section configuration.
//!
//! The theme is either the name of a theme installed with the generator
//! (`notmyidea`) or a path to a theme directory (`themes/flex`,
//! `~/themes/flex`).

use macros::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::config::ConfigDiagnostics;

/// Rendering theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "theme")]
pub struct ThemeConfig {
    /// Installed theme name or theme directory path.
    #[config(default = "notmyidea", inline_doc)]
    pub name: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: "notmyidea".into(),
        }
    }
}

impl ThemeConfig {
    /// Whether `name` refers to a directory rather than an installed theme.
    pub fn is_path(&self) -> bool {
        self.name.contains(['/', '\\']) || self.name.starts_with(['.', '~'])
    }

    /// Theme directory with `~` expanded, relative paths joined to `root`.
    ///
    /// Returns `None` for installed theme names.
    pub fn resolve_path(&self, root: &Path) -> Option<PathBuf> {
        if !self.is_path() {
            return None;
        }
        let expanded = PathBuf::from(shellexpand::tilde(&self.name).into_owned());
        Some(if expanded.is_relative() {
            root.join(expanded)
        } else {
            expanded
        })
    }

    pub fn validate(&self, root: &Path, diag: &mut ConfigDiagnostics) {
        if self.name.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.name,
                "theme name is empty",
                "use an installed theme like \"notmyidea\" or a theme directory path",
            );
            return;
        }

        // Only loaded configs know their root
        if root.as_os_str().is_empty() {
            return;
        }
        if let Some(dir) = self.resolve_path(root)
            && !dir.is_dir()
        {
            diag.warn(
                Self::FIELDS.name,
                format!("theme directory '{}' does not exist", dir.display()),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn theme(name: &str) -> ThemeConfig {
        ThemeConfig { name: name.into() }
    }

    #[test]
    fn test_is_path() {
        assert!(!theme("notmyidea").is_path());
        assert!(theme("themes/flex").is_path());
        assert!(theme("./flex").is_path());
        assert!(theme("~/themes/flex").is_path());
    }

    #[test]
    fn test_resolve_path() {
        let root = Path::new("/srv/site");
        assert_eq!(theme("notmyidea").resolve_path(root), None);
        assert_eq!(
            theme("themes/flex").resolve_path(root),
            Some(PathBuf::from("/srv/site/themes/flex"))
        );
        assert_eq!(
            theme("/opt/themes/flex").resolve_path(root),
            Some(PathBuf::from("/opt/themes/flex"))
        );
    }

    #[test]
    fn test_missing_theme_dir_warns() {
        let temp = TempDir::new().unwrap();
        let mut diag = ConfigDiagnostics::new();
        theme("themes/flex").validate(temp.path(), &mut diag);
        assert!(diag.is_empty());
        assert_eq!(diag.warnings().len(), 1);

        std::fs::create_dir_all(temp.path().join("themes/flex")).unwrap();
        let mut diag = ConfigDiagnostics::new();
        theme("themes/flex").validate(temp.path(), &mut diag);
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn test_empty_name() {
        let mut diag = ConfigDiagnostics::new();
        theme(" ").validate(Path::new(""), &mut diag);
        assert_eq!(diag.len(), 1);
    }
}
