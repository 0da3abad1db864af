//! Directory structure creation.

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::config::SiteConfig;

/// Create the content directory and its static subdirectories.
///
/// Existing directories are left as they are.
pub fn create_structure(root: &Path, config: &SiteConfig) -> Result<()> {
    let content = root.join(&config.site.content);
    let dirs = std::iter::once(content.clone())
        .chain(config.static_files.paths.iter().map(|p| content.join(p)));

    for dir in dirs {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory '{}'", dir.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_create_structure() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("blog");
        create_structure(&root, &SiteConfig::default()).unwrap();

        assert!(root.join("content").is_dir());
        assert!(root.join("content/images").is_dir());
    }

    #[test]
    fn test_create_structure_idempotent() {
        let temp = TempDir::new().unwrap();
        let config = SiteConfig::default();
        create_structure(temp.path(), &config).unwrap();
        create_structure(temp.path(), &config).unwrap();
        assert!(temp.path().join("content/images").is_dir());
    }
}
