//! Pre-initialization validation.

use anyhow::{Result, bail};
use std::path::Path;

/// Refuse to overwrite an existing config file.
pub fn validate_target(config_path: &Path) -> Result<()> {
    if config_path.exists() {
        bail!(
            "'{}' already exists.\n\
             Edit it directly or remove it before running init.",
            config_path.display()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_config_ok() {
        let temp = TempDir::new().unwrap();
        assert!(validate_target(&temp.path().join("site.toml")).is_ok());
        assert!(validate_target(&temp.path().join("new_site/site.toml")).is_ok());
    }

    #[test]
    fn test_existing_config_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("site.toml");
        fs::write(&path, "[site]").unwrap();
        assert!(validate_target(&path).is_err());
    }
}
