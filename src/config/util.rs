//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/site/content/posts/  ← cwd
/// /home/user/site/site.toml       ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let cwd = std::env::current_dir().ok()?;
    find_config_file_from(&cwd, config_name)
}

/// Walk up from `start` looking for `config_name`.
fn find_config_file_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.is_file() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

/// Check that a string is an absolute link the renderer can emit verbatim.
///
/// Accepts `http`/`https` URLs with a host and `mailto:` addresses.
pub fn is_absolute_url(value: &str) -> bool {
    match url::Url::parse(value) {
        Ok(parsed) => match parsed.scheme() {
            "http" | "https" => parsed.host_str().is_some(),
            "mailto" => !parsed.path().is_empty(),
            _ => false,
        },
        Err(_) => false,
    }
}

/// Check that a string is a well-formed site path (`/about/`, `pages/a.html`).
///
/// Rejects whitespace, backslashes, `..` segments and anything carrying a
/// URL scheme (`javascript:`, `foo:bar`). Query strings and fragments are
/// allowed.
pub fn is_site_path(value: &str) -> bool {
    if value.is_empty() || value.chars().any(|c| c.is_whitespace() || c == '\\') {
        return false;
    }
    // Only scheme-less references fail to parse without a base
    if url::Url::parse(value).is_ok() {
        return false;
    }
    let path = value.split(['?', '#']).next().unwrap_or_default();
    !path.split('/').any(|segment| segment == "..")
}

// ============================================================================
// tests
// ============================================================================
