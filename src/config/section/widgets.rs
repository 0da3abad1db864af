//! `[widgets]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [widgets]
//! links = [["RGOODS", "https://rgoods.com/"]]
//! social = [
//!     ["Instagram", "https://www.instagram.com/rgoods_official/"],
//!     ["Linkedin", "https://www.linkedin.com/company/rgoods/"],
//! ]
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};

use super::{Link, LinkTarget, validate_links};
use crate::config::ConfigDiagnostics;

/// Sidebar link widgets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "widgets")]
pub struct WidgetsConfig {
    /// Blogroll as (label, url) pairs.
    #[config(inline_doc)]
    pub links: Vec<Link>,

    /// Social profiles as (label, url) pairs.
    #[config(inline_doc)]
    pub social: Vec<Link>,
}

impl WidgetsConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        validate_links(&self.links, LinkTarget::External, Self::FIELDS.links, diag);
        validate_links(&self.social, LinkTarget::External, Self::FIELDS.social, diag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_social_links() {
        let config = test_parse_config(
            "[widgets]\nsocial = [[\"Instagram\", \"https://www.instagram.com/rgoods_official/\"]]",
        );
        assert!(config.widgets.links.is_empty());
        assert_eq!(
            config.widgets.social,
            [Link::new(
                "Instagram",
                "https://www.instagram.com/rgoods_official/"
            )]
        );
    }

    #[test]
    fn test_relative_widget_link_rejected() {
        let config = test_parse_config("[widgets]\nlinks = [[\"Home\", \"/\"]]");
        let mut diag = ConfigDiagnostics::new();
        config.widgets.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field, WidgetsConfig::FIELDS.links);
    }
}
