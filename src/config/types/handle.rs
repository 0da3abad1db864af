//! Process-wide read-only config handle.
//!
//! The record is published once after loading and never mutated; readers
//! clone the `Arc` and may share it freely across threads.

use crate::config::SiteConfig;
use arc_swap::ArcSwap;
use std::sync::{Arc, LazyLock};

/// Global config storage.
static CONFIG: LazyLock<ArcSwap<SiteConfig>> =
    LazyLock::new(|| ArcSwap::from_pointee(SiteConfig::default()));

/// Current configuration.
#[inline]
pub fn cfg() -> Arc<SiteConfig> {
    CONFIG.load_full()
}

/// Publish a freshly loaded configuration and return the shared handle.
#[inline]
pub fn init_config(config: SiteConfig) -> Arc<SiteConfig> {
    let arc = Arc::new(config);
    CONFIG.store(Arc::clone(&arc));
    arc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_config_shares_same_record() {
        let mut config = SiteConfig::default();
        config.site.name = "Handle Test".into();

        let published = init_config(config);
        let read = cfg();
        assert!(Arc::ptr_eq(&published, &read));
        assert_eq!(read.site.name, "Handle Test");

        let from_thread = std::thread::spawn(|| cfg().site.name.clone())
            .join()
            .unwrap();
        assert_eq!(from_thread, "Handle Test");
    }
}
