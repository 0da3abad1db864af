//! Configuration section definitions.
//!
//! Each module corresponds to a section in `site.toml`:
//!
//! | Module         | TOML Section   | Purpose                              |
//! |----------------|----------------|--------------------------------------|
//! | `site`         | `[site]`       | Identity, url, timezone, language    |
//! | `menu`         | `[menu]`       | Navigation menu                      |
//! | `widgets`      | `[widgets]`    | Blogroll and social links            |
//! | `feed`         | `[feed]`       | Feed toggles                         |
//! | `theme`        | `[theme]`      | Theme name or path                   |
//! | `plugins`      | `[plugins]`    | Plugin list                          |
//! | `static_files` | `[static]`     | Passthrough asset paths              |

mod feed;
mod link;
mod menu;
mod plugins;
mod site;
mod static_files;
mod theme;
mod widgets;

pub use feed::{FeedConfig, FeedKind};
pub use link::Link;
pub(crate) use link::{LinkTarget, validate_links};
pub use menu::MenuConfig;
pub use plugins::PluginsConfig;
pub use site::SiteInfoConfig;
pub use static_files::{PathMetadata, StaticConfig};
pub use theme::ThemeConfig;
pub use widgets::WidgetsConfig;
