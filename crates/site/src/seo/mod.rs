//! Search-engine facing pieces: per-route metadata, crawler directives, and
//! the sitemap.

pub mod metadata;
pub mod robots;
pub mod sitemap;

pub use metadata::{OgType, PageMetadata, RouteKey, page_metadata};
pub use robots::RobotsPolicy;
pub use sitemap::{SitemapEntry, render_sitemap, sitemap_entries};
