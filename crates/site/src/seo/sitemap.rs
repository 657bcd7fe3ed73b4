//! XML sitemap served at `/sitemap.xml`.

use std::fmt::Write;

use chrono::NaiveDate;

use super::metadata::RouteKey;
use crate::content::ContentStore;

/// A single URL entry in the sitemap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapEntry {
    pub loc: String,
    pub lastmod: Option<NaiveDate>,
}

impl SitemapEntry {
    fn write_xml(&self, out: &mut String) {
        out.push_str("<url>");
        let _ = write!(out, "<loc>{}</loc>", escape_xml(&self.loc));
        if let Some(lastmod) = self.lastmod {
            let _ = write!(out, "<lastmod>{}</lastmod>", lastmod.format("%Y-%m-%d"));
        }
        out.push_str("</url>");
    }
}

/// Entries for every indexable route plus each published post.
#[must_use]
pub fn sitemap_entries(base_url: &str, content: &ContentStore) -> Vec<SitemapEntry> {
    let routes = RouteKey::ALL
        .into_iter()
        .filter(|key| key.is_indexable())
        .map(|key| SitemapEntry {
            loc: super::page_metadata(key).canonical_url(base_url),
            lastmod: None,
        });

    let posts = content.get_published_posts().map(|post| SitemapEntry {
        loc: format!("{base_url}/blog/{}", post.slug),
        lastmod: Some(post.last_modified()),
    });

    routes.chain(posts).collect()
}

/// Render a `<urlset>` document.
#[must_use]
pub fn render_sitemap(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">");
    for entry in entries {
        entry.write_xml(&mut xml);
    }
    xml.push_str("</urlset>");
    xml
}

/// Escapes XML special characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
