//! Markdown content for the about/experience/projects pages and the blog.
//!
//! Files are loaded from the content directory once at startup, their YAML
//! frontmatter parsed, and the body rendered to HTML:
//!
//! ```text
//! content/
//! ├── pages/
//! │   ├── about.md
//! │   ├── experience.md
//! │   └── projects.md
//! └── blog/
//!     └── 2025-01-15-hello-world.md   -> /blog/hello-world
//! ```

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use chrono::NaiveDate;
use comrak::{Options, markdown_to_html};
use gray_matter::{Matter, ParsedEntity, engine::YAML};
use serde::Deserialize;

/// Average reading speed used for the reading-time estimate.
const WORDS_PER_MINUTE: usize = 200;

/// Metadata for static pages (about, experience, projects).
#[derive(Debug, Clone, Deserialize)]
pub struct PageMeta {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub updated_at: Option<NaiveDate>,
}

/// Metadata for blog posts
#[derive(Debug, Clone, Deserialize)]
pub struct PostMeta {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub published_at: NaiveDate,
    #[serde(default)]
    pub updated_at: Option<NaiveDate>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub draft: bool,
}

/// A rendered page with metadata and HTML content
#[derive(Debug, Clone)]
pub struct Page {
    pub slug: String,
    pub meta: PageMeta,
    pub content_html: String,
}

/// A rendered blog post with metadata and HTML content
#[derive(Debug, Clone)]
pub struct Post {
    pub slug: String,
    pub meta: PostMeta,
    pub content_html: String,
    pub reading_time_minutes: u32,
}

impl Post {
    /// Last modification date, for the sitemap.
    #[must_use]
    pub fn last_modified(&self) -> NaiveDate {
        self.meta.updated_at.unwrap_or(self.meta.published_at)
    }
}

/// Content store that holds all loaded content in memory
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    pages: Arc<HashMap<String, Page>>,
    posts: Arc<Vec<Post>>,
}

impl ContentStore {
    /// Load all content from the filesystem.
    ///
    /// Missing `pages/` or `blog/` directories yield an empty section. Files
    /// that fail to parse are logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing content directory cannot be read.
    pub fn load(content_dir: &Path) -> Result<Self, ContentError> {
        let pages = load_dir(&content_dir.join("pages"), parse_page)?
            .into_iter()
            .map(|page| (page.slug.clone(), page))
            .collect();

        let mut posts = load_dir(&content_dir.join("blog"), parse_post)?;
        // Newest first
        posts.sort_by(|a, b| b.meta.published_at.cmp(&a.meta.published_at));

        Ok(Self::from_parts(pages, posts))
    }

    /// Build a store from already-parsed content.
    #[must_use]
    pub fn from_parts(pages: HashMap<String, Page>, posts: Vec<Post>) -> Self {
        Self {
            pages: Arc::new(pages),
            posts: Arc::new(posts),
        }
    }

    /// Get a page by slug
    #[must_use]
    pub fn get_page(&self, slug: &str) -> Option<&Page> {
        self.pages.get(slug)
    }

    /// Get a published blog post by slug. Drafts are never returned.
    #[must_use]
    pub fn get_post(&self, slug: &str) -> Option<&Post> {
        self.get_published_posts().find(|p| p.slug == slug)
    }

    /// Get all published blog posts (excludes drafts), newest first
    pub fn get_published_posts(&self) -> impl Iterator<Item = &Post> {
        self.posts.iter().filter(|p| !p.meta.draft)
    }

    /// Get recent published posts, optionally excluding a specific slug
    #[must_use]
    pub fn get_recent_posts(&self, limit: usize, exclude_slug: Option<&str>) -> Vec<&Post> {
        self.get_published_posts()
            .filter(|p| exclude_slug.is_none_or(|s| p.slug != s))
            .take(limit)
            .collect()
    }
}

/// Parse every `.md` file in `dir` with `parse`.
fn load_dir<T>(
    dir: &Path,
    parse: fn(&str, &str) -> Result<T, ContentError>,
) -> Result<Vec<T>, ContentError> {
    let mut items = Vec::new();

    if !dir.exists() {
        tracing::info!(dir = %dir.display(), "Content directory does not exist");
        return Ok(items);
    }

    let entries = std::fs::read_dir(dir).map_err(|e| ContentError::Io(e.to_string()))?;

    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().is_none_or(|ext| ext != "md") {
            continue;
        }

        let result = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| ContentError::Parse("Invalid filename".to_string()))
            .and_then(|stem| {
                let raw = std::fs::read_to_string(&path)
                    .map_err(|e| ContentError::Io(e.to_string()))?;
                parse(stem, &raw)
            });

        match result {
            Ok(item) => {
                tracing::debug!(path = %path.display(), "Loaded content file");
                items.push(item);
            }
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "Failed to load content file");
            }
        }
    }

    Ok(items)
}

/// Parse a page; the slug is the file stem.
fn parse_page(stem: &str, raw: &str) -> Result<Page, ContentError> {
    let (meta, body) = parse_frontmatter::<PageMeta>(raw)?;

    Ok(Page {
        slug: stem.to_string(),
        meta,
        content_html: render_markdown(&body),
    })
}

/// Parse a blog post; a `YYYY-MM-DD-` prefix is dropped from the slug.
fn parse_post(stem: &str, raw: &str) -> Result<Post, ContentError> {
    let (meta, body) = parse_frontmatter::<PostMeta>(raw)?;

    Ok(Post {
        slug: strip_date_prefix(stem).to_string(),
        meta,
        content_html: render_markdown(&body),
        reading_time_minutes: reading_time(&body),
    })
}

fn parse_frontmatter<T: serde::de::DeserializeOwned>(
    raw: &str,
) -> Result<(T, String), ContentError> {
    let matter = Matter::<YAML>::new();
    let parsed: ParsedEntity<T> = matter
        .parse(raw)
        .map_err(|e| ContentError::Parse(format!("Failed to parse frontmatter: {e}")))?;
    let meta = parsed
        .data
        .ok_or_else(|| ContentError::Parse("Missing frontmatter".to_string()))?;
    Ok((meta, parsed.content))
}

fn strip_date_prefix(stem: &str) -> &str {
    match (stem.get(..10), stem.get(10..11), stem.get(11..)) {
        (Some(date), Some("-"), Some(rest))
            if !rest.is_empty() && NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok() =>
        {
            rest
        }
        _ => stem,
    }
}

/// Minutes to read `body`, never less than one.
fn reading_time(body: &str) -> u32 {
    let words = body.split_whitespace().count();
    u32::try_from(words.div_ceil(WORDS_PER_MINUTE))
        .unwrap_or(u32::MAX)
        .max(1)
}

/// Render markdown to HTML with GitHub Flavored Markdown support.
fn render_markdown(content: &str) -> String {
    let mut options = Options::default();

    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.extension.header_ids = Some(String::new());
    options.extension.footnotes = true;

    // Content is authored in-repo; allow raw HTML
    options.render.r#unsafe = true;

    markdown_to_html(content, &options)
}

/// Content loading errors
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const POST: &str = "---\ntitle: Hello\npublished_at: 2025-01-15\ntags: [rust]\n---\n\n# Hi\n\nSome **bold** text.\n";

    fn post(slug: &str, date: &str, draft: bool) -> Post {
        Post {
            slug: slug.to_string(),
            meta: PostMeta {
                title: slug.to_string(),
                description: None,
                published_at: date.parse().unwrap(),
                updated_at: None,
                tags: Vec::new(),
                draft,
            },
            content_html: String::new(),
            reading_time_minutes: 1,
        }
    }

    #[test]
    fn test_parse_post_strips_date_prefix() {
        let post = parse_post("2025-01-15-hello-world", POST).unwrap();
        assert_eq!(post.slug, "hello-world");
        assert_eq!(post.meta.title, "Hello");
        assert_eq!(post.meta.tags, vec!["rust".to_string()]);
        assert!(post.content_html.contains("<strong>bold</strong>"));
        assert_eq!(post.reading_time_minutes, 1);
    }

    #[test]
    fn test_slug_without_date_prefix_is_kept() {
        assert_eq!(strip_date_prefix("hello-world"), "hello-world");
        assert_eq!(strip_date_prefix("2025-13-40-not-a-date"), "2025-13-40-not-a-date");
        assert_eq!(strip_date_prefix("2025-01-15"), "2025-01-15");
    }

    #[test]
    fn test_missing_frontmatter_is_an_error() {
        assert!(parse_page("about", "# About\n").is_err());
    }

    #[test]
    fn test_reading_time() {
        assert_eq!(reading_time(""), 1);
        assert_eq!(reading_time(&"word ".repeat(200)), 1);
        assert_eq!(reading_time(&"word ".repeat(201)), 2);
    }

    #[test]
    fn test_drafts_are_hidden() {
        let store = ContentStore::from_parts(
            HashMap::new(),
            vec![
                post("newest-draft", "2025-03-01", true),
                post("newer", "2025-02-01", false),
                post("older", "2025-01-01", false),
            ],
        );

        assert!(store.get_post("newest-draft").is_none());
        assert!(store.get_post("newer").is_some());
        let recent: Vec<_> = store
            .get_recent_posts(5, Some("newer"))
            .into_iter()
            .map(|p| p.slug.as_str())
            .collect();
        assert_eq!(recent, vec!["older"]);
    }

    #[test]
    fn test_missing_directory_yields_empty_store() {
        let store = ContentStore::load(Path::new("/nonexistent/portfolio-content")).unwrap();
        assert!(store.get_page("about").is_none());
        assert_eq!(store.get_published_posts().count(), 0);
    }
}
