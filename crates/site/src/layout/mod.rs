//! Page layout: which chrome a path gets and the metadata each route renders
//! with.
//!
//! - [`RouteClass`] classifies a path as standard or dashboard
//! - [`ShellLayout`] is the extractor handlers use to learn their class
//! - [`RouteLayout`] binds a content route to its metadata entry; each
//!   route module exports one as `LAYOUT`
//! - [`PageContext`] is what the base template reads

pub mod sidebar;

use std::convert::Infallible;

use axum::extract::{FromRequestParts, OriginalUri};
use axum::http::request::Parts;

use crate::seo::{PageMetadata, RouteKey, page_metadata};

pub use sidebar::{
    SidebarContext, SidebarError, SidebarState, UseSidebar, sidebar_provider, store_sidebar_state,
    use_sidebar,
};

/// Header navigation entries.
pub const SITE_NAV: [(&str, &str); 7] = [
    ("/about", "About"),
    ("/experience", "Experience"),
    ("/projects", "Projects"),
    ("/education", "Education"),
    ("/blog", "Blog"),
    ("/github-stats", "GitHub"),
    ("/contact", "Contact"),
];

/// Path segment that owns the dashboard tree.
const DASHBOARD_PREFIX: &str = "/dashboard";

/// Which shell a path is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    /// Header, spacer, content, footer.
    Standard,
    /// Content only; the dashboard draws its own navigation.
    Dashboard,
}

impl RouteClass {
    /// Classify a request path.
    ///
    /// Matches whole segments: `/dashboard` and `/dashboard/...` are
    /// dashboard routes, `/dashboard-preview` is not.
    #[must_use]
    pub fn classify(path: &str) -> Self {
        match path.strip_prefix(DASHBOARD_PREFIX) {
            Some("") => Self::Dashboard,
            Some(rest) if rest.starts_with('/') => Self::Dashboard,
            _ => Self::Standard,
        }
    }
}

/// The shell for the current request.
///
/// Reads the original request URI, so it classifies correctly inside
/// nested routers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellLayout {
    path: String,
    class: RouteClass,
}

impl ShellLayout {
    /// Shell for a path.
    #[must_use]
    pub fn for_path(path: &str) -> Self {
        Self {
            path: path.to_string(),
            class: RouteClass::classify(path),
        }
    }

    /// The classified path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub const fn class(&self) -> RouteClass {
        self.class
    }

    /// Whether the shared header and footer are rendered.
    #[must_use]
    pub fn shows_chrome(&self) -> bool {
        self.class == RouteClass::Standard
    }

    /// Whether a navigation link to `href` points at the current page or
    /// one of its children.
    #[must_use]
    pub fn is_active(&self, href: &str) -> bool {
        if href == "/" {
            return self.path == "/";
        }
        self.path
            .strip_prefix(href)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
    }
}

impl<S> FromRequestParts<S> for ShellLayout
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let path = parts
            .extensions
            .get::<OriginalUri>()
            .map_or_else(|| parts.uri.path(), |uri| uri.0.path());
        Ok(Self::for_path(path))
    }
}

/// Binds a content route to its metadata entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteLayout {
    pub route: RouteKey,
}

impl RouteLayout {
    #[must_use]
    pub const fn new(route: RouteKey) -> Self {
        Self { route }
    }

    /// The route's metadata entry.
    #[must_use]
    pub const fn metadata(&self) -> &'static PageMetadata {
        page_metadata(self.route)
    }

    /// Page context for this route, rendered in `shell`.
    #[must_use]
    pub fn page(&self, shell: ShellLayout, base_url: &str) -> PageContext {
        PageContext::from_metadata(self.metadata(), shell, base_url)
    }
}

/// Head metadata plus shell, as read by `base.html`.
#[derive(Debug, Clone)]
pub struct PageContext {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub canonical_url: String,
    pub og_type: &'static str,
    /// Emit `noindex, nofollow`.
    pub noindex: bool,
    pub shell: ShellLayout,
}

impl PageContext {
    fn from_metadata(meta: &'static PageMetadata, shell: ShellLayout, base_url: &str) -> Self {
        let noindex = shell.class() == RouteClass::Dashboard;
        Self {
            title: meta.title.to_string(),
            description: meta.description.to_string(),
            keywords: meta.keywords_csv(),
            canonical_url: meta.canonical_url(base_url),
            og_type: meta.og_type.as_str(),
            noindex,
            shell,
        }
    }

    /// Context for a path with no route entry (the not-found page).
    #[must_use]
    pub fn not_found(shell: ShellLayout, base_url: &str) -> Self {
        Self {
            title: format!("Not Found | {}", crate::seo::metadata::SITE_NAME),
            description: "The page you are looking for does not exist.".to_string(),
            keywords: String::new(),
            canonical_url: format!("{base_url}{}", shell.path()),
            og_type: "website",
            noindex: true,
            shell,
        }
    }

    /// Header navigation entries.
    #[must_use]
    pub const fn nav(&self) -> &'static [(&'static str, &'static str)] {
        &SITE_NAV
    }

    /// Override the title (e.g., a blog post's own title).
    #[must_use]
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = format!("{title} | {}", crate::seo::metadata::SITE_NAME);
        self
    }

    /// Override the description.
    #[must_use]
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// Override the canonical URL with a child path of the site.
    #[must_use]
    pub fn with_canonical_path(mut self, base_url: &str, path: &str) -> Self {
        self.canonical_url = format!("{base_url}{path}");
        self.og_type = "article";
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_dashboard_segments() {
        assert_eq!(RouteClass::classify("/dashboard"), RouteClass::Dashboard);
        assert_eq!(RouteClass::classify("/dashboard/"), RouteClass::Dashboard);
        assert_eq!(
            RouteClass::classify("/dashboard/categories"),
            RouteClass::Dashboard
        );
    }

    #[test]
    fn test_classify_standard_paths() {
        for path in ["/", "/about", "/dashboard-preview", "/dashboards", "/blog/dashboard"] {
            assert_eq!(RouteClass::classify(path), RouteClass::Standard, "{path}");
        }
    }

    #[test]
    fn test_shell_chrome() {
        assert!(ShellLayout::for_path("/about").shows_chrome());
        assert!(!ShellLayout::for_path("/dashboard/users").shows_chrome());
    }

    #[test]
    fn test_is_active() {
        let shell = ShellLayout::for_path("/blog/hello-world");
        assert!(shell.is_active("/blog"));
        assert!(!shell.is_active("/"));
        assert!(!ShellLayout::for_path("/blogroll").is_active("/blog"));
        assert!(ShellLayout::for_path("/").is_active("/"));
    }

    #[test]
    fn test_route_layout_uses_table_entry() {
        for key in RouteKey::ALL {
            let layout = RouteLayout::new(key);
            assert!(std::ptr::eq(layout.metadata(), page_metadata(key)));
        }
    }

    #[test]
    fn test_page_context() {
        let page = RouteLayout::new(RouteKey::About)
            .page(ShellLayout::for_path("/about"), "https://charbelsnn.com");
        assert_eq!(page.title, "About | Charbel SNN");
        assert_eq!(page.canonical_url, "https://charbelsnn.com/about");
        assert_eq!(page.og_type, "profile");
        assert!(!page.noindex);

        let page = RouteLayout::new(RouteKey::Dashboard)
            .page(ShellLayout::for_path("/dashboard"), "https://charbelsnn.com");
        assert!(page.noindex);
    }
}
