//! Page metadata table.
//!
//! Every content route has exactly one entry. Entries are `static` items
//! compiled into the binary and looked up with an exhaustive `match`, so a
//! new [`RouteKey`] variant without an entry does not build.

use std::fmt;

/// Identifies a content route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteKey {
    Home,
    About,
    Blog,
    Contact,
    Education,
    Experience,
    GithubStats,
    Projects,
    Dashboard,
}

impl RouteKey {
    /// Every route key, in navigation order.
    pub const ALL: [Self; 9] = [
        Self::Home,
        Self::About,
        Self::Experience,
        Self::Education,
        Self::Projects,
        Self::Blog,
        Self::GithubStats,
        Self::Contact,
        Self::Dashboard,
    ];

    /// Stable name of the route (e.g., `githubStats`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Blog => "blog",
            Self::Contact => "contact",
            Self::Education => "education",
            Self::Experience => "experience",
            Self::GithubStats => "githubStats",
            Self::Projects => "projects",
            Self::Dashboard => "dashboard",
        }
    }

    /// Look a route up by its stable name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.name() == name)
    }

    /// Canonical path of the route.
    #[must_use]
    pub const fn path(self) -> &'static str {
        page_metadata(self).path
    }

    /// Whether the route is public and belongs in the sitemap.
    #[must_use]
    pub const fn is_indexable(self) -> bool {
        !matches!(self, Self::Dashboard)
    }
}

impl fmt::Display for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Open Graph object type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OgType {
    Website,
    Profile,
}

impl OgType {
    /// Value of the `og:type` meta tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Website => "website",
            Self::Profile => "profile",
        }
    }
}

/// SEO metadata for one route.
#[derive(Debug, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
    /// Canonical path, joined onto the site's base URL.
    pub path: &'static str,
    pub og_type: OgType,
}

impl PageMetadata {
    /// Keywords as a single comma-separated `<meta>` value.
    #[must_use]
    pub fn keywords_csv(&self) -> String {
        self.keywords.join(", ")
    }

    /// Absolute canonical URL.
    #[must_use]
    pub fn canonical_url(&self, base_url: &str) -> String {
        if self.path == "/" {
            format!("{base_url}/")
        } else {
            format!("{base_url}{}", self.path)
        }
    }
}

/// Site name appended to page titles.
pub const SITE_NAME: &str = "Charbel SNN";

static HOME: PageMetadata = PageMetadata {
    title: "Charbel SNN | Software Engineer",
    description: "Portfolio of Charbel SNN, a software engineer building web platforms, APIs, and developer tooling.",
    keywords: &["Charbel SNN", "software engineer", "portfolio", "full-stack developer"],
    path: "/",
    og_type: OgType::Website,
};

static ABOUT: PageMetadata = PageMetadata {
    title: "About | Charbel SNN",
    description: "Background, skills, and interests of Charbel SNN.",
    keywords: &["about", "biography", "skills", "Charbel SNN"],
    path: "/about",
    og_type: OgType::Profile,
};

static BLOG: PageMetadata = PageMetadata {
    title: "Blog | Charbel SNN",
    description: "Articles on software engineering, web development, and lessons from shipping products.",
    keywords: &["blog", "articles", "software engineering", "web development"],
    path: "/blog",
    og_type: OgType::Website,
};

static CONTACT: PageMetadata = PageMetadata {
    title: "Contact | Charbel SNN",
    description: "Get in touch with Charbel SNN about projects, roles, or collaborations.",
    keywords: &["contact", "hire", "collaboration", "Charbel SNN"],
    path: "/contact",
    og_type: OgType::Website,
};

static EDUCATION: PageMetadata = PageMetadata {
    title: "Education | Charbel SNN",
    description: "Degrees, schools, and coursework of Charbel SNN.",
    keywords: &["education", "degrees", "university", "Charbel SNN"],
    path: "/education",
    og_type: OgType::Website,
};

static EXPERIENCE: PageMetadata = PageMetadata {
    title: "Experience | Charbel SNN",
    description: "Professional experience and roles held by Charbel SNN.",
    keywords: &["experience", "career", "resume", "Charbel SNN"],
    path: "/experience",
    og_type: OgType::Website,
};

static GITHUB_STATS: PageMetadata = PageMetadata {
    title: "GitHub Stats | Charbel SNN",
    description: "Open-source activity, languages, and contribution statistics from GitHub.",
    keywords: &["GitHub", "open source", "contributions", "statistics"],
    path: "/github-stats",
    og_type: OgType::Website,
};

static PROJECTS: PageMetadata = PageMetadata {
    title: "Projects | Charbel SNN",
    description: "Selected projects built by Charbel SNN, from side projects to production systems.",
    keywords: &["projects", "case studies", "open source", "Charbel SNN"],
    path: "/projects",
    og_type: OgType::Website,
};

static DASHBOARD: PageMetadata = PageMetadata {
    title: "Dashboard | Charbel SNN",
    description: "Content management dashboard.",
    keywords: &[],
    path: "/dashboard",
    og_type: OgType::Website,
};

/// Metadata entry for a route.
#[must_use]
pub const fn page_metadata(key: RouteKey) -> &'static PageMetadata {
    match key {
        RouteKey::Home => &HOME,
        RouteKey::About => &ABOUT,
        RouteKey::Blog => &BLOG,
        RouteKey::Contact => &CONTACT,
        RouteKey::Education => &EDUCATION,
        RouteKey::Experience => &EXPERIENCE,
        RouteKey::GithubStats => &GITHUB_STATS,
        RouteKey::Projects => &PROJECTS,
        RouteKey::Dashboard => &DASHBOARD,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_names_round_trip() {
        for key in RouteKey::ALL {
            assert_eq!(RouteKey::from_name(key.name()), Some(key));
        }
        assert_eq!(RouteKey::from_name("githubStats"), Some(RouteKey::GithubStats));
        assert_eq!(RouteKey::from_name("github-stats"), None);
    }

    #[test]
    fn test_paths_are_unique() {
        let paths: HashSet<_> = RouteKey::ALL.iter().map(|key| key.path()).collect();
        assert_eq!(paths.len(), RouteKey::ALL.len());
    }

    #[test]
    fn test_entries_are_filled_in() {
        for key in RouteKey::ALL {
            let meta = page_metadata(key);
            assert!(!meta.title.is_empty(), "{key} has no title");
            assert!(!meta.description.is_empty(), "{key} has no description");
            assert!(meta.path.starts_with('/'));
        }
    }

    #[test]
    fn test_canonical_url() {
        assert_eq!(
            page_metadata(RouteKey::Home).canonical_url("https://charbelsnn.com"),
            "https://charbelsnn.com/"
        );
        assert_eq!(
            page_metadata(RouteKey::GithubStats).canonical_url("https://charbelsnn.com"),
            "https://charbelsnn.com/github-stats"
        );
    }

    #[test]
    fn test_same_entry_every_lookup() {
        assert!(std::ptr::eq(
            page_metadata(RouteKey::Blog),
            page_metadata(RouteKey::Blog)
        ));
    }
}
