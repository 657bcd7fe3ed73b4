//! Crawler directives served at `/robots.txt`.

use std::fmt::Write;

/// One `User-agent` group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RobotsGroup {
    pub user_agent: &'static str,
    pub allow: &'static [&'static str],
    pub disallow: &'static [&'static str],
}

/// Paths no crawler should visit.
const DASHBOARD_PATHS: &[&str] = &["/dashboard", "/dashboard/*"];

/// Default group: dashboard, auth API, and internal probes are off limits.
const ALL_AGENTS: RobotsGroup = RobotsGroup {
    user_agent: "*",
    allow: &["/"],
    disallow: &["/dashboard", "/dashboard/*", "/api/auth/*", "/health"],
};

/// Googlebot only needs to be kept out of the dashboard.
const GOOGLEBOT: RobotsGroup = RobotsGroup {
    user_agent: "Googlebot",
    allow: &["/"],
    disallow: DASHBOARD_PATHS,
};

/// Full crawler policy for a site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RobotsPolicy {
    pub groups: Vec<RobotsGroup>,
    pub sitemap: String,
}

impl RobotsPolicy {
    /// Policy for the site at `base_url` (no trailing slash).
    #[must_use]
    pub fn for_site(base_url: &str) -> Self {
        Self {
            groups: vec![ALL_AGENTS, GOOGLEBOT],
            sitemap: format!("{base_url}/sitemap.xml"),
        }
    }

    /// Whether the group for `user_agent` disallows exactly `path`.
    #[must_use]
    pub fn disallows(&self, user_agent: &str, path: &str) -> bool {
        self.groups
            .iter()
            .find(|group| group.user_agent == user_agent)
            .is_some_and(|group| group.disallow.contains(&path))
    }

    /// Render as `robots.txt`.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for group in &self.groups {
            let _ = writeln!(out, "User-agent: {}", group.user_agent);
            for path in group.allow {
                let _ = writeln!(out, "Allow: {path}");
            }
            for path in group.disallow {
                let _ = writeln!(out, "Disallow: {path}");
            }
            out.push('\n');
        }
        let _ = writeln!(out, "Sitemap: {}", self.sitemap);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_agents_kept_out_of_dashboard_and_auth() {
        let policy = RobotsPolicy::for_site("https://charbelsnn.com");
        for path in ["/dashboard", "/dashboard/*", "/api/auth/*"] {
            assert!(policy.disallows("*", path), "{path} should be disallowed");
        }
        assert_eq!(policy.sitemap, "https://charbelsnn.com/sitemap.xml");
    }

    #[test]
    fn test_googlebot_has_narrower_list() {
        let policy = RobotsPolicy::for_site("https://charbelsnn.com");
        assert!(policy.disallows("Googlebot", "/dashboard"));
        assert!(policy.disallows("Googlebot", "/dashboard/*"));
        assert!(!policy.disallows("Googlebot", "/api/auth/*"));
    }

    #[test]
    fn test_render() {
        let text = RobotsPolicy::for_site("https://charbelsnn.com").render();
        assert!(text.starts_with("User-agent: *\nAllow: /\nDisallow: /dashboard\n"));
        assert!(text.contains("Disallow: /api/auth/*\n"));
        assert!(text.contains("User-agent: Googlebot\n"));
        assert!(text.ends_with("Sitemap: https://charbelsnn.com/sitemap.xml\n"));
    }
}
