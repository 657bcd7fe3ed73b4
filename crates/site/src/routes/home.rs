//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::content::Post;
use crate::filters;
use crate::layout::{PageContext, RouteLayout, ShellLayout};
use crate::seo::RouteKey;
use crate::state::AppState;

pub const LAYOUT: RouteLayout = RouteLayout::new(RouteKey::Home);

/// Number of recent posts shown on the home page.
const RECENT_POSTS_COUNT: usize = 3;

/// A section teaser linking to one of the content pages.
#[derive(Clone)]
pub struct SectionLink {
    pub href: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
}

/// Teasers shown under the hero, in order.
const SECTIONS: [SectionLink; 4] = [
    SectionLink {
        href: "/experience",
        title: "Experience",
        blurb: "Roles, teams, and what I shipped.",
    },
    SectionLink {
        href: "/projects",
        title: "Projects",
        blurb: "Side projects and production systems.",
    },
    SectionLink {
        href: "/education",
        title: "Education",
        blurb: "Degrees and coursework.",
    },
    SectionLink {
        href: "/github-stats",
        title: "GitHub",
        blurb: "Open-source activity at a glance.",
    },
];

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub page: PageContext,
    pub sections: Vec<SectionLink>,
    pub recent_posts: Vec<Post>,
}

/// Display the home page.
#[instrument(skip(state, shell))]
pub async fn home(State(state): State<AppState>, shell: ShellLayout) -> impl IntoResponse {
    let recent_posts = state
        .content()
        .get_recent_posts(RECENT_POSTS_COUNT, None)
        .into_iter()
        .cloned()
        .collect();

    HomeTemplate {
        page: LAYOUT.page(shell, state.base_url()),
        sections: SECTIONS.to_vec(),
        recent_posts,
    }
}
