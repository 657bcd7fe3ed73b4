//! GitHub statistics page route handler.
//!
//! The cards are SVG images rendered by an external service and fetched by
//! the browser; the page only builds their URLs.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;
use url::form_urlencoded;

use crate::components::LoadingPulse;
use crate::filters;
use crate::layout::{PageContext, RouteLayout, ShellLayout};
use crate::middleware::security_headers::GITHUB_STATS_HOST;
use crate::seo::RouteKey;
use crate::state::AppState;

pub const LAYOUT: RouteLayout = RouteLayout::new(RouteKey::GithubStats);

/// One stats card.
#[derive(Clone)]
pub struct StatsCard {
    pub title: &'static str,
    pub image_url: String,
}

/// Build the stats card URLs for `username`.
#[must_use]
pub fn stats_cards(username: &str) -> Vec<StatsCard> {
    let card = |path: &str, extra: &[(&str, &str)]| {
        let mut query = form_urlencoded::Serializer::new(String::new());
        query.append_pair("username", username);
        for (key, value) in extra {
            query.append_pair(key, value);
        }
        format!("{GITHUB_STATS_HOST}{path}?{}", query.finish())
    };

    vec![
        StatsCard {
            title: "Overview",
            image_url: card(
                "/api",
                &[("show_icons", "true"), ("include_all_commits", "true")],
            ),
        },
        StatsCard {
            title: "Top languages",
            image_url: card("/api/top-langs/", &[("layout", "compact")]),
        },
    ]
}

/// GitHub stats page template.
#[derive(Template, WebTemplate)]
#[template(path = "github_stats.html")]
pub struct GithubStatsTemplate {
    pub page: PageContext,
    pub username: String,
    pub profile_url: String,
    pub cards: Vec<StatsCard>,
    pub placeholder: LoadingPulse,
}

/// Display the GitHub stats page.
#[instrument(skip(state, shell))]
pub async fn show(State(state): State<AppState>, shell: ShellLayout) -> impl IntoResponse {
    let username = state.config().github_username.clone();

    GithubStatsTemplate {
        page: LAYOUT.page(shell, state.base_url()),
        profile_url: format!("https://github.com/{username}"),
        cards: stats_cards(&username),
        username,
        placeholder: LoadingPulse::new(4, "stats-card-placeholder"),
    }
}
