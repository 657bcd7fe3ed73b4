//! Blog route handlers.
//!
//! Posts come straight from the content store; templates read
//! `post.meta` for frontmatter fields.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Router,
    extract::{Path, State},
    response::IntoResponse,
    routing::get,
};
use tracing::instrument;

use crate::content::Post;
use crate::error::AppError;
use crate::filters;
use crate::layout::{PageContext, RouteLayout, ShellLayout};
use crate::seo::RouteKey;
use crate::state::AppState;

pub const LAYOUT: RouteLayout = RouteLayout::new(RouteKey::Blog);

/// Posts linked under an article.
const MORE_POSTS: usize = 3;

#[derive(Template, WebTemplate)]
#[template(path = "blog/index.html")]
pub struct BlogIndexTemplate {
    pub page: PageContext,
    pub posts: Vec<Post>,
}

#[derive(Template, WebTemplate)]
#[template(path = "blog/show.html")]
pub struct BlogShowTemplate {
    pub page: PageContext,
    pub post: Post,
    pub recent_posts: Vec<Post>,
}

/// Head metadata for a single article: its own title, summary and URL.
fn article_page(post: &Post, shell: ShellLayout, base_url: &str) -> PageContext {
    let page = LAYOUT
        .page(shell, base_url)
        .with_title(&post.meta.title)
        .with_canonical_path(base_url, &format!("/blog/{}", post.slug));
    match post.meta.description.as_deref() {
        Some(description) => page.with_description(description),
        None => page,
    }
}

/// Published posts, newest first.
#[instrument(skip(state, shell))]
pub async fn index(State(state): State<AppState>, shell: ShellLayout) -> impl IntoResponse {
    BlogIndexTemplate {
        page: LAYOUT.page(shell, state.base_url()),
        posts: state.content().get_published_posts().cloned().collect(),
    }
}

/// One post by slug.
///
/// # Errors
///
/// Returns 404 for drafts and unknown slugs.
#[instrument(skip(state, shell))]
pub async fn show(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    shell: ShellLayout,
) -> Result<impl IntoResponse, AppError> {
    let content = state.content();
    let Some(post) = content.get_post(&slug) else {
        return Err(AppError::NotFound(format!("post {slug}")));
    };

    Ok(BlogShowTemplate {
        page: article_page(post, shell, state.base_url()),
        recent_posts: content
            .get_recent_posts(MORE_POSTS, Some(&slug))
            .into_iter()
            .cloned()
            .collect(),
        post: post.clone(),
    })
}

/// Create the blog routes router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/{slug}", get(show))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::content::PostMeta;

    fn post(description: Option<&str>) -> Post {
        Post {
            slug: "typed-clients".to_string(),
            meta: PostMeta {
                title: "Typed clients".to_string(),
                description: description.map(String::from),
                published_at: "2026-06-02".parse().unwrap(),
                updated_at: None,
                tags: vec!["rust".to_string()],
                draft: false,
            },
            content_html: "<p>Hi</p>".to_string(),
            reading_time_minutes: 2,
        }
    }

    #[test]
    fn test_article_page_uses_post_metadata() {
        let shell = ShellLayout::for_path("/blog/typed-clients");
        let page = article_page(&post(Some("Endpoints as types.")), shell, "https://x.dev");

        assert!(page.title.starts_with("Typed clients | "));
        assert_eq!(page.description, "Endpoints as types.");
        assert_eq!(page.canonical_url, "https://x.dev/blog/typed-clients");
        assert_eq!(page.og_type, "article");
    }

    #[test]
    fn test_article_page_keeps_blog_description_without_summary() {
        let shell = ShellLayout::for_path("/blog/typed-clients");
        let page = article_page(&post(None), shell.clone(), "https://x.dev");
        let blog = LAYOUT.page(shell, "https://x.dev");
        assert_eq!(page.description, blog.description);
    }
}
