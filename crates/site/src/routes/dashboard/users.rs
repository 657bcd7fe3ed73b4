//! Dashboard user list.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use tracing::instrument;

use portfolio_core::User;

use crate::api::ListQuery;
use crate::api::endpoints::ListUsers;
use crate::error::AppError;
use crate::filters;
use crate::layout::{ShellLayout, UseSidebar};
use crate::middleware::RequireApiToken;
use crate::routes::dashboard::{DashboardContext, FlashQuery};
use crate::state::AppState;

/// User row for templates.
#[derive(Clone)]
pub struct UserRow {
    pub name: String,
    pub email: String,
    pub role: &'static str,
    pub title: Option<String>,
    pub location: Option<String>,
}

impl From<&User> for UserRow {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role_or_default().label(),
            title: user.title.clone(),
            location: user.location.clone(),
        }
    }
}

/// Users page template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard/users.html")]
pub struct UsersTemplate {
    pub dash: DashboardContext,
    pub users: Vec<UserRow>,
}

/// List users.
///
/// # Errors
///
/// Returns an error if the list call fails.
#[instrument(skip_all)]
pub async fn index(
    State(state): State<AppState>,
    auth: RequireApiToken,
    shell: ShellLayout,
    sidebar: UseSidebar,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let response = state.api().call(&auth.session, &ListUsers(query)).await?;
    let users = response
        .items()
        .map(|users| users.iter().map(UserRow::from).collect())
        .unwrap_or_default();

    Ok(UsersTemplate {
        dash: DashboardContext::new(
            &state,
            shell,
            sidebar,
            &auth,
            "Users",
            &FlashQuery::default(),
        ),
        users,
    })
}
