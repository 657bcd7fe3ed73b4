//! Dashboard authentication route handlers.
//!
//! The backend issues the tokens. Login stores them in the session, logout
//! tells the backend and drops the session.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use secrecy::SecretString;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use portfolio_core::LoginRequest;

use crate::api::endpoints::{self, Login, Logout};
use crate::error::{clear_sentry_user, set_sentry_user};
use crate::filters;
use crate::layout::{PageContext, ShellLayout};
use crate::middleware::{LOGIN_PATH, clear_login, store_login};
use crate::models::CurrentUser;
use crate::routes::dashboard::LAYOUT;
use crate::state::AppState;

/// Login form data.
#[derive(Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Query parameters for error display.
#[derive(Debug, Deserialize)]
pub struct MessageQuery {
    pub error: Option<String>,
}

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard/login.html")]
pub struct LoginTemplate {
    pub page: PageContext,
    pub error: Option<&'static str>,
}

/// Human-readable text for a login error code.
fn error_message(code: &str) -> &'static str {
    match code {
        "credentials" => "Invalid email or password.",
        "session" => "Could not start a session. Please try again.",
        _ => "Sign-in is unavailable right now. Please try again later.",
    }
}

/// Display the login page.
#[instrument(skip(state, shell))]
pub async fn login_page(
    State(state): State<AppState>,
    shell: ShellLayout,
    Query(query): Query<MessageQuery>,
) -> impl IntoResponse {
    LoginTemplate {
        page: LAYOUT.page(shell, state.base_url()).with_title("Sign in"),
        error: query.error.as_deref().map(error_message),
    }
}

/// Handle login form submission.
#[instrument(skip(state, session, form), fields(email = %form.email))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Response {
    let request = Login(LoginRequest {
        email: form.email.trim().to_string(),
        password: form.password,
    });

    let response = match state.api().call(&crate::api::NoToken, &request).await {
        Ok(response) => response,
        Err(e) if matches!(e.status(), Some(400 | 401 | 403 | 404)) => {
            tracing::warn!(error = %e, "Login rejected");
            return Redirect::to(&format!("{LOGIN_PATH}?error=credentials")).into_response();
        }
        Err(e) => {
            tracing::error!(error = %e, "Login request failed");
            return Redirect::to(&format!("{LOGIN_PATH}?error=unavailable")).into_response();
        }
    };

    let Some(token) = response.token().filter(|token| !token.is_empty()) else {
        tracing::warn!(message = ?response.message, "Login response carried no token");
        return Redirect::to(&format!("{LOGIN_PATH}?error=credentials")).into_response();
    };

    let user = match response.user() {
        Some(user) => Some(CurrentUser::from(user)),
        None => fetch_current_user(&state, token).await,
    };
    if let Err(e) = store_login(&session, token, response.refresh_token(), user.as_ref()).await {
        tracing::error!(error = %e, "Failed to store login in session");
        return Redirect::to(&format!("{LOGIN_PATH}?error=session")).into_response();
    }

    if let Some(user) = &user {
        set_sentry_user(&user.id, Some(&user.email));
        tracing::info!(user_id = %user.id, "Dashboard login");
    }

    Redirect::to("/dashboard").into_response()
}

/// Look up the signed-in user when the login response left it out.
///
/// Best effort: a failed lookup is logged and the login goes ahead.
async fn fetch_current_user(state: &AppState, token: &str) -> Option<CurrentUser> {
    let token = SecretString::from(token.to_string());
    match state.api().call(&token, &endpoints::CurrentUser).await {
        Ok(response) => {
            let user = response.user().cloned().or_else(|| response.into_items());
            user.as_ref().map(CurrentUser::from)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Could not load the current user");
            None
        }
    }
}

/// Handle logout.
///
/// The backend call is best effort: the session is dropped either way.
#[instrument(skip(state, session))]
pub async fn logout(State(state): State<AppState>, session: Session) -> Response {
    if let Err(e) = state.api().call(&session, &Logout).await {
        tracing::warn!(error = %e, "Backend logout failed");
    }

    if let Err(e) = clear_login(&session).await {
        tracing::error!(error = %e, "Failed to clear session");
    }
    clear_sentry_user();

    Redirect::to(LOGIN_PATH).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(error_message("credentials"), "Invalid email or password.");
        assert!(error_message("anything-else").contains("unavailable"));
    }
}
