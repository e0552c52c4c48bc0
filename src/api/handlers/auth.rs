use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;
use time::Duration;
use tower_cookies::{cookie::SameSite, Cookie, Cookies};
use tracing::info;

use crate::api::dtos::requests::LoginRequest;
use crate::domain::models::auth::AuthResponse;
use crate::domain::models::user::{Role, User};
use crate::error::AppError;
use crate::state::AppState;

/// Opens a session for the venue operator. With a `plannerId` the session is
/// scoped to that planner's view, mirroring the app's role switcher; without
/// one it is a full admin session.
pub async fn login(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.secret != state.config.admin_secret {
        return Err(AppError::Unauthorized);
    }

    let user = match payload.planner_id {
        Some(planner_id) => {
            state
                .planners
                .get(&planner_id)
                .ok_or_else(|| AppError::NotFound("Planner not found".to_string()))?;
            User {
                id: format!("planner-{}", planner_id),
                role: Role::Planner,
                planner_id: Some(planner_id),
            }
        }
        None => User {
            id: "admin-1".to_string(),
            role: Role::Admin,
            planner_id: None,
        },
    };

    let (access_token, csrf_token) = state.auth_service.issue_session(&user)?;

    set_session_cookie(&cookies, &access_token);

    info!("Session opened: {}", user.id);

    Ok(Json(AuthResponse { csrf_token, user }))
}

pub async fn logout(cookies: Cookies) -> Result<impl IntoResponse, AppError> {
    cookies.remove(Cookie::build(("access_token", "")).path("/").into());
    info!("Session closed");
    Ok(StatusCode::OK)
}

fn set_session_cookie(cookies: &Cookies, access: &str) {
    let mut access_c = Cookie::new("access_token", access.to_string());
    access_c.set_http_only(true);
    access_c.set_secure(true);
    access_c.set_same_site(SameSite::Strict);
    access_c.set_path("/");
    access_c.set_max_age(Duration::hours(12));
    cookies.add(access_c);
}
