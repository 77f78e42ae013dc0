//! Role-based authorization middleware.
//!
//! Role gates run after [`crate::middleware::auth::authenticate`] and are
//! applied as route layers on the teacher and student route groups.
//! Authentication is always checked first: an unauthenticated request is a
//! 401, a wrong role is a 403. Ownership is not checked here at all; the
//! services enforce it by scoping their queries to the caller.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::middleware::auth::AuthUser;
use crate::modules::users::model::UserRole;
use crate::state::AppState;
use crate::utils::errors::AppError;

async fn require_role(
    state: AppState,
    req: Request,
    next: Next,
    required_role: UserRole,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let auth_user = AuthUser::from_request_parts(&mut parts, &state).await?;

    if auth_user.0.role != required_role {
        return Err(AppError::forbidden(anyhow::anyhow!(
            "Access denied. Required role: {}, but user has role: {}",
            required_role.as_str(),
            auth_user.0.role.as_str()
        )));
    }

    Ok(next.run(Request::from_parts(parts, body)).await)
}

/// Route layer for teacher-only routes.
pub async fn require_teacher(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match require_role(state, req, next, UserRole::Teacher).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

/// Route layer for student-only routes.
pub async fn require_student(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match require_role(state, req, next, UserRole::Student).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

