//! Credential extraction and authentication.
//!
//! The [`authenticate`] middleware runs on every request. It pulls a raw
//! credential from the `Authorization` header, falling back to a `token`
//! query parameter and then a `token` field in a form or JSON body, strips
//! one of the known prefixes, validates the JWT, and resolves the subject
//! claim to a user row. The resolved user is stored in request extensions
//! for the [`AuthUser`] extractor.
//!
//! A missing or invalid credential is never an error at this layer: the
//! request simply continues unauthenticated and the role checks downstream
//! produce the 401/403. The validator is the final authority on whatever
//! the lenient extractor lets through.

use axum::{
    body::Body,
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};
use http_body_util::BodyExt;
use serde::Deserialize;
use uuid::Uuid;

use crate::modules::users::model::User;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::verify_token;

/// Authenticated user resolved by the [`authenticate`] middleware,
/// carried in request extensions.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Extractor for handlers that require an authenticated caller.
///
/// Rejects with 401 when [`authenticate`] did not resolve an identity.
#[derive(Debug, Clone)]
pub struct AuthUser(pub User);

impl AuthUser {
    pub fn user_id(&self) -> Uuid {
        self.0.id
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .map(|current| AuthUser(current.0.clone()))
            .ok_or_else(|| AppError::unauthorized(anyhow::anyhow!("Authentication required")))
    }
}

#[derive(Debug, Deserialize)]
struct TokenParam {
    token: Option<String>,
}

/// Strip a single known credential prefix, if present.
///
/// Only `Bearer `, `JWT `, and `Token ` are recognized, checked in that
/// order and case-sensitively. Anything else is used as-is; the token
/// validator decides whether it is acceptable.
pub fn normalize_raw_token(raw: &str) -> &str {
    if let Some(rest) = raw.strip_prefix("Bearer ") {
        return rest;
    }
    if let Some(rest) = raw.strip_prefix("JWT ") {
        return rest;
    }
    if let Some(rest) = raw.strip_prefix("Token ") {
        return rest;
    }
    raw
}

/// Look for a raw credential in the `Authorization` header, then in a
/// `token` query parameter. Body lookup is handled separately because it
/// consumes the request body.
pub fn raw_token_from_parts(parts: &Parts) -> Option<String> {
    if let Some(value) = parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
    {
        return Some(value.to_string());
    }

    parts
        .uri
        .query()
        .and_then(|query| serde_urlencoded::from_str::<TokenParam>(query).ok())
        .and_then(|params| params.token)
}

/// Pull a `token` field out of a buffered form-urlencoded or JSON body.
pub fn raw_token_from_body(content_type: Option<&str>, bytes: &[u8]) -> Option<String> {
    let content_type = content_type?;

    if content_type.starts_with("application/x-www-form-urlencoded") {
        return serde_urlencoded::from_bytes::<TokenParam>(bytes)
            .ok()
            .and_then(|params| params.token);
    }

    if content_type.starts_with("application/json") {
        return serde_json::from_slice::<serde_json::Value>(bytes)
            .ok()
            .and_then(|value| value.get("token").and_then(|t| t.as_str().map(String::from)));
    }

    None
}

fn body_may_carry_token(parts: &Parts) -> bool {
    parts
        .headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|ct| {
            ct.starts_with("application/x-www-form-urlencoded") || ct.starts_with("application/json")
        })
        .unwrap_or(false)
}

async fn resolve_user(state: &AppState, token: &str) -> Result<User, AppError> {
    let claims = verify_token(token, &state.jwt_config)?;

    let user_id = Uuid::parse_str(&claims.sub)
        .map_err(|_| AppError::unauthorized(anyhow::anyhow!("Invalid subject claim")))?;

    sqlx::query_as::<_, User>(
        "SELECT id, first_name, last_name, email, role, created_at, updated_at
         FROM users WHERE id = $1",
    )
    .bind(user_id)
    .fetch_optional(&state.db)
    .await
    .map_err(|e| AppError::database(anyhow::Error::from(e)))?
    .ok_or_else(|| AppError::unauthorized(anyhow::anyhow!("Unknown token subject")))
}

/// Router-wide authentication middleware.
///
/// Resolves a credential to a [`CurrentUser`] extension when possible and
/// always lets the request through; rejection is the role checks' job.
pub async fn authenticate(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let (mut parts, body) = req.into_parts();

    let (raw_token, body) = match raw_token_from_parts(&parts) {
        Some(raw) => (Some(raw), body),
        None if body_may_carry_token(&parts) => {
            // The body has to be buffered to peek at it, then restored for
            // the downstream extractors.
            let bytes = match body.collect().await {
                Ok(collected) => collected.to_bytes(),
                Err(_) => {
                    return AppError::bad_request(anyhow::anyhow!("Failed to read request body"))
                        .into_response();
                }
            };

            let content_type = parts
                .headers
                .get(header::CONTENT_TYPE)
                .and_then(|value| value.to_str().ok())
                .map(String::from);

            let raw = raw_token_from_body(content_type.as_deref(), &bytes);
            (raw, Body::from(bytes))
        }
        None => (None, body),
    };

    if let Some(raw) = raw_token {
        let token = normalize_raw_token(&raw);
        match resolve_user(&state, token).await {
            Ok(user) => {
                tracing::debug!(user_id = %user.id, "Request authenticated");
                parts.extensions.insert(CurrentUser(user));
            }
            Err(err) => {
                // All failure kinds collapse into "unauthenticated".
                tracing::debug!(error = %err.error, "Credential rejected");
            }
        }
    }

    next.run(Request::from_parts(parts, body)).await
}
