use axum::{
    Json,
    body::Bytes,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header},
};
use serde_json::json;
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::enrollments::model::{
    CourseEnrollment, EnrollmentWithCourse, ProgressParams, UpdateProgressDto,
};
use crate::modules::enrollments::service::EnrollmentService;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Enroll the authenticated student in a course
#[utoipa::path(
    post,
    path = "/courses/{course_id}/enroll",
    params(
        ("course_id" = Uuid, Path, description = "Course ID")
    ),
    responses(
        (status = 201, description = "Enrollment created", body = CourseEnrollment),
        (status = 400, description = "Already enrolled", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - student only", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Course Enrollment"
)]
#[instrument(skip(state, auth_user))]
pub async fn enroll_in_course(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(course_id): Path<Uuid>,
) -> Result<(StatusCode, Json<CourseEnrollment>), AppError> {
    let enrollment = EnrollmentService::enroll(&state.db, auth_user.user_id(), course_id).await?;
    Ok((StatusCode::CREATED, Json(enrollment)))
}

/// List the authenticated student's enrollments
#[utoipa::path(
    get,
    path = "/student/enrollments",
    responses(
        (status = 200, description = "Enrollments of the caller", body = [EnrollmentWithCourse]),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - student only", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Course Enrollment"
)]
#[instrument(skip(state, auth_user))]
pub async fn get_enrollments(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<Vec<EnrollmentWithCourse>>, AppError> {
    let enrollments =
        EnrollmentService::get_enrollments_by_student(&state.db, auth_user.user_id()).await?;
    Ok(Json(enrollments))
}

/// Pull a `progress` value out of a form-urlencoded or JSON body. Mirrors
/// the token lookup in the auth middleware: unknown fields (including a
/// `token` used for authentication) are ignored.
fn progress_from_body(content_type: Option<&str>, bytes: &[u8]) -> Option<i32> {
    let content_type = content_type?;

    if content_type.starts_with("application/x-www-form-urlencoded") {
        return serde_urlencoded::from_bytes::<UpdateProgressDto>(bytes)
            .ok()
            .and_then(|dto| dto.progress);
    }

    if content_type.starts_with("application/json") {
        return serde_json::from_slice::<UpdateProgressDto>(bytes)
            .ok()
            .and_then(|dto| dto.progress);
    }

    None
}

/// Update the authenticated student's progress in a course
///
/// The progress value is read from the request body (JSON or form) when
/// present, falling back to the `progress` query parameter, defaulting to 0.
#[utoipa::path(
    post,
    path = "/courses/{course_id}/progress",
    params(
        ("course_id" = Uuid, Path, description = "Course ID"),
        ("progress" = Option<i32>, Query, description = "Progress percentage (0-100)")
    ),
    request_body(content = UpdateProgressDto, description = "Progress percentage (0-100)"),
    responses(
        (status = 200, description = "Progress updated"),
        (status = 400, description = "Progress out of range", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - student only", body = ErrorResponse),
        (status = 404, description = "Enrollment not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Course Progress"
)]
#[instrument(skip(state, auth_user, headers, body))]
pub async fn update_course_progress(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(course_id): Path<Uuid>,
    Query(params): Query<ProgressParams>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<serde_json::Value>, AppError> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok());

    let progress = progress_from_body(content_type, &body)
        .or(params.progress)
        .unwrap_or(0);

    EnrollmentService::update_progress(&state.db, auth_user.user_id(), course_id, progress).await?;
    Ok(Json(json!({"status": "success"})))
}
