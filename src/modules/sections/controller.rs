use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::sections::model::{CourseSection, CreateSectionDto};
use crate::modules::sections::service::SectionService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// List sections of one of the authenticated teacher's courses
#[utoipa::path(
    get,
    path = "/teacher/courses/{course_id}/sections",
    params(
        ("course_id" = Uuid, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Sections of the course", body = [CourseSection]),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - teacher only", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Course Sections"
)]
#[instrument(skip(state, auth_user))]
pub async fn get_sections(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(course_id): Path<Uuid>,
) -> Result<Json<Vec<CourseSection>>, AppError> {
    let sections =
        SectionService::get_sections_by_course(&state.db, course_id, auth_user.user_id()).await?;
    Ok(Json(sections))
}

/// Create a section under one of the authenticated teacher's courses
#[utoipa::path(
    post,
    path = "/teacher/courses/{course_id}/sections",
    params(
        ("course_id" = Uuid, Path, description = "Course ID")
    ),
    request_body = CreateSectionDto,
    responses(
        (status = 201, description = "Section created", body = CourseSection),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - teacher only", body = ErrorResponse),
        (status = 404, description = "Course not found or not owned", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Course Sections"
)]
#[instrument(skip(state, auth_user, dto))]
pub async fn create_section(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(course_id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<CreateSectionDto>,
) -> Result<(StatusCode, Json<CourseSection>), AppError> {
    let section =
        SectionService::create_section(&state.db, course_id, auth_user.user_id(), dto).await?;
    Ok((StatusCode::CREATED, Json(section)))
}
