use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::materials::model::{CourseMaterial, CreateMaterialDto};
use crate::modules::materials::service::MaterialService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// List materials of a section under one of the authenticated teacher's courses
#[utoipa::path(
    get,
    path = "/teacher/sections/{section_id}/materials",
    params(
        ("section_id" = Uuid, Path, description = "Section ID")
    ),
    responses(
        (status = 200, description = "Materials of the section", body = [CourseMaterial]),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - teacher only", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Course Materials"
)]
#[instrument(skip(state, auth_user))]
pub async fn get_materials(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(section_id): Path<Uuid>,
) -> Result<Json<Vec<CourseMaterial>>, AppError> {
    let materials =
        MaterialService::get_materials_by_section(&state.db, section_id, auth_user.user_id())
            .await?;
    Ok(Json(materials))
}

/// Create a material under a section of one of the authenticated teacher's courses
#[utoipa::path(
    post,
    path = "/teacher/sections/{section_id}/materials",
    params(
        ("section_id" = Uuid, Path, description = "Section ID")
    ),
    request_body = CreateMaterialDto,
    responses(
        (status = 201, description = "Material created", body = CourseMaterial),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - teacher only", body = ErrorResponse),
        (status = 404, description = "Section not found or not owned", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Course Materials"
)]
#[instrument(skip(state, auth_user, dto))]
pub async fn create_material(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(section_id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<CreateMaterialDto>,
) -> Result<(StatusCode, Json<CourseMaterial>), AppError> {
    let material =
        MaterialService::create_material(&state.db, section_id, auth_user.user_id(), dto).await?;
    Ok((StatusCode::CREATED, Json(material)))
}
