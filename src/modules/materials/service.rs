//! Material persistence with two-hop ownership scoping: every lookup
//! resolves section -> course -> teacher, so a section under someone else's
//! course is "Section not found".

use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::materials::model::{CourseMaterial, CreateMaterialDto};
use crate::modules::sections::model::CourseSection;
use crate::utils::errors::AppError;

pub struct MaterialService;

impl MaterialService {
    async fn get_owned_section(
        db: &PgPool,
        section_id: Uuid,
        teacher_id: Uuid,
    ) -> Result<CourseSection, AppError> {
        sqlx::query_as::<_, CourseSection>(
            "SELECT s.id, s.course_id, s.title, s.position, s.created_at, s.updated_at
             FROM course_sections s
             JOIN courses c ON c.id = s.course_id
             WHERE s.id = $1 AND c.teacher_id = $2",
        )
        .bind(section_id)
        .bind(teacher_id)
        .fetch_optional(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Section not found")))
    }

    #[instrument(skip(db, dto))]
    pub async fn create_material(
        db: &PgPool,
        section_id: Uuid,
        teacher_id: Uuid,
        dto: CreateMaterialDto,
    ) -> Result<CourseMaterial, AppError> {
        let section = Self::get_owned_section(db, section_id, teacher_id).await?;

        let material = sqlx::query_as::<_, CourseMaterial>(
            "INSERT INTO course_materials (section_id, title, content)
             VALUES ($1, $2, $3)
             RETURNING id, section_id, title, content, created_at, updated_at",
        )
        .bind(section.id)
        .bind(&dto.title)
        .bind(&dto.content)
        .fetch_one(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))?;

        Ok(material)
    }

    #[instrument(skip(db))]
    pub async fn get_materials_by_section(
        db: &PgPool,
        section_id: Uuid,
        teacher_id: Uuid,
    ) -> Result<Vec<CourseMaterial>, AppError> {
        let materials = sqlx::query_as::<_, CourseMaterial>(
            "SELECT m.id, m.section_id, m.title, m.content, m.created_at, m.updated_at
             FROM course_materials m
             JOIN course_sections s ON s.id = m.section_id
             JOIN courses c ON c.id = s.course_id
             WHERE m.section_id = $1 AND c.teacher_id = $2
             ORDER BY m.created_at",
        )
        .bind(section_id)
        .bind(teacher_id)
        .fetch_all(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))?;

        Ok(materials)
    }
}
