//! Section persistence, scoped transitively through the parent course's
//! teacher. Creating a section first resolves the parent course filtered by
//! `(id, teacher_id)`; a miss is "Course not found", whether the course is
//! absent or owned by someone else.

use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::courses::service::CourseService;
use crate::modules::sections::model::{CourseSection, CreateSectionDto};
use crate::utils::errors::AppError;

pub struct SectionService;

impl SectionService {
    #[instrument(skip(db, dto))]
    pub async fn create_section(
        db: &PgPool,
        course_id: Uuid,
        teacher_id: Uuid,
        dto: CreateSectionDto,
    ) -> Result<CourseSection, AppError> {
        let course = CourseService::get_course_by_id(db, course_id, teacher_id).await?;

        let section = sqlx::query_as::<_, CourseSection>(
            "INSERT INTO course_sections (course_id, title, position)
             VALUES ($1, $2, $3)
             RETURNING id, course_id, title, position, created_at, updated_at",
        )
        .bind(course.id)
        .bind(&dto.title)
        .bind(dto.position)
        .fetch_one(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))?;

        Ok(section)
    }

    #[instrument(skip(db))]
    pub async fn get_sections_by_course(
        db: &PgPool,
        course_id: Uuid,
        teacher_id: Uuid,
    ) -> Result<Vec<CourseSection>, AppError> {
        let sections = sqlx::query_as::<_, CourseSection>(
            "SELECT s.id, s.course_id, s.title, s.position, s.created_at, s.updated_at
             FROM course_sections s
             JOIN courses c ON c.id = s.course_id
             WHERE s.course_id = $1 AND c.teacher_id = $2
             ORDER BY s.position, s.created_at",
        )
        .bind(course_id)
        .bind(teacher_id)
        .fetch_all(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))?;

        Ok(sections)
    }
}
