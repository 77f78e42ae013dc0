//! Course persistence, scoped to the owning teacher.
//!
//! Every query here filters on `teacher_id`, so a course belonging to a
//! different teacher is indistinguishable from a nonexistent one: both
//! surface as "Course not found". Ownership is enforced by the filter,
//! never by fetching and comparing.

use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::courses::model::{Course, CreateCourseDto, UpdateCourseDto};
use crate::utils::errors::AppError;

pub struct CourseService;

impl CourseService {
    #[instrument(skip(db, dto))]
    pub async fn create_course(
        db: &PgPool,
        teacher_id: Uuid,
        dto: CreateCourseDto,
    ) -> Result<Course, AppError> {
        let course = sqlx::query_as::<_, Course>(
            "INSERT INTO courses (teacher_id, title, description)
             VALUES ($1, $2, $3)
             RETURNING id, teacher_id, title, description, created_at, updated_at",
        )
        .bind(teacher_id)
        .bind(&dto.title)
        .bind(&dto.description)
        .fetch_one(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))?;

        Ok(course)
    }

    #[instrument(skip(db))]
    pub async fn get_courses_by_teacher(
        db: &PgPool,
        teacher_id: Uuid,
    ) -> Result<Vec<Course>, AppError> {
        let courses = sqlx::query_as::<_, Course>(
            "SELECT id, teacher_id, title, description, created_at, updated_at
             FROM courses
             WHERE teacher_id = $1
             ORDER BY created_at",
        )
        .bind(teacher_id)
        .fetch_all(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))?;

        Ok(courses)
    }

    #[instrument(skip(db))]
    pub async fn get_course_by_id(
        db: &PgPool,
        id: Uuid,
        teacher_id: Uuid,
    ) -> Result<Course, AppError> {
        sqlx::query_as::<_, Course>(
            "SELECT id, teacher_id, title, description, created_at, updated_at
             FROM courses
             WHERE id = $1 AND teacher_id = $2",
        )
        .bind(id)
        .bind(teacher_id)
        .fetch_optional(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Course not found")))
    }

    #[instrument(skip(db, dto))]
    pub async fn update_course(
        db: &PgPool,
        id: Uuid,
        teacher_id: Uuid,
        dto: UpdateCourseDto,
    ) -> Result<Course, AppError> {
        let existing = Self::get_course_by_id(db, id, teacher_id).await?;

        let title = dto.title.unwrap_or(existing.title);
        let description = dto.description.or(existing.description);

        let course = sqlx::query_as::<_, Course>(
            "UPDATE courses
             SET title = $1, description = $2, updated_at = NOW()
             WHERE id = $3 AND teacher_id = $4
             RETURNING id, teacher_id, title, description, created_at, updated_at",
        )
        .bind(&title)
        .bind(&description)
        .bind(id)
        .bind(teacher_id)
        .fetch_one(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))?;

        Ok(course)
    }

    #[instrument(skip(db))]
    pub async fn delete_course(db: &PgPool, id: Uuid, teacher_id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1 AND teacher_id = $2")
            .bind(id)
            .bind(teacher_id)
            .execute(db)
            .await
            .map_err(|e| AppError::database(anyhow::Error::from(e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Course not found")));
        }

        Ok(())
    }

    /// Unscoped lookup used for enrollment: any existing course is enrollable.
    #[instrument(skip(db))]
    pub async fn get_course_unscoped(db: &PgPool, id: Uuid) -> Result<Course, AppError> {
        sqlx::query_as::<_, Course>(
            "SELECT id, teacher_id, title, description, created_at, updated_at
             FROM courses WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Course not found")))
    }
}
