//! Enrollment persistence.
//!
//! Enrollment looks the course up by id alone (any existing course is
//! enrollable), but the student column is always the authenticated caller.
//! Progress updates are scoped to `(student_id, course_id)`; a miss is
//! "Enrollment not found" and never creates a row.

use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::courses::service::CourseService;
use crate::modules::enrollments::model::{CourseEnrollment, EnrollmentWithCourse};
use crate::utils::errors::AppError;

pub struct EnrollmentService;

impl EnrollmentService {
    #[instrument(skip(db))]
    pub async fn enroll(
        db: &PgPool,
        student_id: Uuid,
        course_id: Uuid,
    ) -> Result<CourseEnrollment, AppError> {
        let course = CourseService::get_course_unscoped(db, course_id).await?;

        let enrollment = sqlx::query_as::<_, CourseEnrollment>(
            "INSERT INTO course_enrollments (student_id, course_id)
             VALUES ($1, $2)
             RETURNING id, student_id, course_id, progress, enrolled_at",
        )
        .bind(student_id)
        .bind(course.id)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::bad_request(anyhow::anyhow!(
                        "Already enrolled in this course"
                    ));
                }
            }
            AppError::database(anyhow::Error::from(e))
        })?;

        Ok(enrollment)
    }

    #[instrument(skip(db))]
    pub async fn get_enrollments_by_student(
        db: &PgPool,
        student_id: Uuid,
    ) -> Result<Vec<EnrollmentWithCourse>, AppError> {
        let enrollments = sqlx::query_as::<_, EnrollmentWithCourse>(
            "SELECT e.id, e.course_id, c.title AS course_title, e.progress, e.enrolled_at
             FROM course_enrollments e
             JOIN courses c ON c.id = e.course_id
             WHERE e.student_id = $1
             ORDER BY e.enrolled_at",
        )
        .bind(student_id)
        .fetch_all(db)
        .await
        .map_err(|e| AppError::database(anyhow::Error::from(e)))?;

        Ok(enrollments)
    }

    #[instrument(skip(db))]
    pub async fn update_progress(
        db: &PgPool,
        student_id: Uuid,
        course_id: Uuid,
        progress: i32,
    ) -> Result<(), AppError> {
        let result = sqlx::query(
            "UPDATE course_enrollments
             SET progress = $1
             WHERE student_id = $2 AND course_id = $3",
        )
        .bind(progress)
        .bind(student_id)
        .bind(course_id)
        .execute(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_check_violation() {
                    return AppError::bad_request(anyhow::anyhow!(
                        "Progress must be between 0 and 100"
                    ));
                }
            }
            AppError::database(anyhow::Error::from(e))
        })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Enrollment not found")));
        }

        Ok(())
    }
}
