use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Link between one student and one course.
///
/// `student_id` is always the authenticated caller; it is never read from
/// client input.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct CourseEnrollment {
    pub id: Uuid,
    pub student_id: Uuid,
    pub course_id: Uuid,
    pub progress: i32,
    pub enrolled_at: chrono::DateTime<chrono::Utc>,
}

/// Enrollment joined with the course title for student-facing listings.
#[derive(Serialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct EnrollmentWithCourse {
    pub id: Uuid,
    pub course_id: Uuid,
    pub course_title: String,
    pub progress: i32,
    pub enrolled_at: chrono::DateTime<chrono::Utc>,
}

/// Progress value supplied in the request body.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateProgressDto {
    pub progress: Option<i32>,
}

/// Progress value supplied as a query parameter.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ProgressParams {
    pub progress: Option<i32>,
}
