use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A section belonging to exactly one course.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct CourseSection {
    pub id: Uuid,
    pub course_id: Uuid,
    pub title: String,
    pub position: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateSectionDto {
    #[validate(length(min = 1))]
    pub title: String,
    #[serde(default)]
    pub position: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_section_dto_position_defaults_to_zero() {
        let dto: CreateSectionDto = serde_json::from_str(r#"{"title":"Week 1"}"#).unwrap();
        assert_eq!(dto.title, "Week 1");
        assert_eq!(dto.position, 0);
    }
}
