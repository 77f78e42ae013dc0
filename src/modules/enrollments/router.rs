use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::enrollments::controller::{
    enroll_in_course, get_enrollments, update_course_progress,
};
use crate::state::AppState;

pub fn init_enrollments_router() -> Router<AppState> {
    Router::new()
        .route("/courses/{course_id}/enroll", post(enroll_in_course))
        .route("/courses/{course_id}/progress", post(update_course_progress))
        .route("/student/enrollments", get(get_enrollments))
}
