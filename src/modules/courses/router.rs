use axum::{Router, routing::get};

use crate::modules::courses::controller::{
    create_course, delete_course, get_course, get_courses, update_course,
};
use crate::state::AppState;

pub fn init_courses_router() -> Router<AppState> {
    Router::new()
        .route("/courses", get(get_courses).post(create_course))
        .route(
            // Named course_id to line up with the nested section routes.
            "/courses/{course_id}",
            get(get_course)
                .put(update_course)
                .patch(update_course)
                .delete(delete_course),
        )
}
