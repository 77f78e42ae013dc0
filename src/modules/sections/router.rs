use axum::{Router, routing::get};

use crate::modules::sections::controller::{create_section, get_sections};
use crate::state::AppState;

pub fn init_sections_router() -> Router<AppState> {
    Router::new().route(
        "/courses/{course_id}/sections",
        get(get_sections).post(create_section),
    )
}
