use axum::{Router, routing::get};

use crate::modules::materials::controller::{create_material, get_materials};
use crate::state::AppState;

pub fn init_materials_router() -> Router<AppState> {
    Router::new().route(
        "/sections/{section_id}/materials",
        get(get_materials).post(create_material),
    )
}
