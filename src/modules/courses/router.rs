use crate::modules::courses::controller::{
    delete_course_by_id, get_count_students_in_courses, list_all_courses,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get},
};

pub fn init_courses_router() -> Router<AppState> {
    Router::new()
        .route("/courses", get(list_all_courses))
        .route("/studcount", get(get_count_students_in_courses))
        .route("/courses/{courseid}", delete(delete_course_by_id))
}
