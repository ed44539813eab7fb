use crate::modules::students::controller::{
    add_new_student, delete_student_by_id, get_student_by_id, get_students_by_empty_name,
    get_students_by_name_containing, list_all_students, update_student,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn init_students_router() -> Router<AppState> {
    Router::new()
        .route("/students", get(list_all_students))
        .route("/student", post(add_new_student))
        .route(
            "/student/{id}",
            get(get_student_by_id)
                .put(update_student)
                .delete(delete_student_by_id),
        )
        .route("/student/namelike", get(get_students_by_empty_name))
        .route("/student/namelike/", get(get_students_by_empty_name))
        .route("/student/namelike/{name}", get(get_students_by_name_containing))
}
