use axum::{
    Json,
    extract::{OriginalUri, Path, State},
    http::{Method, StatusCode},
};
use tracing::instrument;

use crate::modules::courses::model::{CountStudentsInCourse, Course};
use crate::state::AppState;
use crate::utils::access_log::{accessed, accessed_with};
use crate::utils::errors::{AppError, ErrorDetail};

#[utoipa::path(
    get,
    path = "/courses/courses",
    responses(
        (status = 200, description = "List of all courses", body = Vec<Course>),
        (status = 500, description = "Internal server error", body = ErrorDetail)
    ),
    tag = "Courses"
)]
#[instrument(skip(state))]
pub async fn list_all_courses(
    State(state): State<AppState>,
    method: Method,
    OriginalUri(uri): OriginalUri,
) -> Result<Json<Vec<Course>>, AppError> {
    accessed(&method, &uri);

    let courses = state.courses.find_all().await?;
    Ok(Json(courses))
}

#[utoipa::path(
    get,
    path = "/courses/studcount",
    responses(
        (status = 200, description = "Every course with its number of enrolled students", body = Vec<CountStudentsInCourse>),
        (status = 500, description = "Internal server error", body = ErrorDetail)
    ),
    tag = "Courses"
)]
#[instrument(skip(state))]
pub async fn get_count_students_in_courses(
    State(state): State<AppState>,
    method: Method,
    OriginalUri(uri): OriginalUri,
) -> Result<Json<Vec<CountStudentsInCourse>>, AppError> {
    accessed(&method, &uri);

    let counts = state.courses.count_students_in_courses().await?;
    Ok(Json(counts))
}

#[utoipa::path(
    delete,
    path = "/courses/courses/{courseid}",
    params(
        ("courseid" = i64, Path, description = "Course Id", example = 1)
    ),
    responses(
        (status = 200, description = "Course deleted"),
        (status = 404, description = "Course not found", body = ErrorDetail),
        (status = 500, description = "Internal server error", body = ErrorDetail)
    ),
    tag = "Courses"
)]
#[instrument(skip(state))]
pub async fn delete_course_by_id(
    State(state): State<AppState>,
    method: Method,
    OriginalUri(uri): OriginalUri,
    Path(courseid): Path<i64>,
) -> Result<StatusCode, AppError> {
    accessed_with(&method, &uri, courseid);

    state.courses.delete(courseid).await?;
    Ok(StatusCode::OK)
}
