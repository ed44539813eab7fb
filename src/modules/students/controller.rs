use axum::{
    Json,
    extract::{OriginalUri, Path, State},
    http::{Method, StatusCode, header},
    response::IntoResponse,
};
use tracing::instrument;

use crate::modules::students::model::{Student, StudentPayload};
use crate::state::AppState;
use crate::utils::access_log::{accessed, accessed_with};
use crate::utils::errors::{AppError, ErrorDetail};
use crate::validator::{JsonBody, ValidatedJson};

#[utoipa::path(
    get,
    path = "/students/students",
    responses(
        (status = 200, description = "List of all students", body = Vec<Student>),
        (status = 500, description = "Internal server error", body = ErrorDetail)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn list_all_students(
    State(state): State<AppState>,
    method: Method,
    OriginalUri(uri): OriginalUri,
) -> Result<Json<Vec<Student>>, AppError> {
    accessed(&method, &uri);

    let students = state.students.find_all().await?;
    Ok(Json(students))
}

#[utoipa::path(
    get,
    path = "/students/student/{id}",
    params(
        ("id" = i64, Path, description = "Student Id", example = 1)
    ),
    responses(
        (status = 200, description = "Student found", body = Student),
        (status = 404, description = "Student not found", body = ErrorDetail),
        (status = 500, description = "Internal server error", body = ErrorDetail)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn get_student_by_id(
    State(state): State<AppState>,
    method: Method,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<i64>,
) -> Result<Json<Student>, AppError> {
    accessed_with(&method, &uri, id);

    let student = state.students.find_by_id(id).await?;
    Ok(Json(student))
}

#[utoipa::path(
    get,
    path = "/students/student/namelike/{name}",
    params(
        ("name" = String, Path, description = "Name or portion of a name, matched ignoring case", example = "al")
    ),
    responses(
        (status = 200, description = "Students whose name contains the fragment", body = Vec<Student>),
        (status = 500, description = "Internal server error", body = ErrorDetail)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn get_students_by_name_containing(
    State(state): State<AppState>,
    method: Method,
    OriginalUri(uri): OriginalUri,
    Path(name): Path<String>,
) -> Result<Json<Vec<Student>>, AppError> {
    accessed_with(&method, &uri, &name);

    let students = state.students.find_by_name_containing(&name).await?;
    Ok(Json(students))
}

/// `/student/namelike` with nothing after it: the empty fragment, which matches everyone.
#[utoipa::path(
    get,
    path = "/students/student/namelike",
    responses(
        (status = 200, description = "All students (empty name fragment)", body = Vec<Student>),
        (status = 500, description = "Internal server error", body = ErrorDetail)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn get_students_by_empty_name(
    State(state): State<AppState>,
    method: Method,
    OriginalUri(uri): OriginalUri,
) -> Result<Json<Vec<Student>>, AppError> {
    accessed_with(&method, &uri, "");

    let students = state.students.find_by_name_containing("").await?;
    Ok(Json(students))
}

#[utoipa::path(
    post,
    path = "/students/student",
    request_body = StudentPayload,
    responses(
        (status = 201, description = "Student created",
            headers(("Location" = String, description = "URI of the new student"))),
        (status = 400, description = "Validation failed", body = ErrorDetail),
        (status = 500, description = "Internal server error", body = ErrorDetail)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn add_new_student(
    State(state): State<AppState>,
    method: Method,
    OriginalUri(uri): OriginalUri,
    ValidatedJson(payload): ValidatedJson<StudentPayload>,
) -> Result<impl IntoResponse, AppError> {
    accessed(&method, &uri);

    let student = state.students.create(payload).await?;

    let location = format!("{}/{}", uri.path().trim_end_matches('/'), student.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)]))
}

#[utoipa::path(
    put,
    path = "/students/student/{id}",
    params(
        ("id" = i64, Path, description = "Student Id", example = 1)
    ),
    request_body = StudentPayload,
    responses(
        (status = 200, description = "Student updated"),
        (status = 400, description = "Validation failed", body = ErrorDetail),
        (status = 404, description = "Student not found", body = ErrorDetail),
        (status = 500, description = "Internal server error", body = ErrorDetail)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn update_student(
    State(state): State<AppState>,
    method: Method,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<i64>,
    JsonBody(payload): JsonBody<StudentPayload>,
) -> Result<StatusCode, AppError> {
    accessed_with(&method, &uri, id);

    state.students.update(id, payload).await?;
    Ok(StatusCode::OK)
}

#[utoipa::path(
    delete,
    path = "/students/student/{id}",
    params(
        ("id" = i64, Path, description = "Student Id", example = 1)
    ),
    responses(
        (status = 200, description = "Student deleted"),
        (status = 404, description = "Student not found", body = ErrorDetail),
        (status = 500, description = "Internal server error", body = ErrorDetail)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn delete_student_by_id(
    State(state): State<AppState>,
    method: Method,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    accessed_with(&method, &uri, id);

    state.students.delete(id).await?;
    Ok(StatusCode::OK)
}
