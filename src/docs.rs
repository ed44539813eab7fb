use utoipa::OpenApi;

use crate::modules::courses::model::{CountStudentsInCourse, Course};
use crate::modules::health::HealthResponse;
use crate::modules::students::model::{Student, StudentPayload};
use crate::utils::errors::ErrorDetail;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::health::health,
        crate::modules::courses::controller::list_all_courses,
        crate::modules::courses::controller::get_count_students_in_courses,
        crate::modules::courses::controller::delete_course_by_id,
        crate::modules::students::controller::list_all_students,
        crate::modules::students::controller::get_student_by_id,
        crate::modules::students::controller::get_students_by_name_containing,
        crate::modules::students::controller::get_students_by_empty_name,
        crate::modules::students::controller::add_new_student,
        crate::modules::students::controller::update_student,
        crate::modules::students::controller::delete_student_by_id,
    ),
    components(
        schemas(
            Course,
            CountStudentsInCourse,
            Student,
            StudentPayload,
            ErrorDetail,
            HealthResponse,
        )
    ),
    tags(
        (name = "Courses", description = "Course listing, enrollment counts and deletion"),
        (name = "Students", description = "Student management endpoints"),
        (name = "Health", description = "Liveness probe")
    ),
    info(
        title = "School API",
        version = "0.1.0",
        description = "Student and course management REST API built with Rust, Axum, and PostgreSQL.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        for expected in [
            "/courses/courses",
            "/courses/studcount",
            "/courses/courses/{courseid}",
            "/students/students",
            "/students/student",
            "/students/student/{id}",
            "/students/student/namelike",
            "/students/student/namelike/{name}",
            "/health",
        ] {
            assert!(paths.contains(&expected), "missing {}", expected);
        }
    }
}
