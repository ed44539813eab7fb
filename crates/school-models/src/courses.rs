//! Course domain models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A course students can be enrolled in.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Course {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Data Science")]
    pub name: String,
}

/// Number of students enrolled in one course.
///
/// Computed on every request, never stored.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct CountStudentsInCourse {
    pub course_id: i64,
    pub course_name: String,
    pub student_count: i64,
}
