//! Persistence gateway traits.
//!
//! Each service receives one of these as an `Arc<dyn ...>` at construction,
//! so the HTTP layer never knows which store it talks to. Methods return
//! `Ok(None)` / `Ok(false)` for missing rows; turning that into a 404 is the
//! caller's job.

use async_trait::async_trait;
use school_core::AppError;
use school_models::{CountStudentsInCourse, Course, Student};

#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Every student, ordered by id.
    async fn find_all(&self) -> Result<Vec<Student>, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Student>, AppError>;

    /// Students whose name contains `fragment`, ignoring case.
    ///
    /// The fragment is matched literally; an empty fragment matches everyone.
    ///
    /// Case folding is backend dependent. [`MemoryStore`](crate::MemoryStore)
    /// folds full Unicode. [`PgStore`](crate::PgStore) uses `lower()`, which
    /// follows the database's `LC_CTYPE`: a UTF-8 locale folds `É` to `é`,
    /// the `C` locale folds ASCII only.
    async fn find_by_name_containing(&self, fragment: &str) -> Result<Vec<Student>, AppError>;

    /// Inserts a student when `id` is `None`, otherwise replaces the one at `id`.
    ///
    /// Returns `None` when replacing an id that does not exist.
    async fn save(&self, id: Option<i64>, name: &str) -> Result<Option<Student>, AppError>;

    /// Removes the student and its enrollments. `false` when nothing was deleted.
    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError>;
}

#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Every course, ordered by id.
    async fn find_all(&self) -> Result<Vec<Course>, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Course>, AppError>;

    /// Inserts a course when `id` is `None`, otherwise renames the one at `id`.
    async fn save(&self, id: Option<i64>, name: &str) -> Result<Option<Course>, AppError>;

    /// Removes the course and its enrollments. `false` when nothing was deleted.
    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError>;

    /// One row per course with its number of enrolled students, ordered by course id.
    async fn count_students_in_courses(&self) -> Result<Vec<CountStudentsInCourse>, AppError>;

    /// Links a student to a course. Enrolling twice is a no-op.
    ///
    /// Fails with a 404 when either side does not exist.
    async fn enroll(&self, student_id: i64, course_id: i64) -> Result<(), AppError>;
}
