use std::sync::Arc;

use school_db::CourseRepository;
use tracing::instrument;

use crate::metrics::track_course_deleted;
use crate::modules::courses::model::{CountStudentsInCourse, Course};
use crate::utils::errors::AppError;

/// Course use cases on top of whichever [`CourseRepository`] it was built with.
#[derive(Clone)]
pub struct CourseService {
    repo: Arc<dyn CourseRepository>,
}

impl CourseService {
    pub fn new(repo: Arc<dyn CourseRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn find_all(&self) -> Result<Vec<Course>, AppError> {
        self.repo.find_all().await
    }

    #[instrument(skip(self))]
    pub async fn count_students_in_courses(&self) -> Result<Vec<CountStudentsInCourse>, AppError> {
        self.repo.count_students_in_courses().await
    }

    /// Deletes the course and its enrollment links. Enrolled students stay.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.repo.delete_by_id(id).await? {
            return Err(AppError::not_found(anyhow::anyhow!(
                "Course with id {} not found",
                id
            )));
        }

        crate::audit_event!("delete", "course", course.id = id);
        track_course_deleted();

        Ok(())
    }
}
