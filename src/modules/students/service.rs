use std::sync::Arc;

use school_db::StudentRepository;
use tracing::instrument;
use validator::Validate;

use crate::metrics::{track_student_created, track_student_deleted};
use crate::modules::students::model::{Student, StudentPayload};
use crate::utils::errors::AppError;

fn student_not_found(id: i64) -> AppError {
    AppError::not_found(anyhow::anyhow!("Student with id {} not found", id))
}

/// Student use cases on top of whichever [`StudentRepository`] it was built with.
#[derive(Clone)]
pub struct StudentService {
    repo: Arc<dyn StudentRepository>,
}

impl StudentService {
    pub fn new(repo: Arc<dyn StudentRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn find_all(&self) -> Result<Vec<Student>, AppError> {
        self.repo.find_all().await
    }

    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: i64) -> Result<Student, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| student_not_found(id))
    }

    #[instrument(skip(self))]
    pub async fn find_by_name_containing(&self, fragment: &str) -> Result<Vec<Student>, AppError> {
        self.repo.find_by_name_containing(fragment).await
    }

    /// Stores a new student under a fresh id.
    ///
    /// The payload must already be validated; any id it carries is dropped.
    #[instrument(skip(self, payload))]
    pub async fn create(&self, payload: StudentPayload) -> Result<Student, AppError> {
        let student = self
            .repo
            .save(None, &payload.name)
            .await?
            .ok_or_else(|| AppError::internal(anyhow::anyhow!("Insert returned no student")))?;

        crate::audit_event!("create", "student", student.id = student.id);
        track_student_created();

        Ok(student)
    }

    /// Replaces the student at `id` with `payload`.
    ///
    /// Existence is checked before validation, so an unknown id is a 404 even
    /// when the body is also invalid. `payload.id` is ignored.
    #[instrument(skip(self, payload))]
    pub async fn update(&self, id: i64, payload: StudentPayload) -> Result<Student, AppError> {
        self.find_by_id(id).await?;

        payload.validate().map_err(AppError::validation)?;

        let student = self
            .repo
            .save(Some(id), &payload.name)
            .await?
            .ok_or_else(|| student_not_found(id))?;

        crate::audit_event!("update", "student", student.id = id);

        Ok(student)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.repo.delete_by_id(id).await? {
            return Err(student_not_found(id));
        }

        crate::audit_event!("delete", "student", student.id = id);
        track_student_deleted();

        Ok(())
    }
}
