//! PostgreSQL persistence gateway.
//!
//! Queries are checked at runtime (`query_as::<_, T>`) so the workspace builds
//! without a reachable database.

use anyhow::Context;
use async_trait::async_trait;
use school_core::AppError;
use school_models::{CountStudentsInCourse, Course, Student};
use sqlx::PgPool;
use tracing::instrument;

use crate::repository::{CourseRepository, StudentRepository};

#[derive(Clone, Debug)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudentRepository for PgStore {
    #[instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<Student>, AppError> {
        let students = sqlx::query_as::<_, Student>("SELECT id, name FROM students ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .context("Failed to fetch students")
            .map_err(AppError::database)?;

        Ok(students)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> Result<Option<Student>, AppError> {
        let student =
            sqlx::query_as::<_, Student>("SELECT id, name FROM students WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .context("Failed to fetch student by ID")
                .map_err(AppError::database)?;

        Ok(student)
    }

    #[instrument(skip(self))]
    async fn find_by_name_containing(&self, fragment: &str) -> Result<Vec<Student>, AppError> {
        // strpos keeps `%` and `_` literal, unlike ILIKE
        let students = sqlx::query_as::<_, Student>(
            r#"
            SELECT id, name
            FROM students
            WHERE strpos(lower(name), lower($1)) > 0
            ORDER BY id
            "#,
        )
        .bind(fragment)
        .fetch_all(&self.pool)
        .await
        .context("Failed to search students by name")
        .map_err(AppError::database)?;

        Ok(students)
    }

    #[instrument(skip(self))]
    async fn save(&self, id: Option<i64>, name: &str) -> Result<Option<Student>, AppError> {
        let student = match id {
            None => sqlx::query_as::<_, Student>(
                "INSERT INTO students (name) VALUES ($1) RETURNING id, name",
            )
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .map(Some),
            Some(id) => sqlx::query_as::<_, Student>(
                r#"
                UPDATE students
                SET name = $1, updated_at = NOW()
                WHERE id = $2
                RETURNING id, name
                "#,
            )
            .bind(name)
            .bind(id)
            .fetch_optional(&self.pool)
            .await,
        }
        .context("Failed to save student")
        .map_err(AppError::database)?;

        Ok(student)
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .context("Failed to delete student")
            .map_err(AppError::database)?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl CourseRepository for PgStore {
    #[instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<Course>, AppError> {
        let courses = sqlx::query_as::<_, Course>("SELECT id, name FROM courses ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .context("Failed to fetch courses")
            .map_err(AppError::database)?;

        Ok(courses)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> Result<Option<Course>, AppError> {
        let course = sqlx::query_as::<_, Course>("SELECT id, name FROM courses WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .context("Failed to fetch course by ID")
            .map_err(AppError::database)?;

        Ok(course)
    }

    #[instrument(skip(self))]
    async fn save(&self, id: Option<i64>, name: &str) -> Result<Option<Course>, AppError> {
        let course = match id {
            None => sqlx::query_as::<_, Course>(
                "INSERT INTO courses (name) VALUES ($1) RETURNING id, name",
            )
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .map(Some),
            Some(id) => sqlx::query_as::<_, Course>(
                r#"
                UPDATE courses
                SET name = $1, updated_at = NOW()
                WHERE id = $2
                RETURNING id, name
                "#,
            )
            .bind(name)
            .bind(id)
            .fetch_optional(&self.pool)
            .await,
        }
        .context("Failed to save course")
        .map_err(AppError::database)?;

        Ok(course)
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .context("Failed to delete course")
            .map_err(AppError::database)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn count_students_in_courses(&self) -> Result<Vec<CountStudentsInCourse>, AppError> {
        let counts = sqlx::query_as::<_, CountStudentsInCourse>(
            r#"
            SELECT
                c.id AS course_id,
                c.name AS course_name,
                COUNT(e.student_id) AS student_count
            FROM courses c
            LEFT JOIN enrollments e ON e.course_id = c.id
            GROUP BY c.id, c.name
            ORDER BY c.id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to count students in courses")
        .map_err(AppError::database)?;

        Ok(counts)
    }

    #[instrument(skip(self))]
    async fn enroll(&self, student_id: i64, course_id: i64) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO enrollments (student_id, course_id)
            VALUES ($1, $2)
            ON CONFLICT (student_id, course_id) DO NOTHING
            "#,
        )
        .bind(student_id)
        .bind(course_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e
                && db_err.is_foreign_key_violation()
            {
                return AppError::not_found(anyhow::anyhow!(
                    "Student {} or course {} not found",
                    student_id,
                    course_id
                ));
            }
            AppError::database(anyhow::Error::from(e))
        })?;

        Ok(())
    }
}
