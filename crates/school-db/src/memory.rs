//! In-process persistence gateway.
//!
//! Mirrors the PostgreSQL schema: ids come from per-table counters and are
//! never reused, and deleting a student or course drops its enrollments.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use async_trait::async_trait;
use school_core::AppError;
use school_models::{CountStudentsInCourse, Course, Student};
use tokio::sync::RwLock;

use crate::repository::{CourseRepository, StudentRepository};

#[derive(Debug, Default)]
struct Tables {
    students: BTreeMap<i64, Student>,
    courses: BTreeMap<i64, Course>,
    /// (student_id, course_id)
    enrollments: BTreeSet<(i64, i64)>,
    last_student_id: i64,
    last_course_id: i64,
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StudentRepository for MemoryStore {
    async fn find_all(&self) -> Result<Vec<Student>, AppError> {
        Ok(self.tables.read().await.students.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Student>, AppError> {
        Ok(self.tables.read().await.students.get(&id).cloned())
    }

    async fn find_by_name_containing(&self, fragment: &str) -> Result<Vec<Student>, AppError> {
        let needle = fragment.to_lowercase();
        let tables = self.tables.read().await;

        Ok(tables
            .students
            .values()
            .filter(|s| s.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn save(&self, id: Option<i64>, name: &str) -> Result<Option<Student>, AppError> {
        let mut tables = self.tables.write().await;

        let id = match id {
            Some(id) if tables.students.contains_key(&id) => id,
            Some(_) => return Ok(None),
            None => {
                tables.last_student_id += 1;
                tables.last_student_id
            }
        };

        let student = Student {
            id,
            name: name.to_string(),
        };
        tables.students.insert(id, student.clone());

        Ok(Some(student))
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError> {
        let mut tables = self.tables.write().await;

        if tables.students.remove(&id).is_none() {
            return Ok(false);
        }
        tables.enrollments.retain(|(student_id, _)| *student_id != id);

        Ok(true)
    }
}

#[async_trait]
impl CourseRepository for MemoryStore {
    async fn find_all(&self) -> Result<Vec<Course>, AppError> {
        Ok(self.tables.read().await.courses.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Course>, AppError> {
        Ok(self.tables.read().await.courses.get(&id).cloned())
    }

    async fn save(&self, id: Option<i64>, name: &str) -> Result<Option<Course>, AppError> {
        let mut tables = self.tables.write().await;

        let id = match id {
            Some(id) if tables.courses.contains_key(&id) => id,
            Some(_) => return Ok(None),
            None => {
                tables.last_course_id += 1;
                tables.last_course_id
            }
        };

        let course = Course {
            id,
            name: name.to_string(),
        };
        tables.courses.insert(id, course.clone());

        Ok(Some(course))
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError> {
        let mut tables = self.tables.write().await;

        if tables.courses.remove(&id).is_none() {
            return Ok(false);
        }
        tables.enrollments.retain(|(_, course_id)| *course_id != id);

        Ok(true)
    }

    async fn count_students_in_courses(&self) -> Result<Vec<CountStudentsInCourse>, AppError> {
        let tables = self.tables.read().await;

        Ok(tables
            .courses
            .values()
            .map(|course| CountStudentsInCourse {
                course_id: course.id,
                course_name: course.name.clone(),
                student_count: tables
                    .enrollments
                    .iter()
                    .filter(|(_, course_id)| *course_id == course.id)
                    .count() as i64,
            })
            .collect())
    }

    async fn enroll(&self, student_id: i64, course_id: i64) -> Result<(), AppError> {
        let mut tables = self.tables.write().await;

        if !tables.students.contains_key(&student_id) || !tables.courses.contains_key(&course_id)
        {
            return Err(AppError::not_found(anyhow::anyhow!(
                "Student {} or course {} not found",
                student_id,
                course_id
            )));
        }
        tables.enrollments.insert((student_id, course_id));

        Ok(())
    }
}
