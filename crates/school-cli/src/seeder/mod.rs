//! Database seeding for the School API.
//!
//! - [`courses`]: course generation and insertion
//! - [`students`]: student generation, insertion and random enrollments
//! - [`models`]: seeding configuration
//!
//! Data is generated in parallel with Rayon and inserted with multi-value
//! `INSERT` statements inside one transaction per table.

pub mod courses;
pub mod models;
pub mod students;

pub use models::SeedConfig;

use sqlx::PgPool;
use std::time::Instant;

/// Seeds courses, students, and random enrollments between them.
pub async fn seed_all(db: &PgPool, config: SeedConfig) -> Result<(), Box<dyn std::error::Error>> {
    let start_time = Instant::now();

    println!("🌱 Starting full database seeding...");
    println!("   - Courses: {}", config.num_courses);
    println!(
        "   - Students: {} (up to {} courses each)",
        config.num_students, config.max_courses_per_student
    );

    let course_ids = courses::seed_courses(db, config.num_courses).await?;
    let student_ids = students::seed_students(db, config.num_students).await?;

    let pairs =
        students::generate_enrollments(&student_ids, &course_ids, config.max_courses_per_student);
    students::insert_enrollments(db, &pairs).await?;

    println!("✅ Seeding complete in {:?}", start_time.elapsed());
    Ok(())
}

pub async fn seed_courses_only(
    db: &PgPool,
    count: usize,
) -> Result<Vec<i64>, Box<dyn std::error::Error>> {
    courses::seed_courses(db, count).await
}

/// Seeds students and enrolls them in the courses already in the database.
pub async fn seed_students_only(
    db: &PgPool,
    count: usize,
    max_courses_per_student: usize,
) -> Result<Vec<i64>, Box<dyn std::error::Error>> {
    let course_ids: Vec<i64> = sqlx::query_scalar("SELECT id FROM courses ORDER BY id")
        .fetch_all(db)
        .await?;

    let student_ids = students::seed_students(db, count).await?;

    if course_ids.is_empty() {
        println!("   ⚠️  No courses found, students were not enrolled");
    } else {
        let pairs =
            students::generate_enrollments(&student_ids, &course_ids, max_courses_per_student);
        students::insert_enrollments(db, &pairs).await?;
    }

    Ok(student_ids)
}

/// Deletes every enrollment, student and course.
pub async fn clear_all(db: &PgPool) -> Result<(), Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("🗑️  Clearing seeded data...");

    let mut tx = db.begin().await?;
    let enrollments = sqlx::query("DELETE FROM enrollments")
        .execute(&mut *tx)
        .await?
        .rows_affected();
    let students = sqlx::query("DELETE FROM students")
        .execute(&mut *tx)
        .await?
        .rows_affected();
    let courses = sqlx::query("DELETE FROM courses")
        .execute(&mut *tx)
        .await?
        .rows_affected();
    tx.commit().await?;

    println!(
        "   ✓ Deleted {} enrollments, {} students, {} courses in {:?}",
        enrollments,
        students,
        courses,
        start_time.elapsed()
    );

    Ok(())
}
