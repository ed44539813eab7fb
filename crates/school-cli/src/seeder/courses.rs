//! Course seeding.

use fake::Fake;
use fake::faker::company::en::Industry;
use rayon::prelude::*;
use sqlx::{PgPool, Postgres, Transaction};
use std::time::Instant;

use super::models::CourseSeed;

const BATCH_SIZE: usize = 1000;

/// Generates course names in parallel using Rayon
pub fn generate_courses(count: usize) -> Vec<CourseSeed> {
    (0..count)
        .into_par_iter()
        .map(|i| {
            let subject: String = Industry().fake();
            let number = 100 + (i % 4) * 100 + (1..100).fake::<usize>();
            CourseSeed {
                name: format!("{} {}", subject, number),
            }
        })
        .collect()
}

pub async fn seed_courses(
    db: &PgPool,
    count: usize,
) -> Result<Vec<i64>, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("📚 Seeding {} courses...", count);

    let courses = generate_courses(count);

    let mut tx = db.begin().await?;
    let mut ids = Vec::with_capacity(courses.len());
    for chunk in courses.chunks(BATCH_SIZE) {
        ids.extend(insert_courses_chunk(&mut tx, chunk).await?);
    }
    tx.commit().await?;

    println!(
        "   ✓ Inserted {} courses in {:?}",
        ids.len(),
        start_time.elapsed()
    );

    Ok(ids)
}

async fn insert_courses_chunk(
    tx: &mut Transaction<'_, Postgres>,
    courses: &[CourseSeed],
) -> Result<Vec<i64>, Box<dyn std::error::Error>> {
    if courses.is_empty() {
        return Ok(Vec::new());
    }

    let placeholders: Vec<String> = (1..=courses.len()).map(|i| format!("(${})", i)).collect();
    let query = format!(
        "INSERT INTO courses (name) VALUES {} RETURNING id",
        placeholders.join(", ")
    );

    let mut q = sqlx::query_scalar(&query);
    for course in courses {
        q = q.bind(&course.name);
    }

    Ok(q.fetch_all(&mut **tx).await?)
}
