//! Student and enrollment seeding.

use fake::Fake;
use fake::faker::name::en::Name;
use rand::Rng;
use rand::seq::SliceRandom;
use rayon::prelude::*;
use sqlx::{PgPool, Postgres, Transaction};
use std::time::Instant;

use super::models::StudentSeed;

const BATCH_SIZE: usize = 1000;

/// Generates student names in parallel using Rayon
pub fn generate_students(count: usize) -> Vec<StudentSeed> {
    (0..count)
        .into_par_iter()
        .map(|_| StudentSeed { name: Name().fake() })
        .collect()
}

/// Picks between zero and `max_per_student` distinct courses for each student.
pub fn generate_enrollments(
    student_ids: &[i64],
    course_ids: &[i64],
    max_per_student: usize,
) -> Vec<(i64, i64)> {
    if course_ids.is_empty() {
        return Vec::new();
    }

    let mut rng = rand::thread_rng();
    let upper = max_per_student.min(course_ids.len());
    let mut pairs = Vec::new();

    for &student_id in student_ids {
        let take = rng.gen_range(0..=upper);
        pairs.extend(
            course_ids
                .choose_multiple(&mut rng, take)
                .map(|&course_id| (student_id, course_id)),
        );
    }

    pairs
}

pub async fn seed_students(
    db: &PgPool,
    count: usize,
) -> Result<Vec<i64>, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("🎓 Seeding {} students...", count);

    let students = generate_students(count);

    let mut tx = db.begin().await?;
    let mut ids = Vec::with_capacity(students.len());
    for chunk in students.chunks(BATCH_SIZE) {
        ids.extend(insert_students_chunk(&mut tx, chunk).await?);
    }
    tx.commit().await?;

    println!(
        "   ✓ Inserted {} students in {:?}",
        ids.len(),
        start_time.elapsed()
    );

    Ok(ids)
}

async fn insert_students_chunk(
    tx: &mut Transaction<'_, Postgres>,
    students: &[StudentSeed],
) -> Result<Vec<i64>, Box<dyn std::error::Error>> {
    if students.is_empty() {
        return Ok(Vec::new());
    }

    let placeholders: Vec<String> = (1..=students.len()).map(|i| format!("(${})", i)).collect();
    let query = format!(
        "INSERT INTO students (name) VALUES {} RETURNING id",
        placeholders.join(", ")
    );

    let mut q = sqlx::query_scalar(&query);
    for student in students {
        q = q.bind(&student.name);
    }

    Ok(q.fetch_all(&mut **tx).await?)
}

/// Inserts enrollment pairs, skipping ones that already exist.
pub async fn insert_enrollments(
    db: &PgPool,
    pairs: &[(i64, i64)],
) -> Result<u64, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("🔗 Enrolling students in courses...");

    let mut tx = db.begin().await?;
    let mut inserted = 0;
    for chunk in pairs.chunks(BATCH_SIZE) {
        inserted += insert_enrollments_chunk(&mut tx, chunk).await?;
    }
    tx.commit().await?;

    println!(
        "   ✓ Created {} enrollments in {:?}",
        inserted,
        start_time.elapsed()
    );

    Ok(inserted)
}

async fn insert_enrollments_chunk(
    tx: &mut Transaction<'_, Postgres>,
    pairs: &[(i64, i64)],
) -> Result<u64, Box<dyn std::error::Error>> {
    if pairs.is_empty() {
        return Ok(0);
    }

    let placeholders: Vec<String> = (0..pairs.len())
        .map(|i| format!("(${}, ${})", i * 2 + 1, i * 2 + 2))
        .collect();
    let query = format!(
        "INSERT INTO enrollments (student_id, course_id) VALUES {} ON CONFLICT DO NOTHING",
        placeholders.join(", ")
    );

    let mut q = sqlx::query(&query);
    for (student_id, course_id) in pairs {
        q = q.bind(student_id).bind(course_id);
    }

    Ok(q.execute(&mut **tx).await?.rows_affected())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_students_count() {
        let students = generate_students(25);
        assert_eq!(students.len(), 25);
        assert!(students.iter().all(|s| !s.name.is_empty()));
    }

    #[test]
    fn test_enrollments_stay_within_bounds() {
        let students: Vec<i64> = (1..=50).collect();
        let courses = vec![10, 20, 30, 40];

        let pairs = generate_enrollments(&students, &courses, 2);

        let unique: HashSet<_> = pairs.iter().copied().collect();
        assert_eq!(unique.len(), pairs.len());
        for student in &students {
            let taken = pairs.iter().filter(|(s, _)| s == student).count();
            assert!(taken <= 2);
        }
        assert!(pairs.iter().all(|(_, c)| courses.contains(c)));
    }

    #[test]
    fn test_enrollments_without_courses() {
        assert!(generate_enrollments(&[1, 2, 3], &[], 3).is_empty());
    }
}
