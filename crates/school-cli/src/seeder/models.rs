//! Seeding inputs.

/// A course row to insert.
pub struct CourseSeed {
    pub name: String,
}

/// A student row to insert.
pub struct StudentSeed {
    pub name: String,
}

/// Complete configuration for database seeding.
#[derive(Clone, Debug)]
pub struct SeedConfig {
    pub num_courses: usize,
    pub num_students: usize,
    /// Upper bound on how many courses one student is enrolled in.
    pub max_courses_per_student: usize,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            num_courses: 6,
            num_students: 100,
            max_courses_per_student: 3,
        }
    }
}

impl SeedConfig {
    pub fn new(num_courses: usize, num_students: usize) -> Self {
        Self {
            num_courses,
            num_students,
            ..Default::default()
        }
    }

    pub fn with_max_courses_per_student(mut self, max: usize) -> Self {
        self.max_courses_per_student = max;
        self
    }
}
