use clap::{Parser, Subcommand};
use dialoguer::Confirm;
use dotenvy::dotenv;
use school_cli::seeder::{self, SeedConfig};
use school_db::{PgPool, init_db_pool, run_migrations};

#[derive(Parser)]
#[command(name = "school-cli")]
#[command(about = "School CLI - database seeding for the School API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed courses, students, and random enrollments
    Seed {
        /// Number of courses to create
        #[arg(short = 'c', long, default_value = "6")]
        courses: usize,

        /// Number of students to create
        #[arg(short = 's', long, default_value = "100")]
        students: usize,

        /// Maximum number of courses a student is enrolled in
        #[arg(long, default_value = "3")]
        max_enrollments: usize,
    },
    /// Seed only courses
    SeedCourses {
        /// Number of courses to create
        #[arg(short = 'c', long, default_value = "6")]
        courses: usize,
    },
    /// Seed students and enroll them in existing courses
    SeedStudents {
        /// Number of students to create
        #[arg(short = 's', long, default_value = "100")]
        students: usize,

        /// Maximum number of courses a student is enrolled in
        #[arg(long, default_value = "3")]
        max_enrollments: usize,
    },
    /// Delete all students, courses, and enrollments
    ClearSeed {
        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();

    let Ok(database_url) = std::env::var("DATABASE_URL") else {
        eprintln!("❌ DATABASE_URL must be set");
        std::process::exit(1);
    };

    let pool = match init_db_pool(&database_url, 5).await {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("❌ Failed to connect to database: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run_migrations(&pool).await {
        eprintln!("❌ Failed to run migrations: {}", e);
        std::process::exit(1);
    }

    match cli.command {
        Commands::Seed {
            courses,
            students,
            max_enrollments,
        } => handle_seed(&pool, courses, students, max_enrollments).await,
        Commands::SeedCourses { courses } => handle_seed_courses(&pool, courses).await,
        Commands::SeedStudents {
            students,
            max_enrollments,
        } => handle_seed_students(&pool, students, max_enrollments).await,
        Commands::ClearSeed { yes } => handle_clear_seed(&pool, yes).await,
    }
}

async fn handle_seed(pool: &PgPool, courses: usize, students: usize, max_enrollments: usize) {
    let config = SeedConfig::new(courses, students).with_max_courses_per_student(max_enrollments);

    if let Err(e) = seeder::seed_all(pool, config).await {
        eprintln!("\n❌ Error seeding database: {}", e);
        std::process::exit(1);
    }
}

async fn handle_seed_courses(pool: &PgPool, courses: usize) {
    match seeder::seed_courses_only(pool, courses).await {
        Ok(ids) => println!("✅ Created {} courses", ids.len()),
        Err(e) => {
            eprintln!("\n❌ Error seeding courses: {}", e);
            std::process::exit(1);
        }
    }
}

async fn handle_seed_students(pool: &PgPool, students: usize, max_enrollments: usize) {
    match seeder::seed_students_only(pool, students, max_enrollments).await {
        Ok(ids) => println!("✅ Created {} students", ids.len()),
        Err(e) => {
            eprintln!("\n❌ Error seeding students: {}", e);
            std::process::exit(1);
        }
    }
}

async fn handle_clear_seed(pool: &PgPool, yes: bool) {
    if !yes {
        let confirmed = Confirm::new()
            .with_prompt("Delete all students, courses, and enrollments?")
            .default(false)
            .interact()
            .unwrap_or(false);

        if !confirmed {
            println!("Aborted");
            return;
        }
    }

    if let Err(e) = seeder::clear_all(pool).await {
        eprintln!("\n❌ Error clearing seeded data: {}", e);
        std::process::exit(1);
    }
}
