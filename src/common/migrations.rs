// src/common/migrations.rs
//! Database schema management
//!
//! All tables are created idempotently at startup. The uniqueness
//! constraints on `users.google_id` and `*_profiles.user_id` are load-bearing:
//! the auth upsert and the get-or-create role resolvers rely on them as the
//! arbiter for concurrent calls.

use sqlx::SqlitePool;
use tracing::info;

use super::id_generator::{generate_category_id, generate_template_id};

/// Run all database migrations
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    create_user_tables(pool).await?;
    create_job_tables(pool).await?;
    create_catalog_tables(pool).await?;
    create_indexes(pool).await?;

    // The category catalog backs the job form's dropdowns; seed it once so
    // the catalog endpoints return data on a fresh database.
    seed_job_catalog(pool).await?;

    info!("✅ Database migration completed successfully!");

    Ok(())
}

async fn create_user_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id TEXT PRIMARY KEY,
            google_id TEXT NOT NULL UNIQUE,
            email TEXT NOT NULL,
            name TEXT,
            picture_url TEXT,
            email_verified INTEGER NOT NULL DEFAULT 0,
            created_at TEXT DEFAULT (datetime('now'))
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS employer_profiles (
            id TEXT PRIMARY KEY,
            user_id TEXT NOT NULL UNIQUE REFERENCES users(id),
            location TEXT,
            status INTEGER NOT NULL DEFAULT 0,
            created_at TEXT DEFAULT (datetime('now'))
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS parttimer_profiles (
            id TEXT PRIMARY KEY,
            user_id TEXT NOT NULL UNIQUE REFERENCES users(id),
            location TEXT,
            created_at TEXT DEFAULT (datetime('now'))
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_job_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS jobs (
            id TEXT PRIMARY KEY,
            as_emp_id TEXT NOT NULL REFERENCES employer_profiles(id),
            category TEXT NOT NULL,
            location TEXT NOT NULL,
            duration_from TEXT NOT NULL,
            duration_upto TEXT NOT NULL,
            start_of_shift TEXT NOT NULL,
            end_of_shift TEXT NOT NULL,
            break_duration REAL NOT NULL DEFAULT 0,
            salary REAL NOT NULL,
            salary_condition TEXT NOT NULL DEFAULT '',
            short_desc TEXT NOT NULL,
            long_desc TEXT NOT NULL,
            status TEXT NOT NULL DEFAULT 'active',
            created_at TEXT DEFAULT (datetime('now'))
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS job_applications (
            id TEXT PRIMARY KEY,
            jobid TEXT NOT NULL REFERENCES jobs(id),
            prtmr_id TEXT NOT NULL REFERENCES parttimer_profiles(id),
            status TEXT NOT NULL DEFAULT 'applied',
            amount REAL NOT NULL,
            bid_amount REAL,
            bid_reason TEXT,
            created_at TEXT DEFAULT (datetime('now'))
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_catalog_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS job_categories (
            id TEXT PRIMARY KEY,
            category TEXT NOT NULL UNIQUE
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS job_templates (
            id TEXT PRIMARY KEY,
            category_id TEXT NOT NULL REFERENCES job_categories(id),
            short_desc TEXT NOT NULL,
            long_desc TEXT NOT NULL,
            UNIQUE (category_id, short_desc)
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_indexes(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let indexes = [
        "CREATE INDEX IF NOT EXISTS idx_jobs_as_emp_id ON jobs(as_emp_id)",
        "CREATE INDEX IF NOT EXISTS idx_job_applications_jobid ON job_applications(jobid)",
        "CREATE INDEX IF NOT EXISTS idx_job_applications_prtmr_id ON job_applications(prtmr_id)",
        "CREATE INDEX IF NOT EXISTS idx_job_templates_category_id ON job_templates(category_id)",
    ];

    for index in indexes {
        sqlx::query(index).execute(pool).await?;
    }

    Ok(())
}

/// Seed the job-category catalog if it is empty
async fn seed_job_catalog(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM job_categories")
        .fetch_one(pool)
        .await?;

    if existing > 0 {
        return Ok(());
    }

    let catalog: &[(&str, &[(&str, &str)])] = &[
        (
            "Cleaning",
            &[
                (
                    "Home deep cleaning",
                    "Thorough cleaning of a private home including kitchen, \
                     bathrooms and living areas. Cleaning supplies provided on site.",
                ),
                (
                    "Office cleaning shift",
                    "After-hours cleaning of a small office: desks, floors, \
                     kitchenette and waste disposal.",
                ),
            ],
        ),
        (
            "Delivery",
            &[
                (
                    "Parcel delivery round",
                    "Deliver parcels along a fixed neighbourhood route. Own \
                     scooter or bicycle required; route sheet provided.",
                ),
                (
                    "Restaurant food runner",
                    "Pick up prepared orders from the kitchen and deliver to \
                     nearby addresses during the evening rush.",
                ),
            ],
        ),
        (
            "Retail",
            &[
                (
                    "Stockroom assistant",
                    "Unpack incoming stock, label items and keep shelves \
                     replenished during opening hours.",
                ),
                (
                    "Checkout operator",
                    "Operate the till, handle card and cash payments and help \
                     bag purchases at peak times.",
                ),
            ],
        ),
        (
            "Food Service",
            &[
                (
                    "Kitchen porter",
                    "Wash dishes, keep work surfaces clean and support the \
                     kitchen team during service.",
                ),
                (
                    "Catering waitstaff",
                    "Serve food and drinks at a catered event, set and clear \
                     tables, smart dress required.",
                ),
            ],
        ),
        (
            "Tutoring",
            &[(
                "Secondary school maths tutoring",
                "One-on-one maths support for a secondary school student. \
                 Weekly sessions, materials agreed with the family.",
            )],
        ),
    ];

    for (category, templates) in catalog {
        let category_id = generate_category_id();
        sqlx::query("INSERT INTO job_categories (id, category) VALUES (?, ?)")
            .bind(&category_id)
            .bind(category)
            .execute(pool)
            .await?;

        for (short_desc, long_desc) in *templates {
            sqlx::query(
                "INSERT INTO job_templates (id, category_id, short_desc, long_desc) VALUES (?, ?, ?, ?)",
            )
            .bind(generate_template_id())
            .bind(&category_id)
            .bind(short_desc)
            .bind(long_desc)
            .execute(pool)
            .await?;
        }
    }

    info!("Seeded job category catalog");

    Ok(())
}
