//! Tests for joblist module
//!
//! These tests verify job posting and catalog behavior:
//! - Job form and application payload validation
//! - Inserted jobs default to the "active" status
//! - Job-by-id reads never cross employer boundaries
//! - Catalog lookups against the seeded tables

#[cfg(test)]
mod tests {
    use super::super::handlers::{fetch_job_for_employer, get_job_by_id, insert_job};
    use super::super::models::JobForm;
    use super::super::validators::{JobApplicationValidator, JobFormValidator};
    use crate::auth::AuthedUser;
    use crate::common::migrations::run_migrations;
    use crate::common::{ApiError, AppState, Validator};
    use crate::parttimer::models::JobApplicationRequest;
    use crate::services::GoogleVerifier;
    use axum::extract::{Extension, Path};
    use sqlx::sqlite::SqlitePoolOptions;
    use sqlx::SqlitePool;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    fn app_state(pool: &SqlitePool) -> Arc<RwLock<AppState>> {
        Arc::new(RwLock::new(AppState {
            db: pool.clone(),
            jwt_secret: "test_secret_key".to_string(),
            verifier: Arc::new(GoogleVerifier::new(
                reqwest::Client::new(),
                "test-client-id".to_string(),
            )),
        }))
    }

    fn authed(user_id: &str) -> AuthedUser {
        AuthedUser {
            user_id: user_id.to_string(),
            google_id: format!("google-{user_id}"),
            email: format!("{user_id}@example.com"),
        }
    }

    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("in-memory pool");
        run_migrations(&pool).await.expect("migrations");
        pool
    }

    async fn insert_employer(pool: &SqlitePool, user_id: &str, emp_id: &str) {
        sqlx::query("INSERT INTO users (id, google_id, email) VALUES (?, ?, ?)")
            .bind(user_id)
            .bind(format!("google-{user_id}"))
            .bind(format!("{user_id}@example.com"))
            .execute(pool)
            .await
            .expect("insert user");
        sqlx::query("INSERT INTO employer_profiles (id, user_id) VALUES (?, ?)")
            .bind(emp_id)
            .bind(user_id)
            .execute(pool)
            .await
            .expect("insert employer profile");
    }

    fn job_form() -> JobForm {
        JobForm {
            category: "Cleaning".to_string(),
            location: "Seoul".to_string(),
            duration_from: "2026-09-01".to_string(),
            duration_upto: "2026-09-05".to_string(),
            start_of_shift: "09:00".to_string(),
            end_of_shift: "17:00".to_string(),
            break_duration: 0.5,
            salary: 12.5,
            salary_condition: "per hour".to_string(),
            short_desc: "Home deep cleaning".to_string(),
            long_desc: "Thorough cleaning of a private home.".to_string(),
        }
    }

    #[test]
    fn test_job_form_validator_valid_data() {
        let result = JobFormValidator.validate(&job_form());
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_job_form_validator_missing_fields() {
        let mut form = job_form();
        form.category = "".to_string();
        form.short_desc = "   ".to_string();

        let result = JobFormValidator.validate(&form);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.field == "category"));
        assert!(result.errors.iter().any(|e| e.field == "short_desc"));
    }

    #[test]
    fn test_job_form_validator_rejects_bad_numbers() {
        let mut form = job_form();
        form.salary = 0.0;
        form.break_duration = -1.0;

        let result = JobFormValidator.validate(&form);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.field == "salary"));
        assert!(result.errors.iter().any(|e| e.field == "break_"));
    }

    #[test]
    fn test_application_validator_rejects_non_positive_amounts() {
        let request = JobApplicationRequest {
            amount: 0.0,
            bid_amount: Some(-2.0),
            bid_reason: None,
        };

        let result = JobApplicationValidator.validate(&request);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.field == "amount"));
        assert!(result.errors.iter().any(|e| e.field == "bid_amount"));
    }

    #[test]
    fn test_application_validator_valid_data() {
        let request = JobApplicationRequest {
            amount: 11.0,
            bid_amount: None,
            bid_reason: Some("Available weekends".to_string()),
        };

        let result = JobApplicationValidator.validate(&request);
        assert!(result.is_valid);
    }

    #[tokio::test]
    async fn test_insert_job_defaults_to_active() {
        let pool = test_pool().await;
        insert_employer(&pool, "U_EMPLOY", "E_TEST01").await;

        let job = insert_job(&pool, "E_TEST01", &job_form()).await.unwrap();

        assert!(job.id.starts_with("J_"));
        assert_eq!(job.status, "active");
        assert_eq!(job.as_emp_id, "E_TEST01");
        assert_eq!(job.salary, 12.5);
        assert_eq!(job.break_duration, 0.5);
    }

    #[tokio::test]
    async fn test_job_read_is_scoped_to_owning_employer() {
        let pool = test_pool().await;
        insert_employer(&pool, "U_OWNER", "E_OWNER1").await;
        insert_employer(&pool, "U_OTHER", "E_OTHER1").await;

        let job = insert_job(&pool, "E_OWNER1", &job_form()).await.unwrap();

        let own = fetch_job_for_employer(&pool, &job.id, "E_OWNER1")
            .await
            .unwrap();
        assert!(own.is_some());

        let other = fetch_job_for_employer(&pool, &job.id, "E_OTHER1")
            .await
            .unwrap();
        assert!(other.is_none(), "another employer must never see the job");
    }

    #[tokio::test]
    async fn test_job_read_without_employer_profile_is_forbidden() {
        let pool = test_pool().await;
        insert_employer(&pool, "U_OWNER", "E_OWNER1").await;
        let job = insert_job(&pool, "E_OWNER1", &job_form()).await.unwrap();

        // Caller exists but never opted into the employer role
        sqlx::query("INSERT INTO users (id, google_id, email) VALUES (?, ?, ?)")
            .bind("U_NOPROF")
            .bind("google-U_NOPROF")
            .bind("U_NOPROF@example.com")
            .execute(&pool)
            .await
            .unwrap();

        let result = get_job_by_id(
            Extension(app_state(&pool)),
            authed("U_NOPROF"),
            Path(job.id.clone()),
        )
        .await;

        match result {
            Err(ApiError::Forbidden(_)) => {}
            Err(_) => panic!("profileless caller must get Forbidden, not another error"),
            Ok(_) => panic!("profileless caller must not read any job"),
        }
    }

    #[tokio::test]
    async fn test_job_read_by_other_employer_is_not_found() {
        let pool = test_pool().await;
        insert_employer(&pool, "U_OWNER", "E_OWNER1").await;
        insert_employer(&pool, "U_OTHER", "E_OTHER1").await;
        let job = insert_job(&pool, "E_OWNER1", &job_form()).await.unwrap();

        let result = get_job_by_id(
            Extension(app_state(&pool)),
            authed("U_OTHER"),
            Path(job.id.clone()),
        )
        .await;

        match result {
            Err(ApiError::NotFound(_)) => {}
            Err(_) => panic!("foreign job must read as NotFound, not another error"),
            Ok(_) => panic!("another employer's job must never be returned"),
        }
    }

    #[tokio::test]
    async fn test_seeded_catalog_lookups() {
        let pool = test_pool().await;

        let categories: Vec<(String, String)> =
            sqlx::query_as("SELECT id, category FROM job_categories ORDER BY category")
                .fetch_all(&pool)
                .await
                .unwrap();
        assert!(!categories.is_empty(), "migrations must seed the catalog");

        let (cleaning_id, _) = categories
            .iter()
            .find(|(_, name)| name == "Cleaning")
            .expect("Cleaning category seeded")
            .clone();

        let short_descs: Vec<String> =
            sqlx::query_scalar("SELECT short_desc FROM job_templates WHERE category_id = ?")
                .bind(&cleaning_id)
                .fetch_all(&pool)
                .await
                .unwrap();
        assert!(short_descs.contains(&"Home deep cleaning".to_string()));

        let long_desc: Option<String> = sqlx::query_scalar(
            "SELECT long_desc FROM job_templates WHERE short_desc = ? LIMIT 1",
        )
        .bind("Home deep cleaning")
        .fetch_optional(&pool)
        .await
        .unwrap();
        assert!(long_desc.is_some());

        let missing: Option<String> = sqlx::query_scalar(
            "SELECT long_desc FROM job_templates WHERE short_desc = ? LIMIT 1",
        )
        .bind("No such template")
        .fetch_optional(&pool)
        .await
        .unwrap();
        assert!(missing.is_none());
    }
}
