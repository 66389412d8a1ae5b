//! Tests for part-timer module
//!
//! These tests verify part-timer role resolution and job applications:
//! - get-or-create created/exists semantics
//! - Application rows default to the "applied" status

#[cfg(test)]
mod tests {
    use super::super::handlers::{
        get_or_create_parttimer, insert_application, resolve_parttimer_id,
    };
    use super::super::models::JobApplicationRequest;
    use crate::common::migrations::run_migrations;
    use sqlx::sqlite::SqlitePoolOptions;
    use sqlx::SqlitePool;

    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("in-memory pool");
        run_migrations(&pool).await.expect("migrations");
        pool
    }

    async fn insert_user(pool: &SqlitePool, id: &str) {
        sqlx::query("INSERT INTO users (id, google_id, email) VALUES (?, ?, ?)")
            .bind(id)
            .bind(format!("google-{id}"))
            .bind(format!("{id}@example.com"))
            .execute(pool)
            .await
            .expect("insert user");
    }

    async fn insert_job(pool: &SqlitePool, id: &str, as_emp_id: &str) {
        sqlx::query(
            r#"
            INSERT INTO jobs (id, as_emp_id, category, location, duration_from, duration_upto,
                              start_of_shift, end_of_shift, salary, short_desc, long_desc)
            VALUES (?, ?, 'Cleaning', 'Seoul', '2026-09-01', '2026-09-05',
                    '09:00', '17:00', 12.5, 'Home deep cleaning', 'Long description')
            "#,
        )
        .bind(id)
        .bind(as_emp_id)
        .execute(pool)
        .await
        .expect("insert job");
    }

    #[tokio::test]
    async fn test_resolver_returns_none_without_profile() {
        let pool = test_pool().await;
        insert_user(&pool, "U_AAAAAA").await;

        let resolved = resolve_parttimer_id(&pool, "U_AAAAAA").await.unwrap();
        assert!(resolved.is_none());
    }

    #[tokio::test]
    async fn test_get_or_create_first_creates_then_exists() {
        let pool = test_pool().await;
        insert_user(&pool, "U_AAAAAA").await;

        let (first_id, created) = get_or_create_parttimer(&pool, "U_AAAAAA").await.unwrap();
        assert!(created);
        assert!(first_id.starts_with("P_"));

        let (second_id, created_again) =
            get_or_create_parttimer(&pool, "U_AAAAAA").await.unwrap();
        assert!(!created_again);
        assert_eq!(first_id, second_id);

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM parttimer_profiles")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_application_defaults_to_applied_status() {
        let pool = test_pool().await;
        insert_user(&pool, "U_EMPLOY").await;
        insert_user(&pool, "U_WORKER").await;

        let emp_id: String = sqlx::query_scalar(
            "INSERT INTO employer_profiles (id, user_id) VALUES ('E_TEST01', 'U_EMPLOY') RETURNING id",
        )
        .fetch_one(&pool)
        .await
        .unwrap();
        insert_job(&pool, "J_TEST01", &emp_id).await;

        let (prtmr_id, _) = get_or_create_parttimer(&pool, "U_WORKER").await.unwrap();

        let request = JobApplicationRequest {
            amount: 12.5,
            bid_amount: Some(14.0),
            bid_reason: Some("Weekend availability".to_string()),
        };
        let application = insert_application(&pool, "J_TEST01", &prtmr_id, &request)
            .await
            .unwrap();

        assert!(application.id.starts_with("A_"));
        assert_eq!(application.status, "applied");
        assert_eq!(application.jobid, "J_TEST01");
        assert_eq!(application.prtmr_id, prtmr_id);
        assert_eq!(application.amount, 12.5);
        assert_eq!(application.bid_amount, Some(14.0));
    }

    #[tokio::test]
    async fn test_application_insert_fails_for_unknown_job() {
        let pool = test_pool().await;
        insert_user(&pool, "U_WORKER").await;
        let (prtmr_id, _) = get_or_create_parttimer(&pool, "U_WORKER").await.unwrap();

        let request = JobApplicationRequest {
            amount: 10.0,
            bid_amount: None,
            bid_reason: None,
        };

        // Foreign key on jobid rejects the insert; the failure surfaces as an
        // error, never a success response.
        let result = insert_application(&pool, "J_MISSING", &prtmr_id, &request).await;
        assert!(result.is_err());
    }
}
