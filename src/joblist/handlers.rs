//! Joblist handlers

use axum::extract::{Extension, Json, Path, Query};
use sqlx::SqlitePool;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info, warn};

use super::models::*;
use super::validators::JobFormValidator;
use crate::auth::AuthedUser;
use crate::common::{generate_job_id, ApiError, AppState, Validator};
use crate::employer::handlers::resolve_employer_id;

/// Persist a new job for an employer; the row is created with the
/// "active" lifecycle status and returned without a re-read.
pub(crate) async fn insert_job(
    pool: &SqlitePool,
    as_emp_id: &str,
    form: &JobForm,
) -> Result<Job, ApiError> {
    sqlx::query_as::<_, Job>(
        r#"
        INSERT INTO jobs (id, as_emp_id, category, location, duration_from, duration_upto,
                          start_of_shift, end_of_shift, break_duration, salary,
                          salary_condition, short_desc, long_desc, status)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, 'active')
        RETURNING *
        "#,
    )
    .bind(generate_job_id())
    .bind(as_emp_id)
    .bind(&form.category)
    .bind(&form.location)
    .bind(&form.duration_from)
    .bind(&form.duration_upto)
    .bind(&form.start_of_shift)
    .bind(&form.end_of_shift)
    .bind(form.break_duration)
    .bind(form.salary)
    .bind(&form.salary_condition)
    .bind(&form.short_desc)
    .bind(&form.long_desc)
    .fetch_one(pool)
    .await
    .map_err(|e| {
        error!(error = %e, as_emp_id = %as_emp_id, "Database error inserting job");
        ApiError::DatabaseError(e)
    })
}

/// Fetch a job only if it belongs to the given employer.
pub(crate) async fn fetch_job_for_employer(
    pool: &SqlitePool,
    job_id: &str,
    as_emp_id: &str,
) -> Result<Option<Job>, ApiError> {
    sqlx::query_as::<_, Job>("SELECT * FROM jobs WHERE id = ? AND as_emp_id = ?")
        .bind(job_id)
        .bind(as_emp_id)
        .fetch_optional(pool)
        .await
        .map_err(ApiError::DatabaseError)
}

/// POST /api/joblist/listNewJob - Create a job posting
pub async fn list_new_job(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Json(form): Json<JobForm>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let state = state_lock.read().await.clone();

    let validation_result = JobFormValidator.validate(&form);
    if !validation_result.is_valid {
        warn!(
            user_id = %authed.user_id,
            errors = ?validation_result.errors,
            "Job form validation failed"
        );
        return Err(ApiError::from(validation_result));
    }

    // A caller with no employer profile cannot own a job; reject instead of
    // inserting a dangling owner reference.
    let as_emp_id = resolve_employer_id(&state.db, &authed.user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Employer ID not found".to_string()))?;

    let job = insert_job(&state.db, &as_emp_id, &form).await?;

    info!(job_id = %job.id, as_emp_id = %as_emp_id, "Job posting created");

    Ok(Json(serde_json::json!({
        "status": "success",
        "message": "Job saved successfully",
        "job": job,
    })))
}

/// GET /api/joblist/get_job_category - Category catalog
pub async fn get_job_category(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let state = state_lock.read().await.clone();

    let categories = sqlx::query_as::<_, JobCategory>(
        "SELECT id AS category_id, category FROM job_categories ORDER BY category",
    )
    .fetch_all(&state.db)
    .await
    .map_err(ApiError::DatabaseError)?;

    Ok(Json(serde_json::json!({ "categories": categories })))
}

/// GET /api/joblist/get_short_desc/:category_id - Templates for one category
pub async fn get_short_desc(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Path(category_id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let state = state_lock.read().await.clone();

    let short_descs: Vec<String> = sqlx::query_scalar(
        "SELECT short_desc FROM job_templates WHERE category_id = ? ORDER BY short_desc",
    )
    .bind(&category_id)
    .fetch_all(&state.db)
    .await
    .map_err(ApiError::DatabaseError)?;

    Ok(Json(serde_json::json!({ "short_descs": short_descs })))
}

/// GET /api/joblist/get_categories_with_short_descs - Full catalog in one call
pub async fn get_categories_with_short_descs(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let state = state_lock.read().await.clone();

    let rows: Vec<(String, String, Option<String>)> = sqlx::query_as(
        r#"
        SELECT c.id, c.category, t.short_desc
        FROM job_categories c
        LEFT JOIN job_templates t ON t.category_id = c.id
        ORDER BY c.category, t.short_desc
        "#,
    )
    .fetch_all(&state.db)
    .await
    .map_err(ApiError::DatabaseError)?;

    // Rows arrive sorted by category, so grouping is a single pass
    let mut categories: Vec<CategoryWithShortDescs> = Vec::new();
    for (category_id, category, short_desc) in rows {
        match categories.last_mut() {
            Some(last) if last.category_id == category_id => {
                if let Some(desc) = short_desc {
                    last.short_descs.push(desc);
                }
            }
            _ => categories.push(CategoryWithShortDescs {
                category_id,
                category,
                short_descs: short_desc.into_iter().collect(),
            }),
        }
    }

    Ok(Json(serde_json::json!({ "categories": categories })))
}

/// GET /api/joblist/get_long_desc?short_desc= - Long description lookup
pub async fn get_long_desc(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Query(query): Query<LongDescQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let state = state_lock.read().await.clone();

    let long_desc: String =
        sqlx::query_scalar("SELECT long_desc FROM job_templates WHERE short_desc = ? LIMIT 1")
            .bind(&query.short_desc)
            .fetch_optional(&state.db)
            .await
            .map_err(ApiError::DatabaseError)?
            .ok_or_else(|| ApiError::NotFound("Long description not found".to_string()))?;

    Ok(Json(serde_json::json!({ "long_desc": long_desc })))
}

/// GET /api/joblist/:job_id - Job details, gated by employer ownership
///
/// A caller with no employer profile is refused outright; a job owned by a
/// different employer is indistinguishable from a missing one.
pub async fn get_job_by_id(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Path(job_id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let state = state_lock.read().await.clone();

    let as_emp_id = resolve_employer_id(&state.db, &authed.user_id)
        .await?
        .ok_or_else(|| ApiError::Forbidden("Access denied".to_string()))?;

    let job = fetch_job_for_employer(&state.db, &job_id, &as_emp_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Job not found".to_string()))?;

    Ok(Json(serde_json::json!({ "job": job })))
}
