//! Part-timer handlers

use axum::extract::{Extension, Json, Path};
use sqlx::SqlitePool;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info, warn};

use super::models::{
    JobApplication, JobApplicationRequest, LocationUpdateRequest, ParttimerProfile,
};
use crate::auth::{AuthedUser, User};
use crate::common::{generate_application_id, generate_parttimer_id, ApiError, AppState, Validator};
use crate::joblist::models::JobSummary;
use crate::joblist::validators::JobApplicationValidator;

/// Look up the caller's part-timer role id.
///
/// `Ok(None)` is definite absence; store failures propagate as `Err`.
pub(crate) async fn resolve_parttimer_id(
    pool: &SqlitePool,
    user_id: &str,
) -> Result<Option<String>, ApiError> {
    sqlx::query_scalar("SELECT id FROM parttimer_profiles WHERE user_id = ?")
        .bind(user_id)
        .fetch_optional(pool)
        .await
        .map_err(ApiError::DatabaseError)
}

/// Create the caller's part-timer profile if it does not exist yet.
///
/// Same conditional-insert shape as the employer side: the `user_id`
/// uniqueness constraint arbitrates racing calls.
pub(crate) async fn get_or_create_parttimer(
    pool: &SqlitePool,
    user_id: &str,
) -> Result<(String, bool), ApiError> {
    let inserted: Option<String> = sqlx::query_scalar(
        r#"
        INSERT INTO parttimer_profiles (id, user_id)
        VALUES (?, ?)
        ON CONFLICT(user_id) DO NOTHING
        RETURNING id
        "#,
    )
    .bind(generate_parttimer_id())
    .bind(user_id)
    .fetch_optional(pool)
    .await
    .map_err(ApiError::DatabaseError)?;

    if let Some(id) = inserted {
        return Ok((id, true));
    }

    let existing: String =
        sqlx::query_scalar("SELECT id FROM parttimer_profiles WHERE user_id = ?")
            .bind(user_id)
            .fetch_one(pool)
            .await
            .map_err(ApiError::DatabaseError)?;

    Ok((existing, false))
}

/// Persist a job application with the initial "applied" status.
pub(crate) async fn insert_application(
    pool: &SqlitePool,
    jobid: &str,
    prtmr_id: &str,
    request: &JobApplicationRequest,
) -> Result<JobApplication, ApiError> {
    sqlx::query_as::<_, JobApplication>(
        r#"
        INSERT INTO job_applications (id, jobid, prtmr_id, status, amount, bid_amount, bid_reason)
        VALUES (?, ?, ?, 'applied', ?, ?, ?)
        RETURNING *
        "#,
    )
    .bind(generate_application_id())
    .bind(jobid)
    .bind(prtmr_id)
    .bind(request.amount)
    .bind(request.bid_amount)
    .bind(request.bid_reason.as_deref())
    .fetch_one(pool)
    .await
    .map_err(|e| {
        error!(error = %e, jobid = %jobid, prtmr_id = %prtmr_id, "Database error inserting job application");
        ApiError::DatabaseError(e)
    })
}

/// GET /api/parttimer/profile - User identity plus part-timer role attributes
pub async fn profile_handler(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
) -> Result<Json<serde_json::Value>, ApiError> {
    let state = state_lock.read().await.clone();

    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
        .bind(&authed.user_id)
        .fetch_optional(&state.db)
        .await
        .map_err(ApiError::DatabaseError)?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    let profile = sqlx::query_as::<_, ParttimerProfile>(
        "SELECT * FROM parttimer_profiles WHERE user_id = ?",
    )
    .bind(&authed.user_id)
    .fetch_optional(&state.db)
    .await
    .map_err(ApiError::DatabaseError)?;

    let response = serde_json::json!({
        "name": user.name,
        "picture_url": user.picture_url,
        "email": user.email,
        "as_prtmr_id": profile.as_ref().map(|p| p.id.clone()),
        "location": profile.as_ref().and_then(|p| p.location.clone()),
    });

    Ok(Json(response))
}

/// GET /api/parttimer/as_prtmr_id
pub async fn as_prtmr_id_handler(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
) -> Result<Json<serde_json::Value>, ApiError> {
    let state = state_lock.read().await.clone();

    let as_prtmr_id = resolve_parttimer_id(&state.db, &authed.user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Part-Timer ID not found".to_string()))?;

    Ok(Json(serde_json::json!({ "as_prtmr_id": as_prtmr_id })))
}

/// POST /api/parttimer/check_or_create_parttimer
pub async fn check_or_create_parttimer(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
) -> Result<Json<serde_json::Value>, ApiError> {
    let state = state_lock.read().await.clone();

    let (as_prtmr_id, created) = get_or_create_parttimer(&state.db, &authed.user_id).await?;

    if created {
        info!(user_id = %authed.user_id, as_prtmr_id = %as_prtmr_id, "Created part-timer profile");
    }

    Ok(Json(serde_json::json!({
        "status": if created { "created" } else { "exists" },
        "as_prtmr_id": as_prtmr_id,
    })))
}

/// POST /api/parttimer/location_update
pub async fn location_update(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Json(request): Json<LocationUpdateRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let state = state_lock.read().await.clone();

    let result = sqlx::query("UPDATE parttimer_profiles SET location = ? WHERE user_id = ?")
        .bind(&request.location)
        .bind(&authed.user_id)
        .execute(&state.db)
        .await
        .map_err(|e| {
            error!(error = %e, user_id = %authed.user_id, "Database error updating part-timer location");
            ApiError::DatabaseError(e)
        })?;

    if result.rows_affected() == 0 {
        return Err(ApiError::NotFound(
            "Part-timer profile not found".to_string(),
        ));
    }

    Ok(Json(serde_json::json!({
        "status": "updated",
        "location": request.location,
    })))
}

/// GET /api/parttimer/jobs - Browse every listed job
pub async fn parttimer_jobs(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    _authed: AuthedUser,
) -> Result<Json<serde_json::Value>, ApiError> {
    let state = state_lock.read().await.clone();

    let jobs = sqlx::query_as::<_, JobSummary>(
        r#"
        SELECT id, category, short_desc, created_at, status
        FROM jobs
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(&state.db)
    .await
    .map_err(ApiError::DatabaseError)?;

    Ok(Json(serde_json::json!({ "jobs": jobs })))
}

/// POST /api/parttimer/apply_job/:jobid - Apply to a job
pub async fn apply_job(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Path(jobid): Path<String>,
    Json(request): Json<JobApplicationRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let state = state_lock.read().await.clone();

    let validation_result = JobApplicationValidator.validate(&request);
    if !validation_result.is_valid {
        warn!(
            jobid = %jobid,
            errors = ?validation_result.errors,
            "Job application validation failed"
        );
        return Err(ApiError::from(validation_result));
    }

    let as_prtmr_id = resolve_parttimer_id(&state.db, &authed.user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Part-Timer ID not found".to_string()))?;

    let job_exists: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM jobs WHERE id = ?")
        .bind(&jobid)
        .fetch_one(&state.db)
        .await
        .map_err(ApiError::DatabaseError)?;

    if job_exists == 0 {
        return Err(ApiError::NotFound("Job not found".to_string()));
    }

    let application = insert_application(&state.db, &jobid, &as_prtmr_id, &request).await?;

    info!(
        jobid = %jobid,
        application_id = %application.id,
        as_prtmr_id = %as_prtmr_id,
        "Job application submitted"
    );

    Ok(Json(serde_json::json!({
        "message": "Application submitted successfully",
        "application": application,
    })))
}
