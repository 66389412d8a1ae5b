//! Employer handlers

use axum::extract::{Extension, Json};
use sqlx::SqlitePool;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info};

use super::models::{AvailableParttimer, EmployerProfile, LocationUpdateRequest, StatusUpdateRequest};
use crate::auth::{AuthedUser, User};
use crate::common::{generate_employer_id, ApiError, AppState};
use crate::joblist::models::JobSummary;

/// Look up the caller's employer role id.
///
/// `Ok(None)` is definite absence (no profile row); store failures propagate
/// as `Err` instead of being folded into the empty case.
pub(crate) async fn resolve_employer_id(
    pool: &SqlitePool,
    user_id: &str,
) -> Result<Option<String>, ApiError> {
    sqlx::query_scalar("SELECT id FROM employer_profiles WHERE user_id = ?")
        .bind(user_id)
        .fetch_optional(pool)
        .await
        .map_err(ApiError::DatabaseError)
}

/// Create the caller's employer profile if it does not exist yet.
///
/// Returns the role id and whether this call created it. The conditional
/// insert leans on the `user_id` uniqueness constraint, so two racing calls
/// for the same user cannot both insert; the loser falls through to the
/// follow-up select.
pub(crate) async fn get_or_create_employer(
    pool: &SqlitePool,
    user_id: &str,
) -> Result<(String, bool), ApiError> {
    let inserted: Option<String> = sqlx::query_scalar(
        r#"
        INSERT INTO employer_profiles (id, user_id)
        VALUES (?, ?)
        ON CONFLICT(user_id) DO NOTHING
        RETURNING id
        "#,
    )
    .bind(generate_employer_id())
    .bind(user_id)
    .fetch_optional(pool)
    .await
    .map_err(ApiError::DatabaseError)?;

    if let Some(id) = inserted {
        return Ok((id, true));
    }

    let existing: String = sqlx::query_scalar("SELECT id FROM employer_profiles WHERE user_id = ?")
        .bind(user_id)
        .fetch_one(pool)
        .await
        .map_err(ApiError::DatabaseError)?;

    Ok((existing, false))
}

async fn fetch_employer_profile(
    pool: &SqlitePool,
    user_id: &str,
) -> Result<Option<EmployerProfile>, ApiError> {
    sqlx::query_as::<_, EmployerProfile>("SELECT * FROM employer_profiles WHERE user_id = ?")
        .bind(user_id)
        .fetch_optional(pool)
        .await
        .map_err(ApiError::DatabaseError)
}

/// GET /api/employer/profile - User identity plus employer role attributes
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

    let profile = fetch_employer_profile(&state.db, &authed.user_id).await?;

    let response = serde_json::json!({
        "name": user.name,
        "picture_url": user.picture_url,
        "email": user.email,
        "as_emp_id": profile.as_ref().map(|p| p.id.clone()),
        "location": profile.as_ref().and_then(|p| p.location.clone()),
        "status": profile.as_ref().map(|p| p.status),
    });

    Ok(Json(response))
}

/// GET /api/employer/as_emp_id
pub async fn as_emp_id_handler(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
) -> Result<Json<serde_json::Value>, ApiError> {
    let state = state_lock.read().await.clone();

    let as_emp_id = resolve_employer_id(&state.db, &authed.user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Employer ID not found".to_string()))?;

    Ok(Json(serde_json::json!({ "as_emp_id": as_emp_id })))
}

/// GET /api/employer/location
pub async fn location_handler(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
) -> Result<Json<serde_json::Value>, ApiError> {
    let state = state_lock.read().await.clone();

    let location = fetch_employer_profile(&state.db, &authed.user_id)
        .await?
        .and_then(|p| p.location)
        .ok_or_else(|| ApiError::NotFound("Employer location not found".to_string()))?;

    Ok(Json(serde_json::json!({ "location": location })))
}

/// GET /api/employer/status
///
/// `false` is a legitimate stored value, so absence means no profile row,
/// never a falsy one.
pub async fn status_handler(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
) -> Result<Json<serde_json::Value>, ApiError> {
    let state = state_lock.read().await.clone();

    let profile = fetch_employer_profile(&state.db, &authed.user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Employer status not found".to_string()))?;

    Ok(Json(serde_json::json!({ "status": profile.status })))
}

/// POST /api/employer/check_or_create_employer
pub async fn check_or_create_employer(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
) -> Result<Json<serde_json::Value>, ApiError> {
    let state = state_lock.read().await.clone();

    let (as_emp_id, created) = get_or_create_employer(&state.db, &authed.user_id).await?;

    if created {
        info!(user_id = %authed.user_id, as_emp_id = %as_emp_id, "Created employer profile");
    }

    Ok(Json(serde_json::json!({
        "status": if created { "created" } else { "exists" },
        "as_emp_id": as_emp_id,
    })))
}

/// POST /api/employer/location_update
pub async fn location_update(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Json(request): Json<LocationUpdateRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let state = state_lock.read().await.clone();

    let status_value = request.status.to_lowercase() == "true";

    let result = sqlx::query("UPDATE employer_profiles SET location = ?, status = ? WHERE user_id = ?")
        .bind(&request.location)
        .bind(status_value)
        .bind(&authed.user_id)
        .execute(&state.db)
        .await
        .map_err(|e| {
            error!(error = %e, user_id = %authed.user_id, "Database error updating employer location");
            ApiError::DatabaseError(e)
        })?;

    if result.rows_affected() == 0 {
        return Err(ApiError::NotFound("Employer profile not found".to_string()));
    }

    Ok(Json(serde_json::json!({
        "status": "updated",
        "location": request.location,
        "status_value": status_value,
    })))
}

/// POST /api/employer/status_update
pub async fn status_update(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Json(request): Json<StatusUpdateRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let state = state_lock.read().await.clone();

    let result = sqlx::query("UPDATE employer_profiles SET status = ? WHERE user_id = ?")
        .bind(request.status)
        .bind(&authed.user_id)
        .execute(&state.db)
        .await
        .map_err(|e| {
            error!(error = %e, user_id = %authed.user_id, "Database error updating employer status");
            ApiError::DatabaseError(e)
        })?;

    if result.rows_affected() == 0 {
        return Err(ApiError::NotFound("Employer profile not found".to_string()));
    }

    Ok(Json(serde_json::json!({
        "message": "Status updated",
        "status": request.status,
    })))
}

/// GET /api/employer/jobs - Jobs posted by the caller's employer profile
pub async fn employer_jobs(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
) -> Result<Json<serde_json::Value>, ApiError> {
    let state = state_lock.read().await.clone();

    let as_emp_id = resolve_employer_id(&state.db, &authed.user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Employer ID not found".to_string()))?;

    let jobs = sqlx::query_as::<_, JobSummary>(
        r#"
        SELECT id, category, short_desc, created_at, status
        FROM jobs
        WHERE as_emp_id = ?
        ORDER BY created_at DESC
        "#,
    )
    .bind(&as_emp_id)
    .fetch_all(&state.db)
    .await
    .map_err(ApiError::DatabaseError)?;

    Ok(Json(serde_json::json!({ "jobs": jobs })))
}

/// GET /api/employer/available-parttimers - Part-timer directory
pub async fn available_parttimers(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    _authed: AuthedUser,
) -> Result<Json<serde_json::Value>, ApiError> {
    let state = state_lock.read().await.clone();

    let parttimers = sqlx::query_as::<_, AvailableParttimer>(
        r#"
        SELECT p.user_id AS id, p.location, p.id AS as_prtmr_id,
               u.name, u.email, u.picture_url
        FROM parttimer_profiles p
        JOIN users u ON u.id = p.user_id
        ORDER BY u.name
        "#,
    )
    .fetch_all(&state.db)
    .await
    .map_err(|e| {
        error!(error = %e, "Database error loading part-timer directory");
        ApiError::DatabaseError(e)
    })?;

    Ok(Json(serde_json::json!({ "as_parttimer": parttimers })))
}
