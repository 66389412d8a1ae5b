//! Authentication handlers

use axum::extract::{Extension, Json};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use sqlx::SqlitePool;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

use super::models::{Claims, GoogleTokenPayload};
use crate::common::{generate_user_id, safe_email_log, ApiError, AppState};
use crate::services::{GoogleClaims, GoogleVerifyError};

/// POST /api/auth/google
/// Authenticates a user via a Google id token
///
/// # Request Body
/// ```json
/// {
///   "token": "<google id token>"
/// }
/// ```
///
/// # Response
/// ```json
/// {
///   "status": "success",
///   "user": { ... },
///   "token": "<jwt token>"
/// }
/// ```
pub async fn google_auth(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Json(payload): Json<GoogleTokenPayload>,
) -> Result<Json<serde_json::Value>, ApiError> {
    info!("Received Google auth request");
    let state = state_lock.read().await.clone();

    let claims = state
        .verifier
        .verify_id_token(&payload.token)
        .await
        .map_err(|e| match e {
            GoogleVerifyError::Unreachable(msg) => {
                error!(error = %msg, "Google tokeninfo endpoint unreachable");
                ApiError::InternalServer("google token validation service unavailable".to_string())
            }
            other => {
                warn!(error = %other, "Google id token verification failed");
                ApiError::BadRequest(other.to_string())
            }
        })?;

    debug!(
        email = %safe_email_log(&claims.email),
        google_id = %claims.sub,
        "Google token verification successful, upserting user"
    );

    let user_id = upsert_user(&state.db, &claims).await?;

    let token = mint_session_token(&state.jwt_secret, &claims.sub, &user_id, &claims.email)?;

    info!(
        user_id = %user_id,
        email = %safe_email_log(&claims.email),
        "User authentication successful via Google"
    );

    let resp = serde_json::json!({
        "status": "success",
        "user": {
            "google_id": claims.sub,
            "email": claims.email,
            "name": claims.name,
            "picture_url": claims.picture,
            "email_verified": claims.email_verified,
        },
        "token": token,
    });

    Ok(Json(resp))
}

// ---- Helper Functions ----

/// Create or refresh the user row for a verified Google identity and return
/// the internal user id.
///
/// One round trip for both branches: the `google_id` uniqueness constraint
/// arbitrates, first login inserts, repeat logins refresh the mutable
/// profile fields. Exactly one row ever exists per google_id.
pub(crate) async fn upsert_user(
    pool: &SqlitePool,
    claims: &GoogleClaims,
) -> Result<String, ApiError> {
    sqlx::query_scalar::<_, String>(
        r#"
        INSERT INTO users (id, google_id, email, name, picture_url, email_verified)
        VALUES (?, ?, ?, ?, ?, ?)
        ON CONFLICT(google_id) DO UPDATE SET
            email = excluded.email,
            name = excluded.name,
            picture_url = excluded.picture_url,
            email_verified = excluded.email_verified
        RETURNING id
        "#,
    )
    .bind(generate_user_id())
    .bind(&claims.sub)
    .bind(&claims.email)
    .bind(claims.name.as_deref())
    .bind(claims.picture.as_deref())
    .bind(claims.email_verified)
    .fetch_one(pool)
    .await
    .map_err(|e| {
        error!(
            error = %e,
            google_id = %claims.sub,
            "Database error upserting user during Google auth"
        );
        ApiError::DatabaseError(e)
    })
}

/// Mint a session token embedding the caller's identity, valid for 24 hours.
pub(crate) fn mint_session_token(
    secret: &str,
    google_id: &str,
    user_id: &str,
    email: &str,
) -> Result<String, ApiError> {
    let exp = (Utc::now() + Duration::hours(24)).timestamp() as usize;
    let claims = Claims {
        sub: google_id.to_string(),
        uid: user_id.to_string(),
        email: email.to_string(),
        exp,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| {
        error!(error = %e, user_id = %user_id, "JWT encoding error during authentication");
        ApiError::InternalServer("jwt error".to_string())
    })
}
