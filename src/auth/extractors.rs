//! Authentication extractors for Axum

use async_trait::async_trait;
use axum::{
    extract::{Extension, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use super::models::Claims;
use crate::common::{safe_email_log, ApiError, AppState};

/// Authenticated user extractor
///
/// Decodes and verifies the bearer session token; any missing header,
/// signature, or expiry failure is a 401 without distinguishing the cases.
/// The embedded internal id is trusted directly, no database lookup.
#[derive(Debug)]
pub struct AuthedUser {
    pub user_id: String,
    pub google_id: String,
    pub email: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthedUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(state_lock): Extension<Arc<RwLock<AppState>>> =
            Extension::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::InternalServer("missing app state".to_string()))?;

        let app_state = state_lock.read().await.clone();

        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .map(|s| s.to_string());

        let token = match token {
            Some(t) => t,
            None => {
                warn!("Authentication failed: missing Authorization header");
                return Err(ApiError::Unauthorized("missing auth".into()));
            }
        };

        // Handle "Bearer <token>" format or raw token
        let bare_token = if let Some(rest) = token.strip_prefix("Bearer ") {
            rest.to_string()
        } else {
            token
        };

        let decoded = match decode::<Claims>(
            &bare_token,
            &DecodingKey::from_secret(app_state.jwt_secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        ) {
            Ok(d) => d,
            Err(e) => {
                warn!(error = %e, "Session token validation failed");
                return Err(ApiError::Unauthorized("invalid token".into()));
            }
        };

        let claims = decoded.claims;

        debug!(
            user_id = %claims.uid,
            email = %safe_email_log(&claims.email),
            "User authentication successful via extractor"
        );

        Ok(AuthedUser {
            user_id: claims.uid,
            google_id: claims.sub,
            email: claims.email,
        })
    }
}
