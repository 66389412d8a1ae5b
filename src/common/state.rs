// Application state shared across all modules

use sqlx::SqlitePool;
use std::sync::Arc;

use crate::services::GoogleVerifier;

/// Application state containing the database pool, the identity verifier,
/// and the session-signing secret.
///
/// Constructed once in `main` and injected as an axum `Extension`; nothing
/// mutates it after startup.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub jwt_secret: String,
    pub verifier: Arc<GoogleVerifier>,
}
