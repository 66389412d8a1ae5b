//! Authentication data models

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Session token claims
///
/// `sub` carries the Google subject id and `uid` the internal user id; the
/// extractor trusts `uid` without a database lookup, so a minted token stays
/// valid for its lifetime regardless of later row state.
#[derive(Serialize, Deserialize, Debug)]
pub struct Claims {
    pub sub: String,
    pub uid: String,
    pub email: String,
    pub exp: usize,
}

/// User database model
#[derive(FromRow, Serialize, Deserialize, Debug)]
pub struct User {
    pub id: String,
    pub google_id: String,
    pub email: String,
    pub name: Option<String>,
    pub picture_url: Option<String>,
    pub email_verified: bool,
    pub created_at: Option<String>,
}

/// Google id token payload for `POST /api/auth/google`
#[derive(Deserialize)]
pub struct GoogleTokenPayload {
    pub token: String,
}
