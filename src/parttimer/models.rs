//! Part-timer data models

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Part-timer role-profile database model
#[derive(FromRow, Serialize, Debug)]
pub struct ParttimerProfile {
    pub id: String,
    pub user_id: String,
    pub location: Option<String>,
    pub created_at: Option<String>,
}

/// POST /api/parttimer/location_update request body
#[derive(Deserialize)]
pub struct LocationUpdateRequest {
    pub location: String,
}

/// POST /api/parttimer/apply_job/:jobid request body
#[derive(Deserialize, Debug)]
pub struct JobApplicationRequest {
    pub amount: f64,
    pub bid_amount: Option<f64>,
    pub bid_reason: Option<String>,
}

/// Job application database model
#[derive(FromRow, Serialize, Debug)]
pub struct JobApplication {
    pub id: String,
    pub jobid: String,
    pub prtmr_id: String,
    pub status: String,
    pub amount: f64,
    pub bid_amount: Option<f64>,
    pub bid_reason: Option<String>,
    pub created_at: Option<String>,
}
