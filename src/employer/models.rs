//! Employer data models

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Employer role-profile database model
#[derive(FromRow, Serialize, Debug)]
pub struct EmployerProfile {
    pub id: String,
    pub user_id: String,
    pub location: Option<String>,
    pub status: bool,
    pub created_at: Option<String>,
}

/// POST /api/employer/location_update request body
///
/// `status` arrives as the strings "true"/"false" (the frontend sends the
/// toggle as text); anything else reads as false.
#[derive(Deserialize)]
pub struct LocationUpdateRequest {
    pub location: String,
    pub status: String,
}

/// POST /api/employer/status_update request body
#[derive(Deserialize)]
pub struct StatusUpdateRequest {
    pub status: bool,
}

/// One row of the part-timer directory shown to employers
#[derive(FromRow, Serialize, Debug)]
pub struct AvailableParttimer {
    pub id: String,
    pub location: Option<String>,
    pub as_prtmr_id: String,
    pub name: Option<String>,
    pub email: String,
    pub picture_url: Option<String>,
}
