//! Joblist data models

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Job database model
#[derive(FromRow, Serialize, Debug)]
pub struct Job {
    pub id: String,
    pub as_emp_id: String,
    pub category: String,
    pub location: String,
    pub duration_from: String,
    pub duration_upto: String,
    pub start_of_shift: String,
    pub end_of_shift: String,
    pub break_duration: f64,
    pub salary: f64,
    pub salary_condition: String,
    pub short_desc: String,
    pub long_desc: String,
    pub status: String,
    pub created_at: Option<String>,
}

/// Compact job row for listings
#[derive(FromRow, Serialize, Debug)]
pub struct JobSummary {
    pub id: String,
    pub category: String,
    pub short_desc: String,
    pub created_at: Option<String>,
    pub status: String,
}

/// POST /api/joblist/listNewJob request body
///
/// `break_` keeps the frontend's wire name; "break" is reserved in the
/// language the original form was written against.
#[derive(Deserialize, Debug)]
pub struct JobForm {
    pub category: String,
    pub location: String,
    pub duration_from: String,
    pub duration_upto: String,
    pub start_of_shift: String,
    pub end_of_shift: String,
    #[serde(rename = "break_", default)]
    pub break_duration: f64,
    pub salary: f64,
    #[serde(default)]
    pub salary_condition: String,
    pub short_desc: String,
    pub long_desc: String,
}

/// One row of the category catalog
#[derive(FromRow, Serialize, Debug)]
pub struct JobCategory {
    pub category_id: String,
    pub category: String,
}

/// A category together with its short-description templates
#[derive(Serialize, Debug)]
pub struct CategoryWithShortDescs {
    pub category_id: String,
    pub category: String,
    pub short_descs: Vec<String>,
}

/// GET /api/joblist/get_long_desc query string
#[derive(Deserialize)]
pub struct LongDescQuery {
    pub short_desc: String,
}
