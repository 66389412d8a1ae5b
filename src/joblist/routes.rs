// src/joblist/routes.rs

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers;

/// Create the joblist router with job posting and catalog routes
///
/// NOTE: The static catalog routes must not be shadowed by `/:job_id`; the
/// router matches static segments first, so both can coexist under the
/// same prefix.
pub fn joblist_routes() -> Router {
    Router::new()
        .route("/api/joblist/listNewJob", post(handlers::list_new_job))
        // Catalog routes
        .route(
            "/api/joblist/get_job_category",
            get(handlers::get_job_category),
        )
        .route(
            "/api/joblist/get_short_desc/:category_id",
            get(handlers::get_short_desc),
        )
        .route(
            "/api/joblist/get_categories_with_short_descs",
            get(handlers::get_categories_with_short_descs),
        )
        .route("/api/joblist/get_long_desc", get(handlers::get_long_desc))
        // Parameterized route last
        .route("/api/joblist/:job_id", get(handlers::get_job_by_id))
}
