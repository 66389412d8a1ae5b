// src/parttimer/routes.rs

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers;

/// Create the part-timer router with all part-timer-scoped routes
pub fn parttimer_routes() -> Router {
    Router::new()
        .route("/api/parttimer/profile", get(handlers::profile_handler))
        .route(
            "/api/parttimer/as_prtmr_id",
            get(handlers::as_prtmr_id_handler),
        )
        .route(
            "/api/parttimer/check_or_create_parttimer",
            post(handlers::check_or_create_parttimer),
        )
        .route(
            "/api/parttimer/location_update",
            post(handlers::location_update),
        )
        .route("/api/parttimer/jobs", get(handlers::parttimer_jobs))
        .route("/api/parttimer/apply_job/:jobid", post(handlers::apply_job))
}
