// src/employer/routes.rs

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers;

/// Create the employer router with all employer-scoped routes
pub fn employer_routes() -> Router {
    Router::new()
        .route("/api/employer/profile", get(handlers::profile_handler))
        .route("/api/employer/as_emp_id", get(handlers::as_emp_id_handler))
        .route("/api/employer/location", get(handlers::location_handler))
        .route("/api/employer/status", get(handlers::status_handler))
        .route(
            "/api/employer/check_or_create_employer",
            post(handlers::check_or_create_employer),
        )
        .route(
            "/api/employer/location_update",
            post(handlers::location_update),
        )
        .route("/api/employer/status_update", post(handlers::status_update))
        .route("/api/employer/jobs", get(handlers::employer_jobs))
        .route(
            "/api/employer/available-parttimers",
            get(handlers::available_parttimers),
        )
}
