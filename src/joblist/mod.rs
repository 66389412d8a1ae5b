//! # Joblist Module
//!
//! Job postings and the category catalog:
//! - Employer-scoped job creation and job-by-id reads
//! - The read-only category / short-description / long-description catalog
//!   backing the job form

pub mod handlers;
pub mod models;
pub mod routes;
pub mod validators;

#[cfg(test)]
mod tests;

pub use routes::joblist_routes;
