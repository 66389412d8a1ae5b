//! # Part-timer Module
//!
//! Role-scoped endpoints for users acting as part-timers:
//! - Lazy part-timer-profile creation (check_or_create)
//! - Profile and location reads/updates
//! - Job browsing and job applications

pub mod handlers;
pub mod models;
pub mod routes;

#[cfg(test)]
mod tests;

pub use routes::parttimer_routes;
