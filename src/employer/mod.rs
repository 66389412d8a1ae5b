//! # Employer Module
//!
//! Role-scoped endpoints for users acting as employers:
//! - Lazy employer-profile creation (check_or_create)
//! - Profile, location and hiring-status reads/updates
//! - The employer's own job listings and the part-timer directory

pub mod handlers;
pub mod models;
pub mod routes;


pub use routes::employer_routes;
