// src/services/mod.rs
//
// Clients for external collaborators, constructed once in main and
// injected through AppState

pub mod google;

// Re-export commonly used types for convenience
pub use google::{GoogleClaims, GoogleVerifier, GoogleVerifyError};
