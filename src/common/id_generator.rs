// src/common/id_generator.rs
//! Crockford Base32 ID Generator
//!
//! Generates human-readable, prefixed IDs using Crockford Base32 encoding.
//! Format: PREFIX_XXXXXX (e.g., J_K7NP3X for jobs)
//!
//! Benefits:
//! - No ambiguous characters (excludes I, L, O, U)
//! - Case-insensitive
//! - ~1 billion combinations per entity type (32^6)
//! - Easy to read, type, and communicate verbally

use rand::Rng;

/// Crockford Base32 alphabet (excludes I, L, O, U to avoid confusion)
const CROCKFORD_ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Entity type prefixes for ID generation
#[derive(Debug, Clone, Copy)]
pub enum EntityPrefix {
    /// User account (U_)
    User,
    /// Employer role profile (E_)
    Employer,
    /// Part-timer role profile (P_)
    PartTimer,
    /// Job posting (J_)
    Job,
    /// Job application (A_)
    Application,
    /// Job category (C_)
    Category,
    /// Category description template (T_)
    Template,
}

impl EntityPrefix {
    /// Get the string prefix for this entity type
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityPrefix::User => "U",
            EntityPrefix::Employer => "E",
            EntityPrefix::PartTimer => "P",
            EntityPrefix::Job => "J",
            EntityPrefix::Application => "A",
            EntityPrefix::Category => "C",
            EntityPrefix::Template => "T",
        }
    }
}

/// Generate a random Crockford Base32 string of specified length
fn generate_crockford_string(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| {
            let idx = rng.gen_range(0..32);
            CROCKFORD_ALPHABET[idx] as char
        })
        .collect()
}

/// Generate a prefixed ID in the format "PREFIX_XXXXXX" (e.g., "J_K7NP3X")
pub fn generate_id(prefix: EntityPrefix) -> String {
    format!("{}_{}", prefix.as_str(), generate_crockford_string(6))
}

// ============================================================================
// Convenience functions for each entity type
// ============================================================================

/// Generate a User ID (U_XXXXXX)
pub fn generate_user_id() -> String {
    generate_id(EntityPrefix::User)
}

/// Generate an Employer profile ID (E_XXXXXX)
pub fn generate_employer_id() -> String {
    generate_id(EntityPrefix::Employer)
}

/// Generate a Part-timer profile ID (P_XXXXXX)
pub fn generate_parttimer_id() -> String {
    generate_id(EntityPrefix::PartTimer)
}

/// Generate a Job ID (J_XXXXXX)
pub fn generate_job_id() -> String {
    generate_id(EntityPrefix::Job)
}

/// Generate an Application ID (A_XXXXXX)
pub fn generate_application_id() -> String {
    generate_id(EntityPrefix::Application)
}

/// Generate a Category ID (C_XXXXXX)
pub fn generate_category_id() -> String {
    generate_id(EntityPrefix::Category)
}

/// Generate a Template ID (T_XXXXXX)
pub fn generate_template_id() -> String {
    generate_id(EntityPrefix::Template)
}
