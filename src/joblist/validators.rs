// src/joblist/validators.rs

use super::models::JobForm;
use crate::common::{ValidationResult, Validator};
use crate::parttimer::models::JobApplicationRequest;

// ============================================================================
// Job Form Validator
// ============================================================================

pub struct JobFormValidator;

impl Validator<JobForm> for JobFormValidator {
    fn validate(&self, data: &JobForm) -> ValidationResult {
        let mut result = ValidationResult::new();

        let required_text = [
            ("category", &data.category),
            ("location", &data.location),
            ("duration_from", &data.duration_from),
            ("duration_upto", &data.duration_upto),
            ("start_of_shift", &data.start_of_shift),
            ("end_of_shift", &data.end_of_shift),
            ("short_desc", &data.short_desc),
            ("long_desc", &data.long_desc),
        ];

        for (field, value) in required_text {
            if value.trim().is_empty() {
                result.add_error(field, "This field is required");
            }
        }

        if data.short_desc.len() > 255 {
            result.add_error("short_desc", "Short description must be less than 255 characters");
        }

        if data.long_desc.len() > 10000 {
            result.add_error(
                "long_desc",
                "Long description must be less than 10000 characters",
            );
        }

        if data.salary <= 0.0 {
            result.add_error("salary", "Salary must be greater than zero");
        }

        if data.break_duration < 0.0 {
            result.add_error("break_", "Break duration cannot be negative");
        }

        result
    }
}

// ============================================================================
// Job Application Validator
// ============================================================================

pub struct JobApplicationValidator;

impl Validator<JobApplicationRequest> for JobApplicationValidator {
    fn validate(&self, data: &JobApplicationRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.amount <= 0.0 {
            result.add_error("amount", "Amount must be greater than zero");
        }

        if let Some(bid_amount) = data.bid_amount {
            if bid_amount <= 0.0 {
                result.add_error("bid_amount", "Bid amount must be greater than zero");
            }
        }

        if let Some(bid_reason) = &data.bid_reason {
            if bid_reason.len() > 1000 {
                result.add_error("bid_reason", "Bid reason must be less than 1000 characters");
            }
        }

        result
    }
}
