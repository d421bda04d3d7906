//! Validation of pricing requests before they are priced.

use crate::config::LARGE_JOB_CHAIR_COUNT;
use crate::error::{ChairCareError, Result};
use crate::model::PricingRequest;

/// Outcome of checking a pricing request. Warnings never fail a request.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub passed: bool,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Record an error; the request is then rejected.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }
}

/// Validate the caller-supplied inputs of a request.
///
/// Table lookups (service type, add-on keys, travel tier) are not checked
/// here; misses there surface as configuration errors from the calculator.
pub fn validate_request(request: &PricingRequest) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if request.chair_count < 1 {
        result.add_error(format!(
            "Chair count must be at least 1, got {}",
            request.chair_count
        ));
    } else if request.chair_count > LARGE_JOB_CHAIR_COUNT {
        result.add_warning(format!(
            "Unusually large job: {} chairs",
            request.chair_count
        ));
    }

    if request.discount.is_sign_negative() && !request.discount.is_zero() {
        result.add_error(format!(
            "Discount must be non-negative, got {}",
            request.discount
        ));
    }

    if request.parts_and_materials_cost.is_sign_negative()
        && !request.parts_and_materials_cost.is_zero()
    {
        result.add_error(format!(
            "Parts and materials cost must be non-negative, got {}",
            request.parts_and_materials_cost
        ));
    }

    let unique = request.unique_add_on_keys();
    if unique.len() != request.additional_service_keys.len() {
        for key in unique {
            let count = request
                .additional_service_keys
                .iter()
                .filter(|k| k.as_str() == key)
                .count();
            if count > 1 {
                result.add_warning(format!(
                    "Additional service '{}' selected {} times; charged once",
                    key, count
                ));
            }
        }
    }

    result
}

/// Fail with a validation error if the request has any errors.
pub fn quick_validate(request: &PricingRequest) -> Result<()> {
    let result = validate_request(request);

    for warning in &result.warnings {
        tracing::warn!("{}", warning);
    }

    if !result.passed {
        return Err(ChairCareError::Validation {
            message: result.errors.join("; "),
        });
    }

    Ok(())
}
