//! Pricing request validation.

mod validate;

pub use validate::{quick_validate, validate_request, ValidationResult};
