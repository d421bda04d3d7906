//! chaircare-rs - Job pricing and chair QR identity codec for ChairCare.
//!
//! Two independent, pure utilities used by the job, invoice and chair
//! tracking flows:
//!
//! - the pricing calculator turns a [`PricingRequest`] into an itemized,
//!   VAT-inclusive [`PriceBreakdown`] using static [`PricingTables`];
//! - the QR codec builds and reads the `CHAIRCARE:<id>:<number>` payload
//!   printed on each tracked chair.
//!
//! # Example
//!
//! ```
//! use chaircare_rs::{calculate_job_pricing, format_currency, qr, PricingRequest, ServiceType};
//!
//! let request = PricingRequest::new(ServiceType::Cleaning, 3);
//! let breakdown = calculate_job_pricing(&request).unwrap();
//! println!("{}", format_currency(breakdown.total));
//!
//! let payload = qr::encode("k9XpQ2", "CH-0042");
//! assert_eq!(qr::decode(&payload).id(), "k9XpQ2");
//! ```

pub mod config;
pub mod error;
pub mod model;
pub mod pricing;
pub mod qr;
pub mod validation;

// Re-exports for convenience
pub use config::{AddOn, PricingTables, ServiceRate, TAX_RATE, URGENCY_FEE};
pub use error::{ChairCareError, ErrorCode, Result};
pub use model::{
    AdditionalServiceLine, PriceBreakdown, PricingRequest, ServiceType, TravelTier, Urgency,
};
pub use pricing::{
    calculate_job_pricing, format_currency, get_estimated_price, itemize, render_itemized,
    PricingCalculator,
};
pub use qr::{ChairIdentity, DecodedChair, PayloadFormat};
pub use validation::{validate_request, ValidationResult};

/// Load tables from `path` if given, otherwise use the standard tables.
pub fn load_tables(path: Option<&std::path::Path>) -> Result<PricingTables> {
    match path {
        Some(path) => PricingTables::from_json_file(path),
        None => Ok(PricingTables::default()),
    }
}
