//! Data model for pricing requests and their itemized results.

mod breakdown;
mod request;
mod service;

pub use breakdown::{AdditionalServiceLine, PriceBreakdown};
pub(crate) use breakdown::positive;
pub use request::PricingRequest;
pub use service::{ServiceType, TravelTier, Urgency};
