//! Job pricing: calculation, currency formatting and invoice itemization.

mod calculator;
mod currency;
mod invoice;

pub use calculator::{calculate_job_pricing, get_estimated_price, PricingCalculator};
pub use currency::{format_currency, RAND_SYMBOL};
pub use invoice::{itemize, render_itemized, LineItem, LineKind};
