//! Job price calculation from the fee tables.

use crate::config::PricingTables;
use crate::error::{ChairCareError, Result};
use crate::model::{positive, AdditionalServiceLine, PriceBreakdown, PricingRequest, ServiceType};
use crate::validation::quick_validate;
use rust_decimal::Decimal;
use tracing::{debug, warn};

/// Prices requests against a set of fee tables.
#[derive(Debug, Clone, Copy)]
pub struct PricingCalculator<'a> {
    tables: &'a PricingTables,
}

impl Default for PricingCalculator<'static> {
    fn default() -> Self {
        Self::new(PricingTables::standard())
    }
}

impl<'a> PricingCalculator<'a> {
    pub fn new(tables: &'a PricingTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &'a PricingTables {
        self.tables
    }

    /// Compute the itemized, tax-inclusive price of a job.
    ///
    /// The discount is applied unclamped: a discount larger than every other
    /// component yields a negative subtotal, tax and total.
    pub fn calculate(&self, request: &PricingRequest) -> Result<PriceBreakdown> {
        quick_validate(request)?;

        let rate = self.tables.service_rate(request.service_type)?;
        let chair_count = request.chair_count;

        let mut additional_services = Vec::new();
        let mut additional_services_total = Decimal::ZERO;
        for key in request.unique_add_on_keys() {
            let add_on = self.tables.add_on(key)?;
            let quantity = add_on.quantity_for(chair_count);
            let line_total = checked(
                add_on.price.checked_mul(Decimal::from(quantity)),
                "additional services",
            )?;
            additional_services_total = checked(
                additional_services_total.checked_add(line_total),
                "additional services",
            )?;
            additional_services.push(AdditionalServiceLine {
                name: add_on.name.clone(),
                unit_price: add_on.price,
                quantity,
            });
        }

        let travel_fee = self.tables.travel_fee(request.travel_tier)?;
        let urgency_fee = if request.urgency.is_urgent() {
            self.tables.urgency_fee
        } else {
            Decimal::ZERO
        };

        let chairs_total = checked(
            rate.price_per_chair.checked_mul(Decimal::from(chair_count)),
            "chairs total",
        )?;
        let subtotal = [
            chairs_total,
            additional_services_total,
            travel_fee,
            urgency_fee,
            request.parts_and_materials_cost,
        ]
        .into_iter()
        .try_fold(rate.base_service_fee, |sum, amount| sum.checked_add(amount))
        .and_then(|sum| sum.checked_sub(request.discount));
        let subtotal = checked(subtotal, "subtotal")?;
        let (tax, total) = self.apply_tax(subtotal)?;

        debug!(
            "Priced {} job: {} chair(s), {} add-on(s), subtotal {}, total {}",
            request.service_type,
            chair_count,
            additional_services.len(),
            subtotal,
            total
        );
        if subtotal < Decimal::ZERO {
            warn!(
                "Discount {} exceeds job charges; subtotal is {}",
                request.discount, subtotal
            );
        }

        Ok(PriceBreakdown {
            base_service_fee: rate.base_service_fee,
            price_per_chair: rate.price_per_chair,
            chair_count,
            additional_services,
            parts_and_materials: positive(request.parts_and_materials_cost),
            travel_fee: positive(travel_fee),
            urgency_fee: positive(urgency_fee),
            discount: positive(request.discount),
            subtotal,
            tax,
            total,
        })
    }

    /// Quick tax-inclusive estimate without add-ons, travel or urgency.
    pub fn estimate(&self, service_type: ServiceType, chair_count: u32) -> Result<Decimal> {
        quick_validate(&PricingRequest::new(service_type, chair_count))?;
        let rate = self.tables.service_rate(service_type)?;
        let subtotal = rate
            .price_per_chair
            .checked_mul(Decimal::from(chair_count))
            .and_then(|chairs| chairs.checked_add(rate.base_service_fee));
        let subtotal = checked(subtotal, "subtotal")?;
        let (_, total) = self.apply_tax(subtotal)?;
        Ok(total)
    }

    /// Tax and tax-inclusive total for a subtotal.
    fn apply_tax(&self, subtotal: Decimal) -> Result<(Decimal, Decimal)> {
        let tax = checked(subtotal.checked_mul(self.tables.tax_rate), "tax")?;
        let total = checked(subtotal.checked_add(tax), "total")?;
        Ok((tax, total))
    }
}

fn checked(amount: Option<Decimal>, component: &str) -> Result<Decimal> {
    amount.ok_or_else(|| ChairCareError::AmountOverflow {
        component: component.to_string(),
    })
}

/// Price a job against the standard tables.
pub fn calculate_job_pricing(request: &PricingRequest) -> Result<PriceBreakdown> {
    PricingCalculator::default().calculate(request)
}

/// Estimate a job's total against the standard tables.
pub fn get_estimated_price(service_type: ServiceType, chair_count: u32) -> Result<Decimal> {
    PricingCalculator::default().estimate(service_type, chair_count)
}
