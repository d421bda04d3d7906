//! Itemized price breakdown, stored verbatim as a job or invoice price snapshot.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One selected add-on as priced on the job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalServiceLine {
    pub name: String,
    pub unit_price: Decimal,
    /// Chair count for per-chair add-ons, otherwise 1.
    pub quantity: u32,
}

impl AdditionalServiceLine {
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// Priced, itemized result of a pricing request.
///
/// The optional amounts are only present when strictly positive, so zero
/// components never show up as itemized lines or in the serialized snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub base_service_fee: Decimal,
    pub price_per_chair: Decimal,
    pub chair_count: u32,
    #[serde(default)]
    pub additional_services: Vec<AdditionalServiceLine>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parts_and_materials: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel_fee: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urgency_fee: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<Decimal>,
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

impl PriceBreakdown {
    /// Per-chair component of the subtotal.
    pub fn chairs_total(&self) -> Decimal {
        self.price_per_chair * Decimal::from(self.chair_count)
    }

    /// Sum of all selected add-on lines.
    pub fn additional_services_total(&self) -> Decimal {
        self.additional_services
            .iter()
            .map(AdditionalServiceLine::line_total)
            .sum()
    }

    /// Whether the discount pushed the subtotal below zero.
    pub fn is_negative(&self) -> bool {
        self.subtotal.is_sign_negative() && !self.subtotal.is_zero()
    }
}

/// Keep an amount only when it is strictly positive.
pub(crate) fn positive(amount: Decimal) -> Option<Decimal> {
    (amount > Decimal::ZERO).then_some(amount)
}
