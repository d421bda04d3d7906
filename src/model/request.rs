//! Pricing request built from job form input.

use super::service::{ServiceType, TravelTier, Urgency};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Description of a job to be priced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingRequest {
    /// Category of work.
    pub service_type: ServiceType,
    /// Number of chairs on the job (at least 1).
    pub chair_count: u32,
    /// Add-on keys in caller order.
    #[serde(default)]
    pub additional_service_keys: Vec<String>,
    #[serde(default)]
    pub travel_tier: TravelTier,
    #[serde(default)]
    pub urgency: Urgency,
    /// Amount subtracted before tax.
    #[serde(default)]
    pub discount: Decimal,
    /// Amount added before tax.
    #[serde(default)]
    pub parts_and_materials_cost: Decimal,
}

impl PricingRequest {
    /// Create a request with every optional input at its default.
    pub fn new(service_type: ServiceType, chair_count: u32) -> Self {
        Self {
            service_type,
            chair_count,
            additional_service_keys: Vec::new(),
            travel_tier: TravelTier::default(),
            urgency: Urgency::default(),
            discount: Decimal::ZERO,
            parts_and_materials_cost: Decimal::ZERO,
        }
    }

    /// Append an add-on key.
    pub fn with_add_on(mut self, key: impl Into<String>) -> Self {
        self.additional_service_keys.push(key.into());
        self
    }

    pub fn with_travel_tier(mut self, tier: TravelTier) -> Self {
        self.travel_tier = tier;
        self
    }

    pub fn with_urgency(mut self, urgency: Urgency) -> Self {
        self.urgency = urgency;
        self
    }

    pub fn with_discount(mut self, discount: Decimal) -> Self {
        self.discount = discount;
        self
    }

    pub fn with_parts_cost(mut self, cost: Decimal) -> Self {
        self.parts_and_materials_cost = cost;
        self
    }

    /// Add-on keys with repeats removed, first occurrence kept.
    pub fn unique_add_on_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = Vec::with_capacity(self.additional_service_keys.len());
        for key in &self.additional_service_keys {
            if !keys.contains(&key.as_str()) {
                keys.push(key);
            }
        }
        keys
    }
}
