//! Configuration constants and pricing tables.

use crate::error::{ChairCareError, Result};
use crate::model::{ServiceType, TravelTier};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::LazyLock;

/// VAT rate applied to the subtotal (15%).
pub const TAX_RATE: Decimal = Decimal::from_parts(15, 0, 0, false, 2);

/// Flat surcharge for urgent jobs.
pub const URGENCY_FEE: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Prefix of every canonical chair QR payload.
pub const QR_PREFIX: &str = "CHAIRCARE:";

/// Segment delimiter inside a QR payload.
pub const QR_DELIMITER: char = ':';

/// Chair count above which a quote is flagged for review.
pub const LARGE_JOB_CHAIR_COUNT: u32 = 500;

/// Base and per-chair price of a service type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRate {
    pub base_service_fee: Decimal,
    pub price_per_chair: Decimal,
}

impl ServiceRate {
    fn new(base_service_fee: i64, price_per_chair: i64) -> Self {
        Self {
            base_service_fee: Decimal::new(base_service_fee, 0),
            price_per_chair: Decimal::new(price_per_chair, 0),
        }
    }
}

/// Optional priced extra that can be layered onto a job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddOn {
    pub name: String,
    pub price: Decimal,
    #[serde(default)]
    pub description: String,
    /// Scales with the job's chair count when set.
    #[serde(default)]
    pub per_chair: bool,
}

impl AddOn {
    fn new(name: &str, price: i64, description: &str, per_chair: bool) -> Self {
        Self {
            name: name.to_string(),
            price: Decimal::new(price, 0),
            description: description.to_string(),
            per_chair,
        }
    }

    /// Quantity this add-on is charged for on a job of `chair_count` chairs.
    pub fn quantity_for(&self, chair_count: u32) -> u32 {
        if self.per_chair {
            chair_count
        } else {
            1
        }
    }
}

/// Static fee tables consumed by the pricing calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingTables {
    #[serde(default = "default_tax_rate")]
    pub tax_rate: Decimal,
    #[serde(default = "default_urgency_fee")]
    pub urgency_fee: Decimal,
    pub services: BTreeMap<ServiceType, ServiceRate>,
    #[serde(default)]
    pub additional_services: BTreeMap<String, AddOn>,
    #[serde(default)]
    pub travel_fees: BTreeMap<TravelTier, Decimal>,
}

fn default_tax_rate() -> Decimal {
    TAX_RATE
}

fn default_urgency_fee() -> Decimal {
    URGENCY_FEE
}

static STANDARD_TABLES: LazyLock<PricingTables> = LazyLock::new(PricingTables::default);

impl Default for PricingTables {
    fn default() -> Self {
        let services = BTreeMap::from([
            (ServiceType::Cleaning, ServiceRate::new(50, 25)),
            (ServiceType::Repair, ServiceRate::new(150, 75)),
            (ServiceType::Maintenance, ServiceRate::new(100, 45)),
            (ServiceType::Inspection, ServiceRate::new(75, 20)),
            (ServiceType::Assessment, ServiceRate::new(200, 15)),
        ]);

        let additional_services = [
            (
                "fabric_protection",
                AddOn::new(
                    "Fabric Protection (per chair)",
                    35,
                    "Stain-repellent treatment applied after cleaning",
                    true,
                ),
            ),
            (
                "stain_removal",
                AddOn::new(
                    "Deep Stain Removal (per chair)",
                    45,
                    "Spot treatment for set-in stains",
                    true,
                ),
            ),
            (
                "odour_treatment",
                AddOn::new(
                    "Odour Treatment (per chair)",
                    30,
                    "Enzyme treatment for persistent odours",
                    true,
                ),
            ),
            (
                "castor_replacement",
                AddOn::new(
                    "Castor Replacement Set (per chair)",
                    120,
                    "Five replacement castors fitted",
                    true,
                ),
            ),
            (
                "gas_lift_replacement",
                AddOn::new(
                    "Gas Lift Replacement (per chair)",
                    250,
                    "Replacement gas cylinder fitted",
                    true,
                ),
            ),
            (
                "pickup_delivery",
                AddOn::new(
                    "Pickup & Delivery",
                    150,
                    "Collection from and return to the client site",
                    false,
                ),
            ),
            (
                "after_hours",
                AddOn::new(
                    "After-Hours Service",
                    200,
                    "Work performed outside business hours",
                    false,
                ),
            ),
            (
                "condition_report",
                AddOn::new(
                    "Written Condition Report",
                    100,
                    "Per-job report of chair condition and recommendations",
                    false,
                ),
            ),
        ]
        .into_iter()
        .map(|(key, add_on)| (key.to_string(), add_on))
        .collect();

        let travel_fees = BTreeMap::from([
            (TravelTier::Local, Decimal::ZERO),
            (TravelTier::Regional, Decimal::new(35, 0)),
            (TravelTier::Extended, Decimal::new(65, 0)),
            (TravelTier::Remote, Decimal::new(100, 0)),
        ]);

        Self {
            tax_rate: TAX_RATE,
            urgency_fee: URGENCY_FEE,
            services,
            additional_services,
            travel_fees,
        }
    }
}

impl PricingTables {
    /// Shared standard tables, built once.
    pub fn standard() -> &'static PricingTables {
        &STANDARD_TABLES
    }

    /// Parse tables from JSON and check them.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let tables: PricingTables = serde_json::from_str(json)?;
        tables.check()?;
        Ok(tables)
    }

    /// Load tables from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ChairCareError::TablesNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        tracing::debug!("Loading pricing tables from {}", path.display());
        Self::from_json_str(&content)
    }

    /// Rates for a service type.
    pub fn service_rate(&self, service_type: ServiceType) -> Result<&ServiceRate> {
        self.services
            .get(&service_type)
            .ok_or_else(|| ChairCareError::UnknownServiceType {
                name: service_type.to_string(),
            })
    }

    /// Add-on by key.
    pub fn add_on(&self, key: &str) -> Result<&AddOn> {
        self.additional_services
            .get(key)
            .ok_or_else(|| ChairCareError::UnknownAddOn {
                key: key.to_string(),
            })
    }

    /// Travel surcharge for a tier. A missing `local` entry counts as free.
    pub fn travel_fee(&self, tier: TravelTier) -> Result<Decimal> {
        match self.travel_fees.get(&tier) {
            Some(fee) => Ok(*fee),
            None if tier == TravelTier::Local => Ok(Decimal::ZERO),
            None => Err(ChairCareError::UnknownTravelTier {
                name: tier.to_string(),
            }),
        }
    }

    /// Reject tables that would produce nonsensical prices.
    pub fn check(&self) -> Result<()> {
        let invalid = |message: String| Err(ChairCareError::InvalidTables { message });

        if self.tax_rate.is_sign_negative() || self.tax_rate >= Decimal::ONE {
            return invalid(format!("tax rate must be in [0, 1), got {}", self.tax_rate));
        }
        if self.urgency_fee.is_sign_negative() {
            return invalid(format!(
                "urgency fee must be non-negative, got {}",
                self.urgency_fee
            ));
        }

        for service_type in ServiceType::ALL {
            let Some(rate) = self.services.get(&service_type) else {
                return invalid(format!("missing rates for service '{}'", service_type));
            };
            if rate.base_service_fee.is_sign_negative() || rate.price_per_chair.is_sign_negative()
            {
                return invalid(format!("negative rate for service '{}'", service_type));
            }
        }

        for (key, add_on) in &self.additional_services {
            if add_on.name.trim().is_empty() {
                return invalid(format!("additional service '{}' has no name", key));
            }
            if add_on.price.is_sign_negative() {
                return invalid(format!("negative price for additional service '{}'", key));
            }
        }

        for (tier, fee) in &self.travel_fees {
            if fee.is_sign_negative() {
                return invalid(format!("negative travel fee for tier '{}'", tier));
            }
        }

        Ok(())
    }
}
