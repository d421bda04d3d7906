//! Service, travel and urgency tags used when quoting a job.

use crate::error::ChairCareError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of work performed on the chairs of a job.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    Cleaning,
    Repair,
    Maintenance,
    Inspection,
    Assessment,
}

impl ServiceType {
    /// All service types, in display order.
    pub const ALL: [ServiceType; 5] = [
        ServiceType::Cleaning,
        ServiceType::Repair,
        ServiceType::Maintenance,
        ServiceType::Inspection,
        ServiceType::Assessment,
    ];

    /// Tag as used in requests and tables.
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::Cleaning => "cleaning",
            ServiceType::Repair => "repair",
            ServiceType::Maintenance => "maintenance",
            ServiceType::Inspection => "inspection",
            ServiceType::Assessment => "assessment",
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceType {
    type Err = ChairCareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_lowercase();
        ServiceType::ALL
            .into_iter()
            .find(|t| t.as_str() == tag)
            .ok_or_else(|| ChairCareError::UnknownServiceType {
                name: s.to_string(),
            })
    }
}

/// Distance band used for the flat travel surcharge.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum TravelTier {
    #[default]
    Local,
    Regional,
    Extended,
    Remote,
}

impl TravelTier {
    pub const ALL: [TravelTier; 4] = [
        TravelTier::Local,
        TravelTier::Regional,
        TravelTier::Extended,
        TravelTier::Remote,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TravelTier::Local => "local",
            TravelTier::Regional => "regional",
            TravelTier::Extended => "extended",
            TravelTier::Remote => "remote",
        }
    }
}

impl fmt::Display for TravelTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TravelTier {
    type Err = ChairCareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_lowercase();
        TravelTier::ALL
            .into_iter()
            .find(|t| t.as_str() == tag)
            .ok_or_else(|| ChairCareError::UnknownTravelTier {
                name: s.to_string(),
            })
    }
}

/// Whether the job carries the urgent surcharge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    #[default]
    Normal,
    Urgent,
}

impl Urgency {
    pub fn is_urgent(&self) -> bool {
        matches!(self, Urgency::Urgent)
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Urgency::Normal => write!(f, "normal"),
            Urgency::Urgent => write!(f, "urgent"),
        }
    }
}

impl FromStr for Urgency {
    type Err = ChairCareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "normal" => Ok(Urgency::Normal),
            "urgent" => Ok(Urgency::Urgent),
            _ => Err(ChairCareError::UnknownUrgency {
                name: s.to_string(),
            }),
        }
    }
}
