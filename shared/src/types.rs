//! Common types used across the platform

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// GPS coordinates
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GpsCoordinates {
    pub latitude: Decimal,
    pub longitude: Decimal,
}

impl GpsCoordinates {
    pub fn new(latitude: Decimal, longitude: Decimal) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Advisory topics the text-generation service can be asked about
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AdviceCategory {
    Prevention,
    Filtration,
    Cost,
}

impl AdviceCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdviceCategory::Prevention => "prevention",
            AdviceCategory::Filtration => "filtration",
            AdviceCategory::Cost => "cost",
        }
    }
}
