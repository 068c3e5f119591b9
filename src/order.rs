//! Order records as supplied by the order store.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::geo::GeoPoint;

/// Order identifier assigned by the order store.
pub type OrderId = i64;

/// Order lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Preparing,
    OutForDelivery,
    Delivered,
    Cancelled,
}

/// Statuses that are ready to be picked up by a delivery partner.
pub const DEFAULT_DISPATCH_STATUSES: [OrderStatus; 2] =
    [OrderStatus::Confirmed, OrderStatus::Preparing];

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OutForDelivery => "out_for_delivery",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(OrderStatus::Pending),
            "confirmed" => Ok(OrderStatus::Confirmed),
            "preparing" => Ok(OrderStatus::Preparing),
            "out_for_delivery" => Ok(OrderStatus::OutForDelivery),
            "delivered" => Ok(OrderStatus::Delivered),
            "cancelled" => Ok(OrderStatus::Cancelled),
            _ => Err(ConfigError::UnknownStatus(s.to_string())),
        }
    }
}

/// A candidate order for proximity search or route planning.
///
/// Orders without a `location` never take part in distance calculations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderCandidate {
    pub id: OrderId,
    pub location: Option<GeoPoint>,
    pub address: String,
    pub status: OrderStatus,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

impl OrderCandidate {
    pub fn new(
        id: OrderId,
        address: impl Into<String>,
        status: OrderStatus,
        amount: Decimal,
    ) -> Self {
        Self {
            id,
            location: None,
            address: address.into(),
            status,
            amount,
        }
    }

    pub fn with_location(mut self, location: GeoPoint) -> Self {
        self.location = Some(location);
        self
    }
}
