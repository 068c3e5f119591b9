//! Order builders and an in-memory order store.

use delivery_planner::error::StoreError;
use delivery_planner::traits::OrderStore;
use delivery_planner::{GeoPoint, OrderCandidate, OrderId, OrderStatus};
use rust_decimal::Decimal;

use super::Location;

/// Confirmed order at a fixture location.
pub fn order_at(id: OrderId, location: &Location) -> OrderCandidate {
    OrderCandidate::new(id, location.name, OrderStatus::Confirmed, Decimal::new(49900, 2))
        .with_location(location.point())
}

/// Order at raw coordinates.
pub fn order_at_coords(id: OrderId, lat: f64, lng: f64) -> OrderCandidate {
    OrderCandidate::new(id, format!("Order {id}"), OrderStatus::Confirmed, Decimal::new(10000, 2))
        .with_location(GeoPoint::from_degrees(lat, lng))
}

/// Confirmed order with no delivery coordinates.
pub fn unlocated_order(id: OrderId) -> OrderCandidate {
    OrderCandidate::new(id, "Address pending", OrderStatus::Confirmed, Decimal::new(10000, 2))
}

pub fn with_status(mut order: OrderCandidate, status: OrderStatus) -> OrderCandidate {
    order.status = status;
    order
}

/// Order store over a fixed list, owned by the test.
#[derive(Debug, Clone, Default)]
pub struct MemoryOrderStore {
    orders: Vec<OrderCandidate>,
}

impl MemoryOrderStore {
    pub fn new(orders: Vec<OrderCandidate>) -> Self {
        Self { orders }
    }
}

impl OrderStore for MemoryOrderStore {
    fn find_by_ids(&self, ids: &[OrderId]) -> Result<Vec<OrderCandidate>, StoreError> {
        Ok(self
            .orders
            .iter()
            .filter(|order| ids.contains(&order.id))
            .cloned()
            .collect())
    }

    fn find_by_status(&self, statuses: &[OrderStatus]) -> Result<Vec<OrderCandidate>, StoreError> {
        Ok(self
            .orders
            .iter()
            .filter(|order| statuses.contains(&order.status) && order.location.is_some())
            .cloned()
            .collect())
    }
}
