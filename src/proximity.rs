//! Proximity search: orders within a radius of a delivery partner.

use rayon::prelude::*;
use tracing::debug;

use crate::geo::GeoPoint;
use crate::haversine::{estimate_minutes, haversine_km};
use crate::order::{OrderCandidate, OrderStatus};

/// An order annotated with its distance from the search center.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedOrder {
    pub order: OrderCandidate,
    /// Delivery location of `order`.
    pub location: GeoPoint,
    pub distance_km: f64,
    pub estimated_minutes: u32,
}

/// Result of a proximity search, nearest order first.
#[derive(Debug, Clone, PartialEq)]
pub struct NearbyOrders {
    pub orders: Vec<RankedOrder>,
    pub count: usize,
    pub radius_km: f64,
}

/// Find orders within `radius_km` of `center`.
///
/// Candidates whose status is not in `allowed_statuses`, or that have no
/// location, are skipped. The radius is inclusive. Results are sorted by
/// distance; equal distances keep their input order.
pub fn nearby(
    center: GeoPoint,
    radius_km: f64,
    candidates: Vec<OrderCandidate>,
    allowed_statuses: &[OrderStatus],
) -> NearbyOrders {
    let total = candidates.len();

    let mut orders: Vec<RankedOrder> = candidates
        .into_par_iter()
        .filter(|order| allowed_statuses.contains(&order.status))
        .filter_map(|order| {
            let location = order.location?;
            let distance_km = haversine_km(center, location);
            (distance_km <= radius_km).then(|| RankedOrder {
                order,
                location,
                distance_km,
                estimated_minutes: estimate_minutes(distance_km),
            })
        })
        .collect();

    orders.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));

    debug!(
        candidates = total,
        matched = orders.len(),
        radius_km,
        "proximity search complete"
    );

    NearbyOrders {
        count: orders.len(),
        orders,
        radius_km,
    }
}
