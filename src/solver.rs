//! Delivery route solver (greedy nearest-neighbor).
//!
//! Builds a visiting order by repeatedly driving to the closest unvisited
//! order. This is a heuristic: the resulting tour is usually reasonable but
//! is not guaranteed to be the shortest one. Cost is O(n²) in the number of
//! located orders, which is fine for a partner's daily batch.

use tracing::{debug, trace};

use crate::error::RouteError;
use crate::geo::GeoPoint;
use crate::haversine::{estimate_minutes, haversine_km, round_km};
use crate::order::OrderCandidate;

/// A single stop on a route.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteStop {
    pub order: OrderCandidate,
    /// Delivery location of `order`.
    pub location: GeoPoint,
    /// Leg length from the previous stop (or the start), rounded to 0.01 km.
    pub distance_from_previous_km: f64,
}

/// An ordered sequence of stops with totals.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub start: GeoPoint,
    pub stops: Vec<RouteStop>,
    /// Sum of the unrounded leg lengths.
    pub total_distance_km: f64,
    pub estimated_total_minutes: u32,
}

impl Route {
    /// Label describing how the stop order was chosen.
    pub const ALGORITHM: &'static str = "greedy_nearest_neighbor";

    pub fn algorithm(&self) -> &'static str {
        Self::ALGORITHM
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}

/// Sequence `candidates` starting from `start`.
///
/// Orders without a location are dropped from the route. On equal distances
/// the earliest remaining candidate in input order is visited first, so the
/// result is reproducible for a given input order.
pub fn optimize(start: GeoPoint, candidates: Vec<OrderCandidate>) -> Result<Route, RouteError> {
    if candidates.is_empty() {
        return Err(RouteError::EmptyInput);
    }

    let total = candidates.len();
    let mut unvisited: Vec<(GeoPoint, OrderCandidate)> = candidates
        .into_iter()
        .filter_map(|order| order.location.map(|location| (location, order)))
        .collect();

    if unvisited.is_empty() {
        return Err(RouteError::NoValidLocations(total));
    }
    if unvisited.len() < total {
        debug!(
            skipped = total - unvisited.len(),
            "orders without a delivery location left out of route"
        );
    }

    let mut current = start;
    let mut total_distance_km = 0.0;
    let mut stops = Vec::with_capacity(unvisited.len());

    while let Some((index, distance_km)) = nearest(current, &unvisited) {
        // `remove` keeps the remaining candidates in input order for tie-breaks.
        let (location, order) = unvisited.remove(index);
        trace!(order_id = order.id, distance_km, "next stop");

        total_distance_km += distance_km;
        current = location;
        stops.push(RouteStop {
            order,
            location,
            distance_from_previous_km: round_km(distance_km),
        });
    }

    debug!(stops = stops.len(), total_distance_km, "route optimized");

    Ok(Route {
        start,
        stops,
        total_distance_km,
        estimated_total_minutes: estimate_minutes(total_distance_km),
    })
}

/// Index and distance of the closest candidate; the first wins on ties.
///
/// Any finite distance beats a NaN one, so orders with garbage coordinates
/// are visited last.
fn nearest(from: GeoPoint, candidates: &[(GeoPoint, OrderCandidate)]) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;

    for (index, (location, _)) in candidates.iter().enumerate() {
        let distance = haversine_km(from, *location);
        let closer = match best {
            Some((_, best_distance)) => {
                distance < best_distance || (best_distance.is_nan() && !distance.is_nan())
            }
            None => true,
        };
        if closer {
            best = Some((index, distance));
        }
    }

    best
}
