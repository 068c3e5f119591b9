//! Request handlers for the delivery endpoints.
//!
//! These sit between an HTTP layer and the planner: they validate request
//! coordinates, fetch candidates from the order store and shape the JSON
//! payloads.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info_span;

use crate::config::PlannerConfig;
use crate::error::{ApiError, RouteError};
use crate::geo::GeoPoint;
use crate::haversine::round_km;
use crate::order::{OrderId, OrderStatus};
use crate::proximity::{nearby, NearbyOrders, RankedOrder};
use crate::solver::{optimize, Route, RouteStop};
use crate::traits::OrderStore;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProximityRequest {
    pub latitude: f64,
    pub longitude: f64,
    /// Falls back to `PlannerConfig::default_radius_km`.
    #[serde(default, alias = "radius")]
    pub radius_km: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RouteRequest {
    pub order_ids: Vec<OrderId>,
    /// Start latitude; the warehouse is used when neither coordinate is given.
    #[serde(default)]
    pub start_lat: Option<f64>,
    #[serde(default)]
    pub start_lng: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearbyOrder {
    pub id: OrderId,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub distance: f64,
    pub estimated_time: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    pub status: OrderStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearbyOrdersResponse {
    pub orders: Vec<NearbyOrder>,
    pub count: usize,
    pub search_radius: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteStopPayload {
    pub id: OrderId,
    pub lat: f64,
    pub lng: f64,
    pub address: String,
    pub distance_from_previous: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimizedRouteResponse {
    pub optimized_route: Vec<RouteStopPayload>,
    pub total_distance: f64,
    pub estimated_time: u32,
    pub order_count: usize,
    pub algorithm: &'static str,
}

impl From<RankedOrder> for NearbyOrder {
    fn from(ranked: RankedOrder) -> Self {
        Self {
            id: ranked.order.id,
            address: ranked.order.address,
            latitude: ranked.location.latitude(),
            longitude: ranked.location.longitude(),
            distance: round_km(ranked.distance_km),
            estimated_time: ranked.estimated_minutes,
            total_amount: ranked.order.amount,
            status: ranked.order.status,
        }
    }
}

impl From<NearbyOrders> for NearbyOrdersResponse {
    fn from(result: NearbyOrders) -> Self {
        Self {
            count: result.count,
            search_radius: result.radius_km,
            orders: result.orders.into_iter().map(NearbyOrder::from).collect(),
        }
    }
}

impl From<RouteStop> for RouteStopPayload {
    fn from(stop: RouteStop) -> Self {
        Self {
            id: stop.order.id,
            lat: stop.location.latitude(),
            lng: stop.location.longitude(),
            address: stop.order.address,
            distance_from_previous: stop.distance_from_previous_km,
        }
    }
}

impl From<Route> for OptimizedRouteResponse {
    fn from(route: Route) -> Self {
        Self {
            order_count: route.stops.len(),
            total_distance: round_km(route.total_distance_km),
            estimated_time: route.estimated_total_minutes,
            algorithm: Route::ALGORITHM,
            optimized_route: route.stops.into_iter().map(RouteStopPayload::from).collect(),
        }
    }
}

/// Orders near a delivery partner, nearest first.
pub fn nearby_orders<S: OrderStore>(
    store: &S,
    config: &PlannerConfig,
    request: &ProximityRequest,
) -> Result<NearbyOrdersResponse, ApiError> {
    let center = GeoPoint::new(request.latitude, request.longitude)?;
    let radius_km = request.radius_km.unwrap_or(config.default_radius_km);
    if !radius_km.is_finite() || radius_km < 0.0 {
        return Err(ApiError::InvalidRadius(radius_km));
    }

    let span = info_span!("nearby_orders", radius_km);
    let _guard = span.enter();

    let candidates = store.find_by_status(&config.dispatch_statuses)?;
    let result = nearby(center, radius_km, candidates, &config.dispatch_statuses);

    Ok(result.into())
}

/// Optimized visiting order for the requested orders.
///
/// Fails with a not-found error when the store resolves none of the ids and
/// a bad-request error when none of the resolved orders has coordinates.
pub fn optimize_route<S: OrderStore>(
    store: &S,
    config: &PlannerConfig,
    request: &RouteRequest,
) -> Result<OptimizedRouteResponse, ApiError> {
    let start = match (request.start_lat, request.start_lng) {
        (Some(lat), Some(lng)) => GeoPoint::new(lat, lng)?,
        (None, None) => config.warehouse,
        _ => return Err(ApiError::IncompleteStart),
    };

    let span = info_span!("optimize_route", requested = request.order_ids.len());
    let _guard = span.enter();

    if request.order_ids.is_empty() {
        return Err(RouteError::EmptyInput.into());
    }

    let candidates = store.find_by_ids(&request.order_ids)?;
    let route = optimize(start, candidates)?;

    Ok(route.into())
}
