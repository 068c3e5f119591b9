//! Great-circle distance between delivery points.
//!
//! Straight-line distance on a spherical Earth. Ignores roads, so travel
//! times derived from it are rough estimates.

use crate::geo::GeoPoint;

/// Earth mean radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Travel-time heuristic applied to every distance estimate.
///
/// Shared by the proximity filter and the route optimizer so their
/// estimates agree.
pub const MINUTES_PER_KM: f64 = 3.0;

/// Calculate haversine distance between two points in kilometers.
///
/// Inputs are used as given: out-of-range coordinates are not rejected and
/// longitudes are not normalized across the antimeridian.
pub fn haversine_km(from: GeoPoint, to: GeoPoint) -> f64 {
    let (lat1, lng1) = from.coords();
    let (lat2, lng2) = to.coords();

    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lng = (lng2 - lng1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    // Rounding can push `a` a hair above 1 for antipodal points; NaN passes through.
    let c = 2.0 * a.clamp(0.0, 1.0).sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// Convert distance in km to estimated travel minutes.
pub fn estimate_minutes(km: f64) -> u32 {
    (km * MINUTES_PER_KM).round() as u32
}

/// Round a distance to two decimal places for reporting.
pub fn round_km(km: f64) -> f64 {
    (km * 100.0).round() / 100.0
}
