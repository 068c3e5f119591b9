//! Delhi NCR landmarks for realistic delivery fixtures.

use delivery_planner::GeoPoint;

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn point(&self) -> GeoPoint {
        GeoPoint::from_degrees(self.lat, self.lng)
    }
}

/// Default warehouse, also the default route start.
pub const WAREHOUSE: Location = Location::new("Warehouse", 28.6139, 77.2090);

// ============================================================================
// Central Delhi
// ============================================================================

pub const CENTRAL_DELHI: &[Location] = &[
    Location::new("Connaught Place", 28.6315, 77.2167),
    Location::new("India Gate", 28.6129, 77.2295),
    Location::new("Chandni Chowk", 28.6506, 77.2303),
    Location::new("Karol Bagh", 28.6519, 77.1909),
    Location::new("Janpath", 28.6229, 77.2177),
];

// ============================================================================
// South Delhi
// ============================================================================

pub const SOUTH_DELHI: &[Location] = &[
    Location::new("Lajpat Nagar", 28.5677, 77.2433),
    Location::new("Hauz Khas", 28.5494, 77.2001),
    Location::new("Saket", 28.5245, 77.2066),
    Location::new("Nehru Place", 28.5491, 77.2533),
    Location::new("Vasant Kunj", 28.5200, 77.1580),
];

// ============================================================================
// Outlying NCR
// ============================================================================

pub const OUTER_NCR: &[Location] = &[
    Location::new("Noida Sector 18", 28.5708, 77.3260),
    Location::new("Noida Film City", 28.5355, 77.3910),
    Location::new("Cyber City Gurugram", 28.4950, 77.0895),
    Location::new("Dwarka Sector 21", 28.5523, 77.0583),
    Location::new("Rohini", 28.7495, 77.0565),
];

pub fn all_locations() -> Vec<Location> {
    let mut all = Vec::with_capacity(15);
    all.extend_from_slice(CENTRAL_DELHI);
    all.extend_from_slice(SOUTH_DELHI);
    all.extend_from_slice(OUTER_NCR);
    all
}
