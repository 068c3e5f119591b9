//! delivery-planner core
//!
//! Proximity search and route sequencing for delivery partners, over
//! great-circle distances.

pub mod api;
pub mod config;
pub mod error;
pub mod geo;
pub mod haversine;
pub mod order;
pub mod proximity;
pub mod solver;
pub mod traits;

pub use error::{ApiError, ConfigError, GeoError, RouteError, StoreError};
pub use geo::GeoPoint;
pub use order::{OrderCandidate, OrderId, OrderStatus};
