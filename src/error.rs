//! Error types for the delivery planner.

use thiserror::Error;

/// Invalid coordinates supplied at a request boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoError {
    #[error("latitude {0} is outside [-90, 90]")]
    InvalidLatitude(f64),
    #[error("longitude {0} is outside [-180, 180]")]
    InvalidLongitude(f64),
}

/// Failures of route optimization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RouteError {
    /// No candidate orders were supplied at all.
    #[error("no orders supplied for route optimization")]
    EmptyInput,
    /// Candidates exist but none carries a delivery location.
    #[error("none of the {0} supplied orders has a delivery location")]
    NoValidLocations(usize),
}

/// Failure reported by an order store implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("order store unavailable: {0}")]
pub struct StoreError(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("environment variable {name} has invalid value {value:?}")]
    InvalidValue { name: &'static str, value: String },
    #[error("unknown order status {0:?}")]
    UnknownStatus(String),
    #[error("warehouse location is invalid: {0}")]
    Warehouse(String),
}

/// Errors surfaced by the request handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Route(#[from] RouteError),
    #[error(transparent)]
    Coordinates(#[from] GeoError),
    #[error("search radius {0} must be a finite, non-negative number of kilometers")]
    InvalidRadius(f64),
    #[error("start location needs both start_lat and start_lng")]
    IncompleteStart,
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    /// HTTP-equivalent status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::Route(RouteError::EmptyInput) => 404,
            ApiError::Route(RouteError::NoValidLocations(_)) => 400,
            ApiError::Coordinates(_) | ApiError::InvalidRadius(_) => 400,
            ApiError::IncompleteStart => 400,
            ApiError::Store(_) => 500,
        }
    }
}
