//! Test fixtures for delivery-planner.
//!
//! Provides:
//! - Real Delhi NCR locations
//! - Order builders
//! - An in-memory `OrderStore`

#![allow(dead_code)]

pub mod delhi_locations;
pub mod store;

pub use delhi_locations::*;
pub use store::*;
