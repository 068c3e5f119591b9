//! Collaborator traits for the delivery planner.
//!
//! The planner only reads orders. Concrete apps implement these against
//! their own storage.

use crate::error::StoreError;
use crate::order::{OrderCandidate, OrderId, OrderStatus};

/// Read-only access to the order store.
///
/// Each call should return a consistent snapshot; the planner does not keep
/// the returned orders beyond a single request.
pub trait OrderStore {
    /// Orders matching the given ids. Unknown ids are simply absent.
    fn find_by_ids(&self, ids: &[OrderId]) -> Result<Vec<OrderCandidate>, StoreError>;

    /// Orders whose status is in `statuses` and that have delivery
    /// coordinates.
    fn find_by_status(&self, statuses: &[OrderStatus]) -> Result<Vec<OrderCandidate>, StoreError>;
}
