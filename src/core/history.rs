//! Local record of created orders

use crate::models::Order;
use serde::{Deserialize, Serialize};

/// A local, clearable mirror of orders created during a session.
///
/// The backend remains the source of truth; this is a display convenience
/// that the host application may persist however it likes. Orders are only
/// ever appended, never replaced, until the user explicitly clears the list.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct OrderHistory {
    orders: Vec<Order>,
}

impl OrderHistory {
    /// Creates a new empty OrderHistory
    pub fn new() -> Self {
        Self { orders: Vec::new() }
    }

    /// Appends a created order
    pub fn record(&mut self, order: Order) {
        self.orders.push(order);
    }

    /// Returns the recorded orders, oldest first
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Returns the number of recorded orders
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Returns true when no orders are recorded
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Removes all recorded orders
    pub fn clear(&mut self) {
        self.orders.clear();
    }
}
