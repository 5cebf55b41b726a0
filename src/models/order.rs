use crate::models::Food;
use serde::{Deserialize, Serialize};

/// Lifecycle status of an order as reported by the backend
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStatus {
    /// Order has been created and is awaiting fulfilment
    Pending,
    /// Order has been canceled
    Canceled,
    /// Order has been delivered
    Delivered,
}

impl OrderStatus {
    /// Converts the enum to its wire string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Canceled => "CANCELED",
            OrderStatus::Delivered => "DELIVERED",
        }
    }
}

/// User field of an order: a bare identifier or a populated summary,
/// depending on which endpoint returned the order
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum OrderUser {
    /// Populated user summary
    Named {
        /// Display name of the user
        name: String,
    },
    /// Bare user identifier
    Id(String),
}

impl OrderUser {
    /// Returns the display name if the reference is populated
    pub fn name(&self) -> Option<&str> {
        match self {
            OrderUser::Named { name } => Some(name),
            OrderUser::Id(_) => None,
        }
    }
}

/// Food field of an order line: populated, or a bare identifier when the
/// backend did not populate the reference
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum OrderLineFood {
    /// Populated food record
    Food(Box<Food>),
    /// Bare food identifier
    Id(String),
}

/// A single line of a created order
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OrderLine {
    /// Referenced food, absent when it has since been deleted
    #[serde(default)]
    pub food: Option<OrderLineFood>,
    /// Quantity of the food ordered
    pub quantity: u32,
}

impl OrderLine {
    /// Returns the line subtotal, or zero when the food is not resolvable
    pub fn subtotal(&self) -> f64 {
        match &self.food {
            Some(OrderLineFood::Food(food)) => food.price * f64::from(self.quantity),
            _ => 0.0,
        }
    }
}

/// Represents an order created by the backend. Orders are read-only from the
/// client's perspective; the SDK only displays them.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique identifier for the order
    #[serde(rename = "_id")]
    pub id: String,
    /// User who placed the order
    pub user: OrderUser,
    /// Total price reported by the backend
    #[serde(default)]
    pub total_price: f64,
    /// Lines of the order
    pub food_order_items: Vec<OrderLine>,
    /// Current status of the order
    pub status: OrderStatus,
    /// Timestamp when the order was created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Order {
    /// Recomputes the order total from its lines. Lines whose food cannot be
    /// resolved contribute zero instead of failing the computation.
    pub fn computed_total(&self) -> f64 {
        self.food_order_items.iter().map(OrderLine::subtotal).sum()
    }

    /// Replaces bare food identifiers in the order lines with the matching
    /// records from a fetched food list, for display
    pub fn resolve_items(&mut self, foods: &[Food]) {
        for line in &mut self.food_order_items {
            if let Some(OrderLineFood::Id(id)) = &line.food {
                if let Some(food) = foods.iter().find(|f| &f.id == id) {
                    line.food = Some(OrderLineFood::Food(Box::new(food.clone())));
                }
            }
        }
    }
}

/// Payload sent to create an order
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    /// Identifier of the ordering user
    pub user: String,
    /// Total price of the selected items
    pub total_price: f64,
    /// Selected items reduced to (food id, quantity) pairs
    pub food_order_items: Vec<OrderRequestItem>,
    /// Initial status of the order
    pub status: OrderStatus,
}

/// One (food id, quantity) pair of an order creation payload
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OrderRequestItem {
    /// Identifier of the selected food
    pub food: String,
    /// Quantity ordered
    pub quantity: u32,
}
