pub mod api;
pub mod config;
pub mod core;
pub mod models;

/// Re-export important types for easier access
pub use crate::models::{Category, Food, Notification, Order, OrderStatus, Restaurant, User};

pub use crate::api::Client;
pub use crate::core::cart::{Cart, CartLine};
pub use crate::core::error::Error;
pub use crate::core::history::OrderHistory;
pub use crate::core::session::Session;

/// Result type used throughout the SDK
pub type Result<T> = std::result::Result<T, Error>;

/// SDK version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
