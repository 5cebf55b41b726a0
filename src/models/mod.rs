mod food;
mod notification;
mod order;
mod restaurant;
mod user;

pub use food::{Category, CategoryRef, Food, Ingredients};
pub use notification::Notification;
pub use order::{Order, OrderLine, OrderLineFood, OrderRequest, OrderRequestItem, OrderStatus, OrderUser};
pub use restaurant::Restaurant;
pub use user::User;
