//! Cart accumulation logic

use crate::core::error::Error;
use crate::core::session::Session;
use crate::models::{Food, OrderRequest, OrderRequestItem, OrderStatus};
use crate::Result;

/// One (food, quantity) selection held client-side before order submission
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    /// The selected food
    pub food: Food,
    /// Quantity selected, always at least 1
    pub quantity: u32,
}

impl CartLine {
    /// Returns the line subtotal
    pub fn subtotal(&self) -> f64 {
        self.food.price * f64::from(self.quantity)
    }
}

/// Accumulates food selections and produces order creation payloads.
///
/// The cart holds at most one line per food identifier; adjustments merge
/// into the existing line and lines whose quantity drops to zero are removed.
/// The total is always recomputed from the surviving lines, never cached.
/// All mutations are synchronous in-memory updates.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty Cart
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Adds one unit of the given food
    pub fn add(&mut self, food: Food) {
        self.add_or_adjust(food, 1);
    }

    /// Adjusts the quantity of a food by a signed delta.
    ///
    /// An existing line is merged into; a new line is created only when the
    /// delta is positive. Lines whose quantity drops to zero or below are
    /// removed. Decrementing a food with no line is a no-op.
    pub fn add_or_adjust(&mut self, food: Food, delta: i32) {
        if let Some(index) = self.lines.iter().position(|line| line.food.id == food.id) {
            let quantity = i64::from(self.lines[index].quantity) + i64::from(delta);
            if quantity > 0 {
                self.lines[index].quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
            } else {
                self.lines.remove(index);
            }
        } else if delta > 0 {
            self.lines.push(CartLine {
                food,
                quantity: delta as u32,
            });
        }
    }

    /// Decreases the quantity of the food with the given identifier by one.
    /// No-op if the food has no line.
    pub fn decrease(&mut self, food_id: &str) {
        let found = self.find_food(food_id);
        if let Some(food) = found {
            self.add_or_adjust(food, -1);
        }
    }

    /// Increases the quantity of the food with the given identifier by one.
    /// No-op if the food has no line.
    pub fn increase(&mut self, food_id: &str) {
        let found = self.find_food(food_id);
        if let Some(food) = found {
            self.add_or_adjust(food, 1);
        }
    }

    fn find_food(&self, food_id: &str) -> Option<Food> {
        self.lines
            .iter()
            .find(|line| line.food.id == food_id)
            .map(|line| line.food.clone())
    }

    /// Removes the line for the given food outright, regardless of quantity.
    /// No-op if absent.
    pub fn remove(&mut self, food_id: &str) {
        self.lines.retain(|line| line.food.id != food_id);
    }

    /// Removes all lines
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Returns the current lines
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Returns the number of lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true when the cart has no lines
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the cart total, recomputed from the current lines
    pub fn total(&self) -> f64 {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Builds an order creation payload from the cart and session.
    ///
    /// Fails without touching the cart when the session is absent, carries no
    /// user identity, or the cart is empty. No request is sent here; this is
    /// pure payload construction.
    pub fn order_request(&self, session: Option<&Session>) -> Result<OrderRequest> {
        let session = session.ok_or(Error::NoSession)?;
        let user_id = session.user_id()?;

        if self.lines.is_empty() {
            return Err(Error::EmptyCart);
        }

        Ok(OrderRequest {
            user: user_id.to_string(),
            total_price: self.total(),
            food_order_items: self
                .lines
                .iter()
                .map(|line| OrderRequestItem {
                    food: line.food.id.clone(),
                    quantity: line.quantity,
                })
                .collect(),
            status: OrderStatus::Pending,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryRef, User};

    fn pizza() -> Food {
        Food::new(
            "food-pizza".to_string(),
            "Pizza".to_string(),
            10.0,
            CategoryRef::Id("cat-1".to_string()),
        )
    }

    fn salad() -> Food {
        Food::new(
            "food-salad".to_string(),
            "Salad".to_string(),
            6.0,
            CategoryRef::Id("cat-2".to_string()),
        )
    }

    fn test_session() -> Session {
        Session::new(
            "token-123".to_string(),
            Some(User::new(
                "user-1".to_string(),
                "jamie@example.com".to_string(),
                "Jamie".to_string(),
                "555-0100".to_string(),
            )),
        )
    }

    #[test]
    fn test_adding_same_food_merges_into_one_line() {
        let mut cart = Cart::new();
        cart.add(pizza());
        cart.add(pizza());

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.total(), 20.0);
    }

    #[test]
    fn test_worked_pizza_example() {
        let mut cart = Cart::new();
        cart.add_or_adjust(pizza(), 2);
        cart.add_or_adjust(pizza(), 1);

        assert_eq!(cart.lines()[0].quantity, 3);
        assert_eq!(cart.total(), 30.0);

        cart.remove("food-pizza");
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0.0);
    }

    #[test]
    fn test_decrement_to_zero_removes_line() {
        let mut cart = Cart::new();
        cart.add(pizza());
        cart.decrease("food-pizza");

        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0.0);
    }

    #[test]
    fn test_decrement_absent_food_is_noop() {
        let mut cart = Cart::new();
        cart.add(salad());

        cart.decrease("food-pizza");
        cart.add_or_adjust(pizza(), -1);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total(), 6.0);
    }

    #[test]
    fn test_total_always_matches_surviving_lines() {
        let mut cart = Cart::new();
        cart.add(pizza());
        cart.add(salad());
        cart.add(pizza());
        cart.increase("food-salad");
        cart.decrease("food-pizza");

        let expected: f64 = cart.lines().iter().map(CartLine::subtotal).sum();
        assert_eq!(cart.total(), expected);
        assert_eq!(cart.total(), 10.0 + 12.0);
    }

    #[test]
    fn test_quantity_saturates_instead_of_wrapping() {
        let mut cart = Cart::new();
        cart.add(pizza());
        cart.add_or_adjust(pizza(), i32::MAX);
        cart.add_or_adjust(pizza(), i32::MAX);

        assert_eq!(cart.lines()[0].quantity, u32::MAX);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_remove_is_unconditional_and_noop_when_absent() {
        let mut cart = Cart::new();
        cart.add_or_adjust(pizza(), 5);
        cart.remove("food-pizza");
        cart.remove("food-pizza");

        assert!(cart.is_empty());
    }

    #[test]
    fn test_order_request_requires_session_user_and_lines() {
        let cart = Cart::new();
        assert!(matches!(cart.order_request(None), Err(Error::NoSession)));

        let anonymous = Session::new("token-123".to_string(), None);
        assert!(matches!(
            cart.order_request(Some(&anonymous)),
            Err(Error::MissingUser)
        ));

        let session = test_session();
        assert!(matches!(
            cart.order_request(Some(&session)),
            Err(Error::EmptyCart)
        ));
    }

    #[test]
    fn test_order_request_payload() {
        let mut cart = Cart::new();
        cart.add_or_adjust(pizza(), 2);
        cart.add(salad());

        let session = test_session();
        let request = cart.order_request(Some(&session)).unwrap();

        assert_eq!(request.user, "user-1");
        assert_eq!(request.total_price, 26.0);
        assert_eq!(request.status, OrderStatus::Pending);
        assert_eq!(request.food_order_items.len(), 2);
        assert_eq!(request.food_order_items[0].food, "food-pizza");
        assert_eq!(request.food_order_items[0].quantity, 2);

        // Construction does not consume the cart
        assert_eq!(cart.len(), 2);
    }
}
