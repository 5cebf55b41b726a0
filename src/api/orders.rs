//! Order submission and retrieval API

use crate::api::http::HttpClient;
use crate::core::cart::Cart;
use crate::core::error::Error;
use crate::core::history::OrderHistory;
use crate::core::session::Session;
use crate::models::Order;
use crate::Result;
use serde::Deserialize;
use tracing::info;

/// Response to a successful order creation
#[derive(Deserialize, Debug, Clone)]
pub struct OrderConfirmation {
    /// Human-readable confirmation message
    #[serde(default)]
    pub message: String,
    /// The created order
    pub order: Order,
}

#[derive(Deserialize, Debug)]
struct OrdersEnvelope {
    #[serde(default)]
    orders: Vec<Order>,
}

/// API for creating and listing orders
#[derive(Debug, Clone)]
pub struct OrderApi {
    http: HttpClient,
}

impl OrderApi {
    /// Creates a new OrderApi over the given transport
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Submits the cart as a new order.
    ///
    /// Preconditions are checked before any request is sent: a session with a
    /// user identity must be present and the cart must be non-empty. On
    /// success the cart is cleared; on any failure it is left untouched so
    /// the user can re-invoke submission. Nothing is retried automatically.
    pub async fn submit(
        &self,
        cart: &mut Cart,
        session: Option<&Session>,
    ) -> Result<OrderConfirmation> {
        let request = cart.order_request(session)?;
        let token = match session {
            Some(session) => session.token()?,
            None => return Err(Error::NoSession),
        };

        let confirmation: OrderConfirmation = self.http.post("/order", &request, Some(token)).await?;

        cart.clear();
        info!(order_id = %confirmation.order.id, message = %confirmation.message, "order created");
        Ok(confirmation)
    }

    /// Submits the cart and appends the created order to the given history
    pub async fn place(
        &self,
        cart: &mut Cart,
        session: Option<&Session>,
        history: &mut OrderHistory,
    ) -> Result<OrderConfirmation> {
        let confirmation = self.submit(cart, session).await?;
        history.record(confirmation.order.clone());
        Ok(confirmation)
    }

    /// Fetches the orders previously created by the given user
    pub async fn list(&self, session: &Session, username: &str) -> Result<Vec<Order>> {
        let token = session.token()?;
        let envelope: OrdersEnvelope = self
            .http
            .get_with_query("/order", &[("username", username)], Some(token))
            .await?;
        Ok(envelope.orders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::models::{CategoryRef, Food, OrderStatus, OrderUser, User};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn test_api() -> OrderApi {
        let config = Config::new().with_base_url("http://localhost:1");
        OrderApi::new(HttpClient::new(&config).unwrap())
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

    fn pizza() -> Food {
        Food::new(
            "food-pizza".to_string(),
            "Pizza".to_string(),
            10.0,
            CategoryRef::Id("cat-1".to_string()),
        )
    }

    #[tokio::test]
    async fn test_submit_without_session_is_rejected_before_any_request() {
        let api = test_api();
        let mut cart = Cart::new();
        cart.add(pizza());

        let result = api.submit(&mut cart, None).await;
        assert!(matches!(result, Err(Error::NoSession)));
        // The cart is untouched on failure
        assert_eq!(cart.len(), 1);
    }

    #[tokio::test]
    async fn test_submit_empty_cart_is_rejected_before_any_request() {
        let api = test_api();
        let mut cart = Cart::new();
        let session = test_session();

        let result = api.submit(&mut cart, Some(&session)).await;
        assert!(matches!(result, Err(Error::EmptyCart)));
    }

    #[tokio::test]
    async fn test_submit_without_user_identity_is_rejected() {
        let api = test_api();
        let mut cart = Cart::new();
        cart.add(pizza());
        let session = Session::new("token-123".to_string(), None);

        let result = api.submit(&mut cart, Some(&session)).await;
        assert!(matches!(result, Err(Error::MissingUser)));
        assert_eq!(cart.len(), 1);
    }

    /// Serves one canned JSON response on a local listener, reading the full
    /// request first so the client sees a well-formed exchange
    async fn serve_once(listener: TcpListener, body: &'static str) {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);

            if let Some(header_end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                let headers = String::from_utf8_lossy(&buf[..header_end]).to_lowercase();
                let content_length = headers
                    .lines()
                    .find_map(|line| line.strip_prefix("content-length:"))
                    .and_then(|value| value.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if buf.len() >= header_end + 4 + content_length {
                    break;
                }
            }
        }

        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
    }

    #[tokio::test]
    async fn test_submit_success_clears_cart_and_appends_history() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let body = r#"{
            "message": "Order created successfully",
            "order": {
                "_id": "order-2",
                "user": "user-1",
                "totalPrice": 20.0,
                "foodOrderItems": [{"food": "food-pizza", "quantity": 2}],
                "status": "PENDING"
            }
        }"#;
        let server = tokio::spawn(serve_once(listener, body));

        let config = Config::new().with_base_url(format!("http://{addr}"));
        let api = OrderApi::new(HttpClient::new(&config).unwrap());
        let session = test_session();

        let mut cart = Cart::new();
        cart.add(pizza());
        cart.add(pizza());

        // A previously recorded order must survive the new submission
        let mut history = OrderHistory::new();
        history.record(Order {
            id: "order-1".to_string(),
            user: OrderUser::Id("user-1".to_string()),
            total_price: 10.0,
            food_order_items: Vec::new(),
            status: OrderStatus::Delivered,
            created_at: None,
        });

        let confirmation = api
            .place(&mut cart, Some(&session), &mut history)
            .await
            .unwrap();

        assert_eq!(confirmation.message, "Order created successfully");
        assert!(cart.is_empty());
        assert_eq!(history.len(), 2);
        assert_eq!(history.orders()[0].id, "order-1");
        assert_eq!(history.orders()[1].id, "order-2");

        server.await.unwrap();
    }

    #[test]
    fn test_confirmation_decodes_wire_shape() {
        let json = r#"{
            "message": "Order created successfully",
            "order": {
                "_id": "order-1",
                "user": "user-1",
                "totalPrice": 10.0,
                "foodOrderItems": [{"food": "food-pizza", "quantity": 1}],
                "status": "PENDING"
            }
        }"#;

        let confirmation: OrderConfirmation = serde_json::from_str(json).unwrap();
        assert_eq!(confirmation.message, "Order created successfully");
        assert_eq!(confirmation.order.id, "order-1");
    }
}
