//! End-to-end walkthrough: log in, browse the menu, build a cart and place
//! an order against a running backend.

use foodboard_client::api::auth::SignUpRequest;
use foodboard_client::api::catalog::filter_by_category;
use foodboard_client::config::Config;
use foodboard_client::{Cart, Client, OrderHistory};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,foodboard_client=debug".into()),
        )
        .init();

    let base_url =
        std::env::var("FOODBOARD_URL").unwrap_or_else(|_| "http://localhost:5000".to_string());
    let config = Config::new()
        .with_base_url(base_url)
        .with_request_timeout(Duration::from_secs(10));
    let client = Client::new(config)?;

    // Sign up, falling back to log-in when the account already exists
    let request = SignUpRequest {
        email: "jamie@example.com".to_string(),
        password: "hunter2hunter2".to_string(),
        name: "Jamie".to_string(),
        phone_number: "555-0100".to_string(),
    };
    let response = match client.auth().sign_up(&request).await {
        Ok(response) => response,
        Err(_) => {
            client
                .auth()
                .log_in(&request.email, &request.password)
                .await?
        }
    };
    println!("{}", response.message);
    let session = response.into_session()?;

    // Browse the menu, filtered to the first category
    let menu = client.catalog().load_menu().await?;
    println!(
        "{} foods across {} categories",
        menu.foods.len(),
        menu.categories.len()
    );

    let first_category = menu.categories.first().map(|category| category.id.as_str());
    let shown = filter_by_category(&menu.foods, first_category);
    for food in &shown {
        println!("  {} — ${:.2}", food.food_name, food.price);
    }

    // Build a cart from the first two foods
    let mut cart = Cart::new();
    for food in menu.foods.iter().take(2) {
        cart.add(food.clone());
    }
    if let Some(food) = menu.foods.first() {
        cart.increase(&food.id);
    }
    println!("cart total: ${:.2}", cart.total());

    // Place the order and show the confirmation
    let mut history = OrderHistory::new();
    let confirmation = client
        .orders()
        .place(&mut cart, Some(&session), &mut history)
        .await?;
    println!(
        "{} (order {}, status {})",
        confirmation.message,
        confirmation.order.id,
        confirmation.order.status.as_str()
    );
    assert!(cart.is_empty());

    // Show everything this user has ordered, totals recomputed client-side
    if let Some(user) = &session.user {
        let mut orders = client.orders().list(&session, &user.name).await?;
        for order in &mut orders {
            order.resolve_items(&menu.foods);
            println!(
                "order {}: {} items, ${:.2}",
                order.id,
                order.food_order_items.len(),
                order.computed_total()
            );
        }
    }

    Ok(())
}
