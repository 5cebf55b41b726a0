//! Catalog retrieval API
//!
//! Read-only access to the foods, categories, restaurants and notifications
//! exposed by the backend. Responses of overlapping fetches are returned in
//! completion order, not dispatch order; callers that care about ordering
//! should serialize their calls.

use crate::api::http::HttpClient;
use crate::models::{Category, Food, Notification, Restaurant};
use crate::Result;
use serde::Deserialize;

#[derive(Deserialize, Debug)]
struct FoodsEnvelope {
    #[serde(default)]
    foods: Vec<Food>,
}

#[derive(Deserialize, Debug)]
struct CategoriesEnvelope {
    #[serde(default)]
    categories: Vec<Category>,
}

#[derive(Deserialize, Debug)]
struct RestaurantsEnvelope {
    #[serde(default)]
    restaurants: Vec<Restaurant>,
}

#[derive(Deserialize, Debug)]
struct RestaurantEnvelope {
    restaurant: Restaurant,
}

#[derive(Deserialize, Debug)]
struct NotificationsEnvelope {
    #[serde(default)]
    notifications: Vec<Notification>,
}

/// The food list and category list fetched together, with every food's
/// category normalized to its populated form where known
#[derive(Debug, Clone, Default)]
pub struct Menu {
    /// All foods, categories normalized
    pub foods: Vec<Food>,
    /// All categories
    pub categories: Vec<Category>,
}

/// API for reading the catalog
#[derive(Debug, Clone)]
pub struct CatalogApi {
    http: HttpClient,
}

impl CatalogApi {
    /// Creates a new CatalogApi over the given transport
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Fetches all foods
    pub async fn foods(&self) -> Result<Vec<Food>> {
        let envelope: FoodsEnvelope = self.http.get("/food", None).await?;
        Ok(envelope.foods)
    }

    /// Fetches all food categories
    pub async fn categories(&self) -> Result<Vec<Category>> {
        let envelope: CategoriesEnvelope = self.http.get("/food-category", None).await?;
        Ok(envelope.categories)
    }

    /// Fetches all restaurants
    pub async fn restaurants(&self) -> Result<Vec<Restaurant>> {
        let envelope: RestaurantsEnvelope = self.http.get("/restaurant", None).await?;
        Ok(envelope.restaurants)
    }

    /// Fetches a single restaurant by identifier
    pub async fn restaurant(&self, id: &str) -> Result<Restaurant> {
        let envelope: RestaurantEnvelope = self.http.get(&format!("/restaurant/{id}"), None).await?;
        Ok(envelope.restaurant)
    }

    /// Fetches all notifications
    pub async fn notifications(&self) -> Result<Vec<Notification>> {
        let envelope: NotificationsEnvelope = self.http.get("/notif", None).await?;
        Ok(envelope.notifications)
    }

    /// Fetches foods and categories concurrently and normalizes every food's
    /// category reference at this single ingestion point
    pub async fn load_menu(&self) -> Result<Menu> {
        let (mut foods, categories) =
            futures::future::try_join(self.foods(), self.categories()).await?;

        for food in &mut foods {
            food.normalize_category(&categories);
        }

        Ok(Menu { foods, categories })
    }
}

/// Filters a food list down to one category; `None` keeps everything
pub fn filter_by_category<'a>(foods: &'a [Food], category_id: Option<&str>) -> Vec<&'a Food> {
    match category_id {
        Some(id) => foods
            .iter()
            .filter(|food| food.category.id() == id)
            .collect(),
        None => foods.iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryRef;

    fn test_food(id: &str, category: &str) -> Food {
        Food::new(
            id.to_string(),
            format!("food {id}"),
            5.0,
            CategoryRef::Id(category.to_string()),
        )
    }

    #[test]
    fn test_filter_by_category() {
        let foods = vec![
            test_food("food-1", "cat-1"),
            test_food("food-2", "cat-2"),
            test_food("food-3", "cat-1"),
        ];

        let filtered = filter_by_category(&foods, Some("cat-1"));
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|food| food.category.id() == "cat-1"));

        let all = filter_by_category(&foods, None);
        assert_eq!(all.len(), 3);

        let none = filter_by_category(&foods, Some("cat-9"));
        assert!(none.is_empty());
    }

    #[test]
    fn test_envelopes_tolerate_missing_lists() {
        let envelope: FoodsEnvelope = serde_json::from_str("{}").unwrap();
        assert!(envelope.foods.is_empty());

        let envelope: CategoriesEnvelope =
            serde_json::from_str(r#"{"message": "ok", "categories": []}"#).unwrap();
        assert!(envelope.categories.is_empty());
    }
}
