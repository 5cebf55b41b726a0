use serde::{Deserialize, Serialize};

/// Represents a food category used to filter the menu
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique identifier for the category
    #[serde(rename = "_id")]
    pub id: String,
    /// Display name of the category
    pub category_name: String,
}

impl Category {
    /// Creates a new Category
    pub fn new(id: String, category_name: String) -> Self {
        Self { id, category_name }
    }
}

/// Category as it appears on the wire: either an embedded category object or
/// a bare identifier, depending on whether the backend populated the field
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum CategoryRef {
    /// Populated category object
    Embedded(Category),
    /// Bare category identifier
    Id(String),
}

impl CategoryRef {
    /// Returns the category identifier in either representation
    pub fn id(&self) -> &str {
        match self {
            CategoryRef::Embedded(category) => &category.id,
            CategoryRef::Id(id) => id,
        }
    }

    /// Returns the category name if the reference is populated
    pub fn name(&self) -> Option<&str> {
        match self {
            CategoryRef::Embedded(category) => Some(&category.category_name),
            CategoryRef::Id(_) => None,
        }
    }
}

/// Ingredients as they appear on the wire: free text, a list, or absent
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Ingredients {
    /// Free-text ingredient description
    Text(String),
    /// Itemized ingredient list
    List(Vec<String>),
}

impl Ingredients {
    /// Returns a display string, joining itemized lists with commas
    pub fn display(&self) -> String {
        match self {
            Ingredients::Text(text) => text.clone(),
            Ingredients::List(items) => items.join(", "),
        }
    }
}

/// Represents a food that can be ordered
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Food {
    /// Unique identifier for the food
    #[serde(rename = "_id")]
    pub id: String,
    /// Display name of the food
    pub food_name: String,
    /// Unit price of the food
    pub price: f64,
    /// Image reference for the food
    #[serde(default)]
    pub image: String,
    /// Optional ingredient description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Ingredients>,
    /// Category of the food, populated or bare depending on the endpoint
    pub category: CategoryRef,
}

impl Food {
    /// Creates a new Food with required fields
    pub fn new(id: String, food_name: String, price: f64, category: CategoryRef) -> Self {
        Self {
            id,
            food_name,
            price,
            image: String::new(),
            ingredients: None,
            category,
        }
    }

    /// Sets the image reference
    pub fn with_image(mut self, image: String) -> Self {
        self.image = image;
        self
    }

    /// Sets the ingredient description
    pub fn with_ingredients(mut self, ingredients: Ingredients) -> Self {
        self.ingredients = Some(ingredients);
        self
    }

    /// Returns the ingredient text for display, or a placeholder when absent
    pub fn ingredients_text(&self) -> String {
        self.ingredients
            .as_ref()
            .map(Ingredients::display)
            .unwrap_or_else(|| "Not specified".to_string())
    }

    /// Replaces a bare category reference with the matching populated
    /// category from the given list, if one is known
    pub fn normalize_category(&mut self, categories: &[Category]) {
        if let CategoryRef::Id(id) = &self.category {
            if let Some(category) = categories.iter().find(|c| &c.id == id) {
                self.category = CategoryRef::Embedded(category.clone());
            }
        }
    }
}
