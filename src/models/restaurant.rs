use serde::{Deserialize, Serialize};

/// Represents a restaurant listed on the dashboard
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    /// Unique identifier for the restaurant
    #[serde(rename = "_id")]
    pub id: String,
    /// Display name of the restaurant
    pub name: String,
    /// Location of the restaurant
    #[serde(default)]
    pub location: String,
    /// Picture reference for the restaurant
    #[serde(default)]
    pub picture: String,
    /// Free-text information about the restaurant
    #[serde(default)]
    pub information: String,
    /// Phone number of the restaurant
    #[serde(default)]
    pub phone_number: Option<i64>,
    /// Timestamp when the restaurant was created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}
