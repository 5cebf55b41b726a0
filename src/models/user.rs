use serde::{Deserialize, Serialize};

/// Represents a registered user account
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier for the user
    #[serde(rename = "_id")]
    pub id: String,
    /// Email address of the user
    pub email: String,
    /// Display name of the user
    pub name: String,
    /// Phone number of the user
    pub phone_number: String,
    /// Timestamp when the account was created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    /// Optional profile picture URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
}

impl User {
    /// Creates a new User with required fields
    pub fn new(id: String, email: String, name: String, phone_number: String) -> Self {
        Self {
            id,
            email,
            name,
            phone_number,
            created_at: None,
            profile_picture: None,
        }
    }

    /// Sets the profile picture URL
    pub fn with_profile_picture(mut self, profile_picture: String) -> Self {
        self.profile_picture = Some(profile_picture);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_decodes_wire_shape() {
        let json = r#"{
            "_id": "user-1",
            "email": "jamie@example.com",
            "name": "Jamie",
            "phoneNumber": "555-0100",
            "createdAt": "2024-03-01T12:00:00Z"
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "user-1");
        assert_eq!(user.phone_number, "555-0100");
        assert!(user.created_at.is_some());
        assert!(user.profile_picture.is_none());
    }
}
